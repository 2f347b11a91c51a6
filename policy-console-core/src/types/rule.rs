use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::utils::split_principals;

/// Policy rule
///
/// The position of a rule within its policy is its evaluation priority.
/// Names are expected to be unique within a policy; the store enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Rule name
    pub name: String,
    /// Namespace pattern the rule protects (e.g. `git:refs/heads/main`)
    pub pattern: String,
    /// Authorized principal IDs, comma-joined
    pub key: String,
}

impl Rule {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            key: key.into(),
        }
    }

    /// Principal IDs parsed from `key`
    pub fn principals(&self) -> BTreeSet<String> {
        split_principals(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principals_are_split_from_key() {
        let rule = Rule::new("protect-main", "git:refs/heads/main", "alice, bob,carol");
        let principals: Vec<_> = rule.principals().into_iter().collect();
        assert_eq!(principals, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn empty_key_has_no_principals() {
        let rule = Rule::new("r", "p", "");
        assert!(rule.principals().is_empty());
    }
}
