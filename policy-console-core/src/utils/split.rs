//! Comma-separated list helpers

use std::collections::BTreeSet;

/// Split a comma-separated string, trim every entry and drop empty ones.
///
/// Order is preserved (namespaces of a global rule are displayed in input order).
pub fn split_and_trim(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Principal ID set from a comma-separated string
pub fn split_principals(input: &str) -> BTreeSet<String> {
    split_and_trim(input).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_order() {
        assert_eq!(
            split_and_trim(" git:refs/heads/main ,git:refs/tags/*"),
            vec!["git:refs/heads/main", "git:refs/tags/*"]
        );
    }

    #[test]
    fn drops_empty_entries() {
        assert_eq!(split_and_trim("a,, ,b,"), vec!["a", "b"]);
        assert!(split_and_trim("").is_empty());
    }

    #[test]
    fn principals_are_deduplicated() {
        let set = split_principals("alice, bob, alice");
        assert_eq!(set.len(), 2);
        assert!(set.contains("alice"));
        assert!(set.contains("bob"));
    }
}
