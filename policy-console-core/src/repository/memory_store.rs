//! In-memory rule store
//!
//! Same validation as `JsonRuleStore`, no persistence and no signer.

use std::collections::BTreeSet;

use super::document::PolicyDocument;
use crate::error::StoreResult;
use crate::traits::RuleStore;
use crate::types::{GlobalRule, Rule};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleStore {
    document: PolicyDocument,
    policy_name: String,
}

impl InMemoryRuleStore {
    pub fn new(policy_name: impl Into<String>) -> Self {
        Self {
            document: PolicyDocument::default(),
            policy_name: policy_name.into(),
        }
    }

    /// Seed with rules (principals taken from each rule's `key`)
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> StoreResult<Self> {
        for rule in rules {
            let principals = rule.principals();
            self.document.add_rule(&self.policy_name, &rule, &principals)?;
        }
        Ok(self)
    }

    pub fn with_global_rules(
        mut self,
        rules: impl IntoIterator<Item = GlobalRule>,
    ) -> StoreResult<Self> {
        for rule in rules {
            self.document.add_global_rule(&rule)?;
        }
        Ok(self)
    }

    pub fn document(&self) -> &PolicyDocument {
        &self.document
    }
}

impl RuleStore for InMemoryRuleStore {
    fn fetch_rules(&self) -> StoreResult<Vec<Rule>> {
        Ok(self.document.rules(&self.policy_name))
    }

    fn fetch_global_rules(&self) -> StoreResult<Vec<GlobalRule>> {
        Ok(self.document.global_rules())
    }

    fn add_rule(&mut self, rule: &Rule, principals: &BTreeSet<String>) -> StoreResult<()> {
        self.document.add_rule(&self.policy_name, rule, principals)
    }

    fn update_rule(&mut self, rule: &Rule, principals: &BTreeSet<String>) -> StoreResult<()> {
        self.document
            .update_rule(&self.policy_name, rule, principals)
    }

    fn remove_rule(&mut self, name: &str) -> StoreResult<()> {
        self.document.remove_rule(&self.policy_name, name)
    }

    fn reorder_rules(&mut self, rules: &[Rule]) -> StoreResult<()> {
        self.document.reorder_rules(&self.policy_name, rules)
    }

    fn add_global_rule(&mut self, rule: &GlobalRule) -> StoreResult<()> {
        self.document.add_global_rule(rule)
    }

    fn update_global_rule(&mut self, rule: &GlobalRule) -> StoreResult<()> {
        self.document.update_global_rule(rule)
    }

    fn remove_global_rule(&mut self, name: &str) -> StoreResult<()> {
        self.document.remove_global_rule(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{block_rule, rule, threshold_rule};

    #[test]
    fn seeded_store_fetches_in_order() {
        let store = InMemoryRuleStore::new("targets")
            .with_rules([rule("a"), rule("b")])
            .unwrap()
            .with_global_rules([threshold_rule("two", 2), block_rule("no-force")])
            .unwrap();

        let names: Vec<_> = store.fetch_rules().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(store.fetch_global_rules().unwrap().len(), 2);
    }

    #[test]
    fn rules_are_scoped_to_policy() {
        let mut store = InMemoryRuleStore::new("targets");
        store.add_rule(&rule("a"), &rule("a").principals()).unwrap();

        let other = InMemoryRuleStore {
            document: store.document().clone(),
            policy_name: "other".to_string(),
        };
        assert!(other.fetch_rules().unwrap().is_empty());
    }
}
