//! Rule persistence abstract Trait

use std::collections::BTreeSet;

use crate::error::StoreResult;
use crate::types::{GlobalRule, Rule};

/// Rule Store Trait
///
/// Synchronous facade over the policy repository. Calls block the caller for
/// their whole duration; implementations are expected to be local and fast.
///
/// Implementations:
/// - `JsonRuleStore`: JSON policy file inside a repository directory
/// - `InMemoryRuleStore`: no persistence (tests, embedding)
pub trait RuleStore {
    /// Get all rules of the active policy, in evaluation order
    fn fetch_rules(&self) -> StoreResult<Vec<Rule>>;

    /// Get all global rules
    fn fetch_global_rules(&self) -> StoreResult<Vec<GlobalRule>>;

    /// Append a rule to the active policy
    ///
    /// # Arguments
    /// * `rule` - Rule data
    /// * `principals` - Principal IDs authorized by the rule
    fn add_rule(&mut self, rule: &Rule, principals: &BTreeSet<String>) -> StoreResult<()>;

    /// Replace the pattern and principals of the rule named `rule.name`
    fn update_rule(&mut self, rule: &Rule, principals: &BTreeSet<String>) -> StoreResult<()>;

    /// Delete rule
    ///
    /// # Arguments
    /// * `name` - Rule name
    fn remove_rule(&mut self, name: &str) -> StoreResult<()>;

    /// Persist a new order for the active policy
    ///
    /// `rules` must contain exactly the stored rules (by name).
    fn reorder_rules(&mut self, rules: &[Rule]) -> StoreResult<()>;

    /// Add global rule
    fn add_global_rule(&mut self, rule: &GlobalRule) -> StoreResult<()>;

    /// Replace the global rule named `rule.rule_name`
    fn update_global_rule(&mut self, rule: &GlobalRule) -> StoreResult<()>;

    /// Delete global rule
    fn remove_global_rule(&mut self, name: &str) -> StoreResult<()>;
}
