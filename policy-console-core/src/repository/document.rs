//! Persisted policy document
//!
//! Shared by `JsonRuleStore` (on disk) and `InMemoryRuleStore`. All
//! store-side validation lives here so both stores behave identically.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::types::{GlobalRule, Rule};

/// Rule as persisted: principals kept as a list rather than a joined string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRule {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub principals: Vec<String>,
}

impl StoredRule {
    fn from_rule(rule: &Rule, principals: &BTreeSet<String>) -> Self {
        Self {
            name: rule.name.clone(),
            pattern: rule.pattern.clone(),
            principals: principals.iter().cloned().collect(),
        }
    }

    fn to_rule(&self) -> Rule {
        Rule::new(&self.name, &self.pattern, self.principals.join(", "))
    }
}

/// Root of trust section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootOfTrust {
    #[serde(default)]
    pub global_rules: Vec<GlobalRule>,
}

/// One named policy (e.g. `targets`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyFile {
    #[serde(default)]
    pub rules: Vec<StoredRule>,
}

/// Whole repository document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    #[serde(default)]
    pub root: RootOfTrust,
    #[serde(default)]
    pub policies: BTreeMap<String, PolicyFile>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_signed_by: Option<String>,
}

impl PolicyDocument {
    pub fn rules(&self, policy: &str) -> Vec<Rule> {
        self.policies
            .get(policy)
            .map(|p| p.rules.iter().map(StoredRule::to_rule).collect())
            .unwrap_or_default()
    }

    pub fn global_rules(&self) -> Vec<GlobalRule> {
        self.root.global_rules.clone()
    }

    pub fn add_rule(
        &mut self,
        policy: &str,
        rule: &Rule,
        principals: &BTreeSet<String>,
    ) -> StoreResult<()> {
        validate_name(&rule.name, "rule")?;
        let rules = &mut self.policies.entry(policy.to_string()).or_default().rules;
        if rules.iter().any(|r| r.name == rule.name) {
            return Err(StoreError::DuplicateRule(rule.name.clone()));
        }
        rules.push(StoredRule::from_rule(rule, principals));
        Ok(())
    }

    pub fn update_rule(
        &mut self,
        policy: &str,
        rule: &Rule,
        principals: &BTreeSet<String>,
    ) -> StoreResult<()> {
        let stored = self
            .policies
            .get_mut(policy)
            .and_then(|p| p.rules.iter_mut().find(|r| r.name == rule.name))
            .ok_or_else(|| StoreError::RuleNotFound(rule.name.clone()))?;
        *stored = StoredRule::from_rule(rule, principals);
        Ok(())
    }

    pub fn remove_rule(&mut self, policy: &str, name: &str) -> StoreResult<()> {
        let rules = self
            .policies
            .get_mut(policy)
            .map(|p| &mut p.rules)
            .ok_or_else(|| StoreError::RuleNotFound(name.to_string()))?;
        let original_len = rules.len();
        rules.retain(|r| r.name != name);
        if rules.len() == original_len {
            return Err(StoreError::RuleNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Reorder the stored rules to follow `order` (matched by name).
    pub fn reorder_rules(&mut self, policy: &str, order: &[Rule]) -> StoreResult<()> {
        let rules = &mut self.policies.entry(policy.to_string()).or_default().rules;

        let mut stored_names: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        let mut requested: Vec<&str> = order.iter().map(|r| r.name.as_str()).collect();
        stored_names.sort_unstable();
        requested.sort_unstable();
        if stored_names != requested {
            return Err(StoreError::Validation(
                "new rule order must contain exactly the existing rules".to_string(),
            ));
        }

        let mut remaining = std::mem::take(rules);
        for wanted in order {
            if let Some(pos) = remaining.iter().position(|r| r.name == wanted.name) {
                rules.push(remaining.remove(pos));
            }
        }
        Ok(())
    }

    pub fn add_global_rule(&mut self, rule: &GlobalRule) -> StoreResult<()> {
        validate_global_rule(rule)?;
        let rules = &mut self.root.global_rules;
        if rules.iter().any(|r| r.rule_name == rule.rule_name) {
            return Err(StoreError::DuplicateGlobalRule(rule.rule_name.clone()));
        }
        rules.push(rule.clone());
        Ok(())
    }

    pub fn update_global_rule(&mut self, rule: &GlobalRule) -> StoreResult<()> {
        validate_global_rule(rule)?;
        let stored = self
            .root
            .global_rules
            .iter_mut()
            .find(|r| r.rule_name == rule.rule_name)
            .ok_or_else(|| StoreError::GlobalRuleNotFound(rule.rule_name.clone()))?;
        *stored = rule.clone();
        Ok(())
    }

    pub fn remove_global_rule(&mut self, name: &str) -> StoreResult<()> {
        let rules = &mut self.root.global_rules;
        let original_len = rules.len();
        rules.retain(|r| r.rule_name != name);
        if rules.len() == original_len {
            return Err(StoreError::GlobalRuleNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Record who signed the latest change
    pub fn stamp(&mut self, key_id: &str) {
        self.updated_at = Some(Utc::now());
        self.last_signed_by = Some(key_id.to_string());
    }
}

fn validate_name(name: &str, what: &str) -> StoreResult<()> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation(format!("{what} name must not be empty")));
    }
    Ok(())
}

fn validate_global_rule(rule: &GlobalRule) -> StoreResult<()> {
    validate_name(&rule.rule_name, "global rule")?;
    if rule.is_threshold() && rule.threshold == 0 {
        return Err(StoreError::Validation(
            "threshold must be at least 1".to_string(),
        ));
    }
    Ok(())
}
