//! JSON file backed rule store
//!
//! The policy document is re-read on every call so the store always reflects
//! the file on disk, and written through a temporary file + rename.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::document::PolicyDocument;
use super::signer::Signer;
use crate::error::{StoreError, StoreResult};
use crate::traits::RuleStore;
use crate::types::{GlobalRule, Rule};

/// Read the document at `path`; a missing file is an empty document.
pub(super) fn read_document(path: &Path) -> StoreResult<PolicyDocument> {
    if !path.exists() {
        return Ok(PolicyDocument::default());
    }
    let content = fs::read_to_string(path)?;
    let document = serde_json::from_str(&content)?;
    Ok(document)
}

fn write_document(path: &Path, document: &PolicyDocument) -> StoreResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = serde_json::to_string_pretty(document)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Rule store over the repository's policy document
pub struct JsonRuleStore {
    path: PathBuf,
    policy_name: String,
    signer: Option<Signer>,
}

impl JsonRuleStore {
    pub fn new(path: impl Into<PathBuf>, policy_name: impl Into<String>, signer: Option<Signer>) -> Self {
        Self {
            path: path.into(),
            policy_name: policy_name.into(),
            signer,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }

    pub fn is_read_only(&self) -> bool {
        self.signer.is_none()
    }

    /// Load, apply `change`, stamp with the signer and write back.
    fn modify<F>(&self, change: F) -> StoreResult<()>
    where
        F: FnOnce(&mut PolicyDocument, &str) -> StoreResult<()>,
    {
        let signer = self.signer.as_ref().ok_or(StoreError::ReadOnly)?;
        let mut document = read_document(&self.path)?;
        change(&mut document, &self.policy_name)?;
        document.stamp(signer.key_id());
        write_document(&self.path, &document)?;
        log::debug!(
            "Policy document {} updated by {}",
            self.path.display(),
            signer.key_id()
        );
        Ok(())
    }
}

impl RuleStore for JsonRuleStore {
    fn fetch_rules(&self) -> StoreResult<Vec<Rule>> {
        Ok(read_document(&self.path)?.rules(&self.policy_name))
    }

    fn fetch_global_rules(&self) -> StoreResult<Vec<GlobalRule>> {
        Ok(read_document(&self.path)?.global_rules())
    }

    fn add_rule(&mut self, rule: &Rule, principals: &BTreeSet<String>) -> StoreResult<()> {
        self.modify(|doc, policy| doc.add_rule(policy, rule, principals))
    }

    fn update_rule(&mut self, rule: &Rule, principals: &BTreeSet<String>) -> StoreResult<()> {
        self.modify(|doc, policy| doc.update_rule(policy, rule, principals))
    }

    fn remove_rule(&mut self, name: &str) -> StoreResult<()> {
        self.modify(|doc, policy| doc.remove_rule(policy, name))
    }

    fn reorder_rules(&mut self, rules: &[Rule]) -> StoreResult<()> {
        self.modify(|doc, policy| doc.reorder_rules(policy, rules))
    }

    fn add_global_rule(&mut self, rule: &GlobalRule) -> StoreResult<()> {
        self.modify(|doc, _| doc.add_global_rule(rule))
    }

    fn update_global_rule(&mut self, rule: &GlobalRule) -> StoreResult<()> {
        self.modify(|doc, _| doc.update_global_rule(rule))
    }

    fn remove_global_rule(&mut self, name: &str) -> StoreResult<()> {
        self.modify(|doc, _| doc.remove_global_rule(name))
    }
}
