//! 测试工具：记录调用并可注入失败的规则存储

use std::collections::BTreeSet;

use policy_console_core::{
    GlobalRule, InMemoryRuleStore, Rule, RuleStore, StoreError, StoreResult,
};

/// 一次修改类存储调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    AddRule(Rule, BTreeSet<String>),
    UpdateRule(Rule, BTreeSet<String>),
    RemoveRule(String),
    ReorderRules(Vec<String>),
    AddGlobalRule(GlobalRule),
    UpdateGlobalRule(GlobalRule),
    RemoveGlobalRule(String),
}

/// 包装 `InMemoryRuleStore`，记录每次修改调用
///
/// 设置 `fail_with` 后，所有修改调用都返回该错误且不改变数据。
pub struct RecordingStore {
    inner: InMemoryRuleStore,
    pub calls: Vec<StoreCall>,
    pub fail_with: Option<StoreError>,
}

impl RecordingStore {
    pub fn new(rules: Vec<Rule>, global_rules: Vec<GlobalRule>) -> Self {
        let inner = InMemoryRuleStore::new("targets")
            .with_rules(rules)
            .and_then(|s| s.with_global_rules(global_rules))
            .unwrap();
        Self {
            inner,
            calls: Vec::new(),
            fail_with: None,
        }
    }

    pub fn failing(mut self, err: StoreError) -> Self {
        self.fail_with = Some(err);
        self
    }

    fn record(&mut self, call: StoreCall) -> StoreResult<()> {
        self.calls.push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl RuleStore for RecordingStore {
    fn fetch_rules(&self) -> StoreResult<Vec<Rule>> {
        self.inner.fetch_rules()
    }

    fn fetch_global_rules(&self) -> StoreResult<Vec<GlobalRule>> {
        self.inner.fetch_global_rules()
    }

    fn add_rule(&mut self, rule: &Rule, principals: &BTreeSet<String>) -> StoreResult<()> {
        self.record(StoreCall::AddRule(rule.clone(), principals.clone()))?;
        self.inner.add_rule(rule, principals)
    }

    fn update_rule(&mut self, rule: &Rule, principals: &BTreeSet<String>) -> StoreResult<()> {
        self.record(StoreCall::UpdateRule(rule.clone(), principals.clone()))?;
        self.inner.update_rule(rule, principals)
    }

    fn remove_rule(&mut self, name: &str) -> StoreResult<()> {
        self.record(StoreCall::RemoveRule(name.to_string()))?;
        self.inner.remove_rule(name)
    }

    fn reorder_rules(&mut self, rules: &[Rule]) -> StoreResult<()> {
        self.record(StoreCall::ReorderRules(
            rules.iter().map(|r| r.name.clone()).collect(),
        ))?;
        self.inner.reorder_rules(rules)
    }

    fn add_global_rule(&mut self, rule: &GlobalRule) -> StoreResult<()> {
        self.record(StoreCall::AddGlobalRule(rule.clone()))?;
        self.inner.add_global_rule(rule)
    }

    fn update_global_rule(&mut self, rule: &GlobalRule) -> StoreResult<()> {
        self.record(StoreCall::UpdateGlobalRule(rule.clone()))?;
        self.inner.update_global_rule(rule)
    }

    fn remove_global_rule(&mut self, name: &str) -> StoreResult<()> {
        self.record(StoreCall::RemoveGlobalRule(name.to_string()))?;
        self.inner.remove_global_rule(name)
    }
}
