//! 列表状态定义
//!
//! 规则列表与全局规则列表共用 `ListView`，列表项只用于渲染，
//! 真正的数据仍保存在 `App::rules` / `App::global_rules` 中。

use policy_console_core::{GlobalRule, Rule};

/// 可以出现在列表中的条目
pub trait ListEntry {
    /// 标题（规则名称）
    fn title(&self) -> &str;

    /// 描述（可包含换行）
    fn description(&self) -> &str;

    /// 用于查找条目的值（即规则名称）
    fn filter_value(&self) -> &str;
}

/// 列表项（只读投影）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub title: String,
    pub description: String,
}

impl ListItem {
    /// 从规则构建列表项
    pub fn from_rule(rule: &Rule) -> Self {
        Self {
            title: rule.name.clone(),
            description: format!("Pattern: {}, Key: {}", rule.pattern, rule.key),
        }
    }

    /// 从全局规则构建列表项
    pub fn from_global_rule(rule: &GlobalRule) -> Self {
        let mut description = format!(
            "Type: {}\nNamespaces: {}",
            rule.rule_type,
            rule.rule_patterns.join(", ")
        );
        if rule.is_threshold() {
            description.push_str(&format!("\nThreshold: {}", rule.threshold));
        }
        Self {
            title: rule.rule_name.clone(),
            description,
        }
    }
}

impl ListEntry for ListItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn filter_value(&self) -> &str {
        &self.title
    }
}

/// 列表视图状态
#[derive(Debug, Clone, Default)]
pub struct ListView {
    /// 列表项
    pub items: Vec<ListItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换列表项，保持选中位置（超出范围时收缩到最后一项）
    pub fn set_items(&mut self, items: Vec<ListItem>) {
        self.items = items;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    /// 选中指定位置
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.items.len().saturating_sub(1));
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = self.items.len() - 1;
        }
    }

    /// 获取当前选中的列表项
    pub fn selected_item(&self) -> Option<&ListItem> {
        self.items.get(self.selected)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
