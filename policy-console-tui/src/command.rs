//! 规则存储命令
//!
//! Update 层不直接调用 `RuleStore`，而是返回 `Command`，
//! 由 `backend::execute` 执行后把结果作为 `StoreMessage` 送回 Update 层。

use std::collections::BTreeSet;

use policy_console_core::{GlobalRule, Rule};

/// 需要访问规则存储的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 重新获取规则
    FetchRules,
    /// 重新获取全局规则
    FetchGlobalRules,
    AddRule {
        rule: Rule,
        principals: BTreeSet<String>,
    },
    UpdateRule {
        rule: Rule,
        principals: BTreeSet<String>,
    },
    RemoveRule {
        name: String,
    },
    /// 以完整的新顺序替换规则，`selected` 为移动后规则所在的位置
    ReorderRules {
        rules: Vec<Rule>,
        selected: usize,
    },
    AddGlobalRule(GlobalRule),
    UpdateGlobalRule(GlobalRule),
    RemoveGlobalRule {
        name: String,
    },
}
