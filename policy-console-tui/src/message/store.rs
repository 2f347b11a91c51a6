//! 规则存储结果消息
//!
//! 由 `backend::execute` 在执行 `Command` 之后产生，Update 层据此更新
//! 集合与底部消息。

use policy_console_core::{GlobalRule, Rule, StoreResult};

/// 保存方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Add,
    Update,
}

/// 存储操作结果
#[derive(Debug, Clone)]
pub enum StoreMessage {
    /// 规则已重新获取
    RulesFetched(StoreResult<Vec<Rule>>),

    /// 全局规则已重新获取
    GlobalRulesFetched(StoreResult<Vec<GlobalRule>>),

    /// 规则已保存
    RuleSaved {
        mode: SaveMode,
        result: StoreResult<()>,
    },

    /// 全局规则已保存
    GlobalRuleSaved {
        mode: SaveMode,
        result: StoreResult<()>,
    },

    /// 规则已删除
    RuleRemoved(StoreResult<()>),

    /// 全局规则已删除
    GlobalRuleRemoved(StoreResult<()>),

    /// 规则已重新排序，成功时 `rules` 成为新的集合
    RulesReordered {
        rules: Vec<Rule>,
        selected: usize,
        result: StoreResult<()>,
    },
}
