//! 规则存储结果处理
//!
//! 每个结果都会写入底部消息；失败时状态保持不变，不会重试。

use super::failure;
use crate::command::Command;
use crate::i18n::t;
use crate::message::{SaveMode, StoreMessage};
use crate::model::{App, Screen};

/// 处理存储结果消息
pub fn update(app: &mut App, msg: StoreMessage) -> Vec<Command> {
    let status = &t().status;

    match msg {
        StoreMessage::RulesFetched(result) => match result {
            Ok(rules) => app.set_rules(rules),
            Err(e) => app.set_status(failure(status.load_rules_failed, e)),
        },

        StoreMessage::GlobalRulesFetched(result) => match result {
            Ok(rules) => app.set_global_rules(rules),
            Err(e) => app.set_status(failure(status.load_global_rules_failed, e)),
        },

        StoreMessage::RuleSaved { mode, result } => match result {
            Ok(()) => {
                let text = match mode {
                    SaveMode::Add => status.rule_added,
                    SaveMode::Update => status.rule_updated,
                };
                return saved(app, text, Screen::PolicyRules, Command::FetchRules);
            }
            // 留在表单上，保留已输入的内容
            Err(e) => app.set_status(failure(status.error, e)),
        },

        StoreMessage::GlobalRuleSaved { mode, result } => match result {
            Ok(()) => {
                let text = match mode {
                    SaveMode::Add => status.global_rule_added,
                    SaveMode::Update => status.global_rule_updated,
                };
                return saved(app, text, Screen::TrustGlobalRules, Command::FetchGlobalRules);
            }
            Err(e) => app.set_status(failure(status.error, e)),
        },

        StoreMessage::RuleRemoved(result) => match result {
            Ok(()) => {
                app.set_status(status.rule_removed);
                return vec![Command::FetchRules];
            }
            Err(e) => app.set_status(failure(status.remove_rule_failed, e)),
        },

        StoreMessage::GlobalRuleRemoved(result) => match result {
            Ok(()) => {
                app.set_status(status.global_rule_removed);
                return vec![Command::FetchGlobalRules];
            }
            Err(e) => app.set_status(failure(status.remove_global_rule_failed, e)),
        },

        StoreMessage::RulesReordered {
            rules,
            selected,
            result,
        } => match result {
            Ok(()) => {
                app.set_rules(rules);
                app.rule_list.select(selected);
                app.set_status(status.rules_reordered);
            }
            Err(e) => app.set_status(failure(status.reorder_failed, e)),
        },
    }

    Vec::new()
}

/// 保存成功：关闭表单，回到列表并重新获取
fn saved(app: &mut App, text: &str, list: Screen, refetch: Command) -> Vec<Command> {
    app.set_status(text);
    app.form = None;
    app.screen = list;
    vec![refetch]
}
