//! 命令执行器
//!
//! 每个 `Command` 对应一次 `RuleStore` 调用，结果包装为 `StoreMessage`。

use policy_console_core::{RuleStore, StoreError, StoreResult};

use crate::command::Command;
use crate::message::{AppMessage, SaveMode, StoreMessage};

/// 执行命令，返回结果消息
pub fn execute(store: &mut dyn RuleStore, command: Command) -> AppMessage {
    log::debug!("Executing {command:?}");

    let msg = match command {
        Command::FetchRules => {
            StoreMessage::RulesFetched(logged("fetch rules", store.fetch_rules()))
        }
        Command::FetchGlobalRules => StoreMessage::GlobalRulesFetched(logged(
            "fetch global rules",
            store.fetch_global_rules(),
        )),

        Command::AddRule { rule, principals } => StoreMessage::RuleSaved {
            mode: SaveMode::Add,
            result: logged("add rule", store.add_rule(&rule, &principals)),
        },
        Command::UpdateRule { rule, principals } => StoreMessage::RuleSaved {
            mode: SaveMode::Update,
            result: logged("update rule", store.update_rule(&rule, &principals)),
        },
        Command::RemoveRule { name } => {
            StoreMessage::RuleRemoved(logged("remove rule", store.remove_rule(&name)))
        }
        Command::ReorderRules { rules, selected } => {
            let result = logged("reorder rules", store.reorder_rules(&rules));
            StoreMessage::RulesReordered {
                rules,
                selected,
                result,
            }
        }

        Command::AddGlobalRule(rule) => StoreMessage::GlobalRuleSaved {
            mode: SaveMode::Add,
            result: logged("add global rule", store.add_global_rule(&rule)),
        },
        Command::UpdateGlobalRule(rule) => StoreMessage::GlobalRuleSaved {
            mode: SaveMode::Update,
            result: logged("update global rule", store.update_global_rule(&rule)),
        },
        Command::RemoveGlobalRule { name } => StoreMessage::GlobalRuleRemoved(logged(
            "remove global rule",
            store.remove_global_rule(&name),
        )),
    };

    AppMessage::Store(msg)
}

/// 记录失败：用户可预期的错误用 warn，其余用 error
fn logged<T>(operation: &str, result: StoreResult<T>) -> StoreResult<T> {
    if let Err(e) = &result {
        log_failure(operation, e);
    }
    result
}

fn log_failure(operation: &str, e: &StoreError) {
    if e.is_expected() {
        log::warn!("Failed to {operation}: {e}");
    } else {
        log::error!("Failed to {operation}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_console_core::{GlobalRule, InMemoryRuleStore, Rule};

    fn store() -> InMemoryRuleStore {
        InMemoryRuleStore::new("targets")
            .with_rules([
                Rule::new("a", "git:refs/heads/a", "alice"),
                Rule::new("b", "git:refs/heads/b", "bob"),
            ])
            .unwrap()
    }

    #[test]
    fn fetch_returns_rules_in_order() {
        let mut store = store();
        let AppMessage::Store(StoreMessage::RulesFetched(Ok(rules))) =
            execute(&mut store, Command::FetchRules)
        else {
            panic!("unexpected message");
        };
        let names: Vec<_> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn update_reports_mode() {
        let mut store = store();
        let msg = execute(
            &mut store,
            Command::UpdateRule {
                rule: Rule::new("a", "git:refs/heads/main", "carol"),
                principals: ["carol".to_string()].into(),
            },
        );
        assert!(matches!(
            msg,
            AppMessage::Store(StoreMessage::RuleSaved {
                mode: SaveMode::Update,
                result: Ok(())
            })
        ));
        assert_eq!(store.fetch_rules().unwrap()[0].pattern, "git:refs/heads/main");
    }

    #[test]
    fn store_errors_are_carried() {
        let mut store = store();
        let msg = execute(&mut store, Command::RemoveRule { name: "zzz".into() });
        assert!(matches!(
            msg,
            AppMessage::Store(StoreMessage::RuleRemoved(Err(StoreError::RuleNotFound(_))))
        ));
    }

    #[test]
    fn reorder_echoes_new_order() {
        let mut store = store();
        let reordered = vec![
            Rule::new("b", "git:refs/heads/b", "bob"),
            Rule::new("a", "git:refs/heads/a", "alice"),
        ];
        let msg = execute(
            &mut store,
            Command::ReorderRules {
                rules: reordered.clone(),
                selected: 0,
            },
        );
        let AppMessage::Store(StoreMessage::RulesReordered {
            rules,
            selected,
            result,
        }) = msg
        else {
            panic!("unexpected message");
        };
        assert_eq!(rules, reordered);
        assert_eq!(selected, 0);
        assert!(result.is_ok());
        assert_eq!(store.fetch_rules().unwrap(), reordered);
    }

    #[test]
    fn global_rule_round_trip() {
        let mut store = store();
        let rule = GlobalRule::threshold("two", vec!["git:refs/heads/main".to_string()], 2);
        execute(&mut store, Command::AddGlobalRule(rule.clone()));
        assert_eq!(store.fetch_global_rules().unwrap(), vec![rule]);

        let msg = execute(&mut store, Command::RemoveGlobalRule { name: "two".into() });
        assert!(matches!(
            msg,
            AppMessage::Store(StoreMessage::GlobalRuleRemoved(Ok(())))
        ));
    }
}
