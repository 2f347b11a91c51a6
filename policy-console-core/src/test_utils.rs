//! 测试辅助模块
//!
//! 提供便捷的测试工厂方法。

use std::collections::BTreeSet;

use crate::types::{GlobalRule, Rule};
use crate::utils::split_principals;

/// Rule named `name` protecting `git:refs/heads/<name>`, authorized for alice
pub fn rule(name: &str) -> Rule {
    Rule::new(name, format!("git:refs/heads/{name}"), "alice")
}

pub fn principals(input: &str) -> BTreeSet<String> {
    split_principals(input)
}

pub fn threshold_rule(name: &str, threshold: u32) -> GlobalRule {
    GlobalRule::threshold(name, vec!["git:refs/heads/main".to_string()], threshold)
}

pub fn block_rule(name: &str) -> GlobalRule {
    GlobalRule::block_force_pushes(name, vec!["git:refs/heads/*".to_string()])
}
