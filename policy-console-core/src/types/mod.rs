//! Domain types shared by the store and the console

mod global_rule;
mod rule;

pub use global_rule::{GlobalRule, GlobalRuleType, ParseGlobalRuleTypeError};
pub use rule::Rule;
