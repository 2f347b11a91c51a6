//! Storage abstraction traits

mod rule_store;

pub use rule_store::RuleStore;
