//! Policy Console Core Library
//!
//! Provides the data model and storage abstraction behind the policy console:
//! - Rules (ordered, evaluation priority = position) and global rules
//! - The `RuleStore` trait, the synchronous facade the console talks to
//! - A local JSON-file repository and an in-memory store
//! - Signing key loading (absence of a key puts the console in read-only mode)
//!
//! The console itself never touches the persisted format; everything goes
//! through `RuleStore`.

pub mod error;
pub mod repository;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{StoreError, StoreResult};
pub use repository::{
    load_repository, load_signer, InMemoryRuleStore, JsonRuleStore, Repository, Signer,
};
pub use traits::RuleStore;
pub use types::{GlobalRule, GlobalRuleType, Rule};
