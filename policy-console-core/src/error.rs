//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Store layer error type
///
/// Every failure of a `RuleStore` operation is reported through this type.
/// The console converts it into a footer message and never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum StoreError {
    /// Rule not found
    #[error("Rule not found: {0}")]
    RuleNotFound(String),

    /// Global rule not found
    #[error("Global rule not found: {0}")]
    GlobalRuleNotFound(String),

    /// A rule with the same name already exists
    #[error("Rule already exists: {0}")]
    DuplicateRule(String),

    /// A global rule with the same name already exists
    #[error("Global rule already exists: {0}")]
    DuplicateGlobalRule(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Mutation attempted without a signing key
    #[error("Repository is read-only: no signing key loaded")]
    ReadOnly,

    /// Repository directory does not exist
    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// No signing key configured (startup only, downgraded to read-only mode)
    #[error("Signing key not specified")]
    SigningKeyNotSpecified,

    /// Signing key configured but unusable
    #[error("Signing key error: {0}")]
    SigningKey(String),
}

impl StoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::RuleNotFound(_)
            | Self::GlobalRuleNotFound(_)
            | Self::DuplicateRule(_)
            | Self::DuplicateGlobalRule(_)
            | Self::Validation(_)
            | Self::ReadOnly
            | Self::SigningKeyNotSpecified => true,
            Self::RepositoryNotFound(_)
            | Self::Storage(_)
            | Self::Serialization(_)
            | Self::SigningKey(_) => false,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Store layer Result type alias
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_caused_errors_are_expected() {
        assert!(StoreError::RuleNotFound("r".into()).is_expected());
        assert!(StoreError::DuplicateGlobalRule("g".into()).is_expected());
        assert!(StoreError::SigningKeyNotSpecified.is_expected());
        assert!(!StoreError::Storage("disk full".into()).is_expected());
        assert!(!StoreError::SigningKey("unreadable".into()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(StoreError::RuleNotFound("main".into())).unwrap();
        assert_eq!(json["code"], "RuleNotFound");
        assert_eq!(json["details"], "main");
    }

    #[test]
    fn display_includes_detail() {
        let err = StoreError::Validation("rule name must not be empty".into());
        assert_eq!(err.to_string(), "Validation error: rule name must not be empty");
    }
}
