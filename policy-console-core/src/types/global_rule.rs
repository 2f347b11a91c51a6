use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Global rule kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlobalRuleType {
    /// Require at least `threshold` approvals on matching namespaces
    Threshold,
    /// Forbid force pushes on matching namespaces
    BlockForcePushes,
}

impl GlobalRuleType {
    pub const THRESHOLD: &'static str = "threshold";
    pub const BLOCK_FORCE_PUSHES: &'static str = "block-force-pushes";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Threshold => Self::THRESHOLD,
            Self::BlockForcePushes => Self::BLOCK_FORCE_PUSHES,
        }
    }
}

impl fmt::Display for GlobalRuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown global rule type text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown global rule type \"{0}\"")]
pub struct ParseGlobalRuleTypeError(pub String);

impl FromStr for GlobalRuleType {
    type Err = ParseGlobalRuleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            Self::THRESHOLD => Ok(Self::Threshold),
            Self::BLOCK_FORCE_PUSHES => Ok(Self::BlockForcePushes),
            other => Err(ParseGlobalRuleTypeError(other.to_string())),
        }
    }
}

/// Global rule (root of trust)
///
/// Unordered, cross-cutting. `threshold` only carries meaning when
/// `rule_type` is `Threshold` and is 0 otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRule {
    pub rule_name: String,
    pub rule_type: GlobalRuleType,
    pub rule_patterns: Vec<String>,
    #[serde(default)]
    pub threshold: u32,
}

impl GlobalRule {
    /// Threshold rule
    pub fn threshold(name: impl Into<String>, patterns: Vec<String>, threshold: u32) -> Self {
        Self {
            rule_name: name.into(),
            rule_type: GlobalRuleType::Threshold,
            rule_patterns: patterns,
            threshold,
        }
    }

    /// Force-push blocking rule
    pub fn block_force_pushes(name: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            rule_name: name.into(),
            rule_type: GlobalRuleType::BlockForcePushes,
            rule_patterns: patterns,
            threshold: 0,
        }
    }

    pub fn is_threshold(&self) -> bool {
        self.rule_type == GlobalRuleType::Threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types() {
        assert_eq!(
            "threshold".parse::<GlobalRuleType>(),
            Ok(GlobalRuleType::Threshold)
        );
        assert_eq!(
            " block-force-pushes ".parse::<GlobalRuleType>(),
            Ok(GlobalRuleType::BlockForcePushes)
        );
    }

    #[test]
    fn rejects_unknown_type() {
        let err = "Threshold".parse::<GlobalRuleType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown global rule type \"Threshold\"");
    }

    #[test]
    fn serde_uses_snake_case_fields_and_kebab_case_types() {
        let rule = GlobalRule::block_force_pushes("no-force", vec!["git:refs/heads/*".into()]);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["rule_type"], "block-force-pushes");
        assert_eq!(json["rule_name"], "no-force");
    }
}
