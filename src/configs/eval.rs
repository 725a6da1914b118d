use serde::{Deserialize, Serialize};

use crate::decision::DecisionRule;

/// What the count of correct predictions is divided by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denominator {
    /// The size the data source reports, including samples it never yields.
    #[default]
    Dataset,
    /// The amount of samples actually iterated.
    Seen,
}

/// Knobs of an accuracy evaluation.
///
/// The default reproduces plain "round, compare, divide by dataset size" accuracy and leaves
/// the model in eval mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub decision: DecisionRule,
    pub denominator: Denominator,
    /// Put the model back in the mode it had before the evaluation.
    pub restore_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EvalConfig = serde_json::from_str(r#"{"restore_mode": true}"#).unwrap();

        assert_eq!(config.decision, DecisionRule::RoundTiesEven);
        assert_eq!(config.denominator, Denominator::Dataset);
        assert!(config.restore_mode);
    }

    #[test]
    fn full_config_parses() {
        let config: EvalConfig = serde_json::from_str(
            r#"{"decision": {"threshold": 0.6}, "denominator": "seen", "restore_mode": false}"#,
        )
        .unwrap();

        assert_eq!(config.decision, DecisionRule::Threshold(0.6));
        assert_eq!(config.denominator, Denominator::Seen);
    }
}
