use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Turns a raw model output into a predicted label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    /// Round to the nearest integer, halfway cases to the even neighbour.
    #[default]
    RoundTiesEven,
    /// Round to the nearest integer, halfway cases away from zero.
    Round,
    /// `1` when the output is at least the threshold, `0` otherwise.
    Threshold(f32),
}

impl DecisionRule {
    pub fn apply(&self, p: f32) -> f32 {
        match *self {
            DecisionRule::RoundTiesEven => p.round_ties_even(),
            DecisionRule::Round => p.round(),
            DecisionRule::Threshold(t) => {
                if p >= t {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Applies the rule to every element of `out` in place.
    pub fn decide(&self, out: &mut Array2<f32>) {
        out.mapv_inplace(|p| self.apply(p));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_rules_differ_only_on_ties() {
        let even = DecisionRule::RoundTiesEven;
        let away = DecisionRule::Round;

        assert_eq!(even.apply(0.9), 1.0);
        assert_eq!(away.apply(0.9), 1.0);
        assert_eq!(even.apply(0.4), 0.0);
        assert_eq!(away.apply(0.4), 0.0);

        assert_eq!(even.apply(0.5), 0.0);
        assert_eq!(away.apply(0.5), 1.0);
        assert_eq!(even.apply(1.5), 2.0);
        assert_eq!(away.apply(1.5), 2.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let rule = DecisionRule::Threshold(0.7);
        assert_eq!(rule.apply(0.7), 1.0);
        assert_eq!(rule.apply(0.69), 0.0);
        assert_eq!(rule.apply(f32::NAN), 0.0);
    }

    #[test]
    fn rule_deserializes_from_snake_case() {
        let rule: DecisionRule = serde_json::from_str(r#""round""#).unwrap();
        assert_eq!(rule, DecisionRule::Round);

        let rule: DecisionRule = serde_json::from_str(r#"{"threshold": 0.25}"#).unwrap();
        assert_eq!(rule, DecisionRule::Threshold(0.25));
    }
}
