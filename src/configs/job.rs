use std::{fs, path::Path};

use serde::Deserialize;

use super::EvalConfig;
use crate::Result;

fn default_amp() -> f32 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActFnConfig {
    Sigmoid {
        #[serde(default = "default_amp")]
        amp: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerConfig {
    Dense {
        dim: (usize, usize),
        #[serde(default)]
        act_fn: Option<ActFnConfig>,
    },
    Dropout {
        p: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelConfig {
    pub layers: Vec<LayerConfig>,
    pub params: Vec<f32>,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatasetConfig {
    pub x_size: usize,
    pub y_size: usize,
    pub data: Vec<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LoaderConfig {
    pub batch_size: usize,
    #[serde(default)]
    pub drop_last: bool,
    #[serde(default)]
    pub shuffle: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// A complete evaluation job: the model, the data and how to score it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobConfig {
    pub model: ModelConfig,
    pub dataset: DatasetConfig,
    pub loader: LoaderConfig,
    #[serde(default)]
    pub eval: EvalConfig,
}

impl JobConfig {
    /// Parses a job from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a job from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Denominator, EvalErr};

    const JOB: &str = r#"{
        "model": {
            "layers": [
                {"type": "dense", "dim": [1, 1], "act_fn": {"type": "sigmoid"}},
                {"type": "dropout", "p": 0.2}
            ],
            "params": [4.0, -2.0],
            "seed": 1
        },
        "dataset": {"x_size": 1, "y_size": 1, "data": [0.0, 0.0, 1.0, 1.0]},
        "loader": {"batch_size": 2, "drop_last": true},
        "eval": {"denominator": "seen"}
    }"#;

    #[test]
    fn job_parses_with_defaults() {
        let job = JobConfig::from_json(JOB).unwrap();

        assert_eq!(
            job.model.layers[0],
            LayerConfig::Dense {
                dim: (1, 1),
                act_fn: Some(ActFnConfig::Sigmoid { amp: 1.0 }),
            }
        );
        assert_eq!(job.model.layers[1], LayerConfig::Dropout { p: 0.2 });
        assert_eq!(job.model.seed, Some(1));
        assert!(job.loader.drop_last);
        assert!(!job.loader.shuffle);
        assert_eq!(job.eval.denominator, Denominator::Seen);
        assert!(!job.eval.restore_mode);
    }

    #[test]
    fn malformed_job_is_a_json_error() {
        let err = JobConfig::from_json(r#"{"model": {}}"#).unwrap_err();
        assert!(matches!(err, EvalErr::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = JobConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, EvalErr::Io(_)));
    }
}
