mod builder;
mod eval;
mod job;

pub use builder::JobBuilder;
pub use eval::{Denominator, EvalConfig};
pub use job::{ActFnConfig, DatasetConfig, JobConfig, LayerConfig, LoaderConfig, ModelConfig};
