//! Classification accuracy of binary-output models over batched data.
//!
//! [`evaluate`] switches a [`Model`] to eval mode, disables its gradient tracking, runs every
//! batch of a [`DataSource`] through it, decides a label per output and divides the matches
//! by the dataset size.

pub mod accuracy;
pub mod arch;
pub mod configs;
pub mod data;
pub mod decision;
pub mod error;
pub mod mode;

pub use accuracy::{AccuracyReport, Evaluator, evaluate};
pub use arch::{Model, Sequential};
pub use configs::{Denominator, EvalConfig, JobBuilder, JobConfig};
pub use data::{Batch, DataLoader, DataSource, InMemoryDataset};
pub use decision::DecisionRule;
pub use error::{EvalErr, Result};
pub use mode::{Mode, ModeGuard, NoGrad};
