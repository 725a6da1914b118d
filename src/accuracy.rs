use log::{debug, info, warn};
use ndarray::{ArrayView2, Zip};

use crate::{
    EvalErr, Mode, Result,
    arch::Model,
    configs::{Denominator, EvalConfig},
    data::DataSource,
    mode::{ModeGuard, NoGrad},
};

/// The outcome of an accuracy evaluation.
///
/// Fields are private to allow evolving the counters without breaking the public API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyReport {
    correct: usize,
    seen: usize,
    total: usize,
    batches: usize,
    denominator: usize,
}

impl AccuracyReport {
    /// Returns the amount of label elements the decided outputs matched.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Returns the amount of examples actually run through the model.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Returns the dataset size reported by the data source.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn batches(&self) -> usize {
        self.batches
    }

    /// Returns the value `correct` was divided by.
    pub fn denominator(&self) -> usize {
        self.denominator
    }

    pub fn accuracy(&self) -> f32 {
        self.correct as f32 / self.denominator as f32
    }
}

/// Computes the accuracy of `model` over `data` with the default `EvalConfig`.
///
/// The model is left in eval mode. Its gradient tracking flag is restored on return.
///
/// # Errors
/// * `ShapeMismatch` - the model's outputs can't be compared with the labels.
/// * `EmptyDataset` - the data source reports zero examples.
/// * Any error the model's forward pass returns.
pub fn evaluate<M, D>(model: &mut M, data: &mut D) -> Result<f32>
where
    M: Model + ?Sized,
    D: DataSource,
{
    Evaluator::default()
        .run(model, data)
        .map(|report| report.accuracy())
}

/// Runs accuracy evaluations with a fixed `EvalConfig`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluates `model` over one pass of `data`.
    ///
    /// # Arguments
    /// * `model` - The model, switched to eval mode with gradient tracking disabled for the
    ///   whole pass.
    /// * `data` - The batches to score.
    ///
    /// # Returns
    /// The evaluation report or the first error found. There are no partial results.
    pub fn run<M, D>(&self, model: &mut M, data: &mut D) -> Result<AccuracyReport>
    where
        M: Model + ?Sized,
        D: DataSource,
    {
        let mut mode_guard = ModeGuard::new(model, Mode::Eval, self.config.restore_mode);
        let mut model = NoGrad::new(&mut *mode_guard);

        let total = data.dataset_len();
        let mut correct = 0;
        let mut seen = 0;
        let mut batches = 0;

        for batch in data.batches() {
            let mut out = model.forward(batch.x.view())?;
            self.config.decision.decide(&mut out);

            let matches = count_matches(out.view(), batch.y.view())?;
            debug!("batch {batches}: {matches} matches over {} examples", batch.len());

            correct += matches;
            seen += batch.len();
            batches += 1;
        }

        let denominator = match self.config.denominator {
            Denominator::Dataset => {
                if seen != total {
                    warn!("evaluated {seen} examples but dividing by the dataset size {total}");
                }
                total
            }
            Denominator::Seen => seen,
        };

        if denominator == 0 {
            return Err(EvalErr::EmptyDataset);
        }

        let report = AccuracyReport {
            correct,
            seen,
            total,
            batches,
            denominator,
        };

        info!(
            "accuracy {}/{} = {:.4} over {batches} batches",
            report.correct,
            report.denominator,
            report.accuracy()
        );

        Ok(report)
    }
}

/// Counts the element-wise exact matches between predictions and labels.
///
/// Arrays of different shapes are both broadcast to their common shape first, so a
/// `(n, 1)` output against `(1, m)` labels compares an `(n, m)` grid.
fn count_matches(pred: ArrayView2<f32>, y: ArrayView2<f32>) -> Result<usize> {
    let mismatch = || EvalErr::ShapeMismatch {
        what: "model output",
        got: pred.dim(),
        expected: y.dim(),
    };

    let shape = (
        common_len(pred.nrows(), y.nrows()).ok_or_else(mismatch)?,
        common_len(pred.ncols(), y.ncols()).ok_or_else(mismatch)?,
    );

    let p = pred.broadcast(shape).ok_or_else(mismatch)?;
    let t = y.broadcast(shape).ok_or_else(mismatch)?;

    Ok(Zip::from(p)
        .and(t)
        .fold(0, |acc, p, y| if p == y { acc + 1 } else { acc }))
}

/// The length two broadcast axes agree on, if any.
fn common_len(a: usize, b: usize) -> Option<usize> {
    match (a, b) {
        _ if a == b => Some(a),
        (1, n) | (n, 1) => Some(n),
        _ => None,
    }
}
