use ndarray::{Array2, ArrayView2};

use crate::{Mode, Result};

/// A model that can be evaluated over batches.
///
/// Besides the forward pass, a model carries two flags that change how that pass behaves:
/// its `Mode` and whether it records what a backward pass would need.
pub trait Model {
    /// Makes a forward pass.
    ///
    /// # Arguments
    /// * `x` - The input batch, one example per row.
    ///
    /// # Returns
    /// The output batch, with as many rows as `x`, or an error if `x` doesn't fit the model.
    fn forward(&mut self, x: ArrayView2<f32>) -> Result<Array2<f32>>;

    fn mode(&self) -> Mode;

    fn set_mode(&mut self, mode: Mode);

    /// Returns whether forward passes record intermediates for a backward pass.
    fn grad_enabled(&self) -> bool;

    fn set_grad_enabled(&mut self, enabled: bool);
}
