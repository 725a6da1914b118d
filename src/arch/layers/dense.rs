use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::{EvalErr, Result, arch::activations::ActFn};

/// A fully connected layer, `x · W + b` followed by an optional activation.
///
/// Its parameters are the `(dim_in, dim_out)` weight matrix in row-major order followed by
/// the `dim_out` biases.
#[derive(Clone, Debug)]
pub struct Dense {
    dim: (usize, usize),
    act_fn: Option<ActFn>,
    size: usize,
}

impl Dense {
    /// Creates a new `Dense`.
    ///
    /// # Arguments
    /// * `dim` - The input and output widths.
    /// * `act_fn` - The activation applied to the weighted sums, if any.
    pub fn new(dim: (usize, usize), act_fn: Option<ActFn>) -> Self {
        Self {
            dim,
            act_fn,
            size: (dim.0 + 1) * dim.1,
        }
    }

    /// Returns the size of this layer.
    ///
    /// # Returns
    /// The amount of parameters this layer has.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    /// Makes a forward pass through the layer.
    ///
    /// # Arguments
    /// * `params` - This layer's slice of the model parameters.
    /// * `x` - The input batch, one example per row.
    ///
    /// # Returns
    /// The layer's output, or an error if `x` or `params` don't fit the layer.
    pub fn forward(&self, params: &[f32], x: ArrayView2<f32>) -> Result<Array2<f32>> {
        if x.ncols() != self.dim.0 {
            return Err(EvalErr::ShapeMismatch {
                what: "dense layer input",
                got: x.dim(),
                expected: (x.nrows(), self.dim.0),
            });
        }

        let (w, b) = self.view_params(params)?;
        let mut z = x.dot(&w);
        z += &b;

        if let Some(act_fn) = &self.act_fn {
            z.mapv_inplace(|z| act_fn.f(z));
        }

        Ok(z)
    }

    /// Gives a view of the raw parameter slice as the weights and biases of this layer.
    ///
    /// # Arguments
    /// * `params` - A slice of parameters.
    ///
    /// # Returns
    /// A tuple containing the weights and biases.
    fn view_params<'a>(
        &self,
        params: &'a [f32],
    ) -> Result<(ArrayView2<'a, f32>, ArrayView1<'a, f32>)> {
        let size_mismatch = || EvalErr::SizeMismatch {
            a: "dense layer",
            b: "params",
            got: params.len(),
            expected: self.size,
        };

        if params.len() != self.size {
            return Err(size_mismatch());
        }

        let w_size = self.size - self.dim.1;
        let (w_raw, b_raw) = params.split_at(w_size);
        let weights = ArrayView2::from_shape(self.dim, w_raw).map_err(|_| size_mismatch())?;
        let biases = ArrayView1::from(b_raw);
        Ok((weights, biases))
    }
}
