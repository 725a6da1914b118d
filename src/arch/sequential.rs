use ndarray::{Array2, ArrayView2};
use rand::{SeedableRng, rngs::StdRng};

use super::{Model, layers::Layer};
use crate::{EvalErr, Mode, Result};

/// A sequential model: information flows forward through its layers in order.
///
/// All layers read their parameters from a single flat buffer, in layer order.
#[derive(Clone, Debug)]
pub struct Sequential {
    layers: Vec<Layer>,
    params: Vec<f32>,
    mode: Mode,
    grad_enabled: bool,
    tape: Vec<Array2<f32>>,
    rng: StdRng,
}

impl Sequential {
    /// Creates a new `Sequential` in train mode with gradient tracking enabled.
    ///
    /// # Arguments
    /// * `layers` - The layers the sequential is composed of.
    /// * `params` - The flat parameter buffer, its length must equal the sum of the layer sizes.
    ///
    /// # Returns
    /// A new `Sequential` instance or `SizeMismatch` if `params` has the wrong length.
    pub fn new<I>(layers: I, params: Vec<f32>) -> Result<Self>
    where
        I: IntoIterator<Item = Layer>,
    {
        let layers: Vec<Layer> = layers.into_iter().collect();
        let size = layers.iter().map(|layer| layer.size()).sum();

        if params.len() != size {
            return Err(EvalErr::SizeMismatch {
                a: "layers",
                b: "params",
                got: params.len(),
                expected: size,
            });
        }

        Ok(Self {
            layers,
            params,
            mode: Mode::default(),
            grad_enabled: true,
            tape: Vec::new(),
            rng: StdRng::from_os_rng(),
        })
    }

    /// Reseeds the generator used by stochastic layers.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Returns the amount of parameters in the model.
    pub fn size(&self) -> usize {
        self.params.len()
    }

    pub fn params(&self) -> &[f32] {
        &self.params
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the layer inputs recorded by the last forward pass.
    ///
    /// Empty if gradient tracking was disabled during that pass.
    pub fn tape(&self) -> &[Array2<f32>] {
        &self.tape
    }
}

impl Model for Sequential {
    fn forward(&mut self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        self.tape.clear();

        let mut rest = &self.params[..];
        let mut a = x.to_owned();

        for layer in &self.layers {
            let params;
            (params, rest) = rest.split_at(layer.size());

            if self.grad_enabled {
                self.tape.push(a.clone());
            }

            a = layer.forward(params, a, self.mode, &mut self.rng)?;
        }

        Ok(a)
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    fn grad_enabled(&self) -> bool {
        self.grad_enabled
    }

    fn set_grad_enabled(&mut self, enabled: bool) {
        self.grad_enabled = enabled;
    }
}
