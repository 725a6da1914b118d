use ndarray::Array2;
use rand::Rng;

use super::{Dense, Dropout};
use crate::{Mode, Result, arch::activations::ActFn};

#[derive(Clone, Debug)]
pub enum Layer {
    Dense(Dense),
    Dropout(Dropout),
}

impl Layer {
    pub fn dense(dim: (usize, usize), act_fn: Option<ActFn>) -> Self {
        Self::Dense(Dense::new(dim, act_fn))
    }

    pub fn dropout(p: f32) -> Result<Self> {
        Dropout::new(p).map(Self::Dropout)
    }

    /// Returns the amount of parameters this layer reads from the model's flat buffer.
    pub fn size(&self) -> usize {
        match self {
            Self::Dense(l) => l.size(),
            Self::Dropout(_) => 0,
        }
    }

    pub fn forward<R: Rng>(
        &self,
        params: &[f32],
        x: Array2<f32>,
        mode: Mode,
        rng: &mut R,
    ) -> Result<Array2<f32>> {
        match self {
            Self::Dense(l) => l.forward(params, x.view()),
            Self::Dropout(l) => Ok(l.forward(x, mode, rng)),
        }
    }
}
