use ndarray::Array2;
use rand::Rng;

use crate::{EvalErr, Mode, Result};

/// Inverted dropout: while training, zeroes each element with probability `p` and scales the
/// survivors by `1 / (1 - p)`. Inert in eval mode.
#[derive(Clone, Debug)]
pub struct Dropout {
    p: f32,
}

impl Dropout {
    /// Creates a new `Dropout`.
    ///
    /// # Arguments
    /// * `p` - The probability of zeroing an element, in `[0, 1)`.
    ///
    /// # Returns
    /// A new `Dropout`, or `InvalidConfig` if `p` is out of range.
    pub fn new(p: f32) -> Result<Self> {
        if !(0.0..1.0).contains(&p) {
            return Err(EvalErr::InvalidConfig(format!(
                "dropout probability must be in [0, 1), got {p}"
            )));
        }

        Ok(Self { p })
    }

    pub fn p(&self) -> f32 {
        self.p
    }

    pub fn forward<R: Rng>(&self, mut x: Array2<f32>, mode: Mode, rng: &mut R) -> Array2<f32> {
        if mode == Mode::Eval || self.p == 0.0 {
            return x;
        }

        let p = self.p;
        let scale = 1.0 / (1.0 - p);
        x.mapv_inplace(|v| if rng.random::<f32>() < p { 0.0 } else { v * scale });
        x
    }
}

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn dropout_rejects_out_of_range_probability() {
        assert!(Dropout::new(1.0).is_err());
        assert!(Dropout::new(-0.1).is_err());
        assert!(Dropout::new(f32::NAN).is_err());
        assert!(Dropout::new(0.0).is_ok());
    }

    #[test]
    fn dropout_is_identity_in_eval_mode() {
        let dropout = Dropout::new(0.9).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let x = Array2::from_elem((4, 8), 1.5);

        assert_eq!(dropout.forward(x.clone(), Mode::Eval, &mut rng), x);
    }

    #[test]
    fn dropout_zeroes_or_scales_in_train_mode() {
        let dropout = Dropout::new(0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let x = Array2::from_elem((16, 16), 1.0);

        let y = dropout.forward(x, Mode::Train, &mut rng);

        assert!(y.iter().all(|&v| v == 0.0 || v == 2.0));
        assert!(y.iter().any(|&v| v == 0.0));
        assert!(y.iter().any(|&v| v == 2.0));
    }
}
