/// The activation a dense layer applies to its weighted sums.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActFn {
    /// The logistic function scaled to `(0, amp)`.
    Sigmoid { amp: f32 },
}

impl ActFn {
    pub fn sigmoid(amp: f32) -> Self {
        Self::Sigmoid { amp }
    }

    pub fn f(&self, x: f32) -> f32 {
        match *self {
            // 1 / (1 + e^-x) == (1 + tanh(x / 2)) / 2, which never overflows for large |x|
            Self::Sigmoid { amp } => amp * 0.5 * (1.0 + (0.5 * x).tanh()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_and_scaled_by_amp() {
        let act_fn = ActFn::sigmoid(2.0);
        assert_eq!(act_fn.f(0.0), 1.0);
        assert!(act_fn.f(20.0) > 1.99);
        assert!(act_fn.f(-20.0) < 0.01);
    }

    #[test]
    fn sigmoid_saturates_to_its_bounds() {
        let act_fn = ActFn::sigmoid(3.0);
        assert_eq!(act_fn.f(-200.0), 0.0);
        assert_eq!(act_fn.f(200.0), 3.0);
        assert!(act_fn.f(f32::MIN).is_finite());
    }
}
