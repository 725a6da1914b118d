use std::ops::{Deref, DerefMut};

use crate::arch::Model;

/// The behavior a model runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Stochastic layers (dropout) are active.
    #[default]
    Train,
    /// Stochastic layers are inert, the forward pass is deterministic.
    Eval,
}

/// Switches a model into a given mode for as long as the guard lives.
///
/// When `restore` is set, the mode the model had before the guard was created is put back
/// on drop, including when the scope is left through an early return or a panic. Otherwise
/// the switch is one-way and the caller owns the model's mode from then on.
pub struct ModeGuard<'a, M: Model + ?Sized> {
    model: &'a mut M,
    prior: Mode,
    restore: bool,
}

impl<'a, M: Model + ?Sized> ModeGuard<'a, M> {
    /// Creates a new `ModeGuard`.
    ///
    /// # Arguments
    /// * `model` - The model whose mode is switched.
    /// * `mode` - The mode to switch to.
    /// * `restore` - Whether to put the prior mode back on drop.
    pub fn new(model: &'a mut M, mode: Mode, restore: bool) -> Self {
        let prior = model.mode();
        model.set_mode(mode);

        Self {
            model,
            prior,
            restore,
        }
    }

    /// Returns the mode the model had before the guard was created.
    pub fn prior(&self) -> Mode {
        self.prior
    }
}

impl<M: Model + ?Sized> Deref for ModeGuard<'_, M> {
    type Target = M;

    fn deref(&self) -> &Self::Target {
        self.model
    }
}

impl<M: Model + ?Sized> DerefMut for ModeGuard<'_, M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.model
    }
}

impl<M: Model + ?Sized> Drop for ModeGuard<'_, M> {
    fn drop(&mut self) {
        if self.restore {
            self.model.set_mode(self.prior);
        }
    }
}

/// Disables gradient tracking on a model for as long as the guard lives.
///
/// The prior flag is always restored on drop.
pub struct NoGrad<'a, M: Model + ?Sized> {
    model: &'a mut M,
    prior: bool,
}

impl<'a, M: Model + ?Sized> NoGrad<'a, M> {
    /// Creates a new `NoGrad`.
    ///
    /// # Arguments
    /// * `model` - The model that stops tracking gradients.
    pub fn new(model: &'a mut M) -> Self {
        let prior = model.grad_enabled();
        model.set_grad_enabled(false);
        Self { model, prior }
    }
}

impl<M: Model + ?Sized> Deref for NoGrad<'_, M> {
    type Target = M;

    fn deref(&self) -> &Self::Target {
        self.model
    }
}

impl<M: Model + ?Sized> DerefMut for NoGrad<'_, M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.model
    }
}

impl<M: Model + ?Sized> Drop for NoGrad<'_, M> {
    fn drop(&mut self) {
        self.model.set_grad_enabled(self.prior);
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, ArrayView2};

    use super::*;
    use crate::Result;

    #[derive(Default)]
    struct Flags {
        mode: Mode,
        grad: bool,
    }

    impl Model for Flags {
        fn forward(&mut self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
            Ok(x.to_owned())
        }

        fn mode(&self) -> Mode {
            self.mode
        }

        fn set_mode(&mut self, mode: Mode) {
            self.mode = mode;
        }

        fn grad_enabled(&self) -> bool {
            self.grad
        }

        fn set_grad_enabled(&mut self, enabled: bool) {
            self.grad = enabled;
        }
    }

    #[test]
    fn mode_guard_restores_prior_mode_when_asked() {
        let mut model = Flags::default();

        {
            let guard = ModeGuard::new(&mut model, Mode::Eval, true);
            assert_eq!(guard.mode(), Mode::Eval);
            assert_eq!(guard.prior(), Mode::Train);
        }

        assert_eq!(model.mode(), Mode::Train);
    }

    #[test]
    fn mode_guard_without_restore_is_one_way() {
        let mut model = Flags::default();

        {
            let _guard = ModeGuard::new(&mut model, Mode::Eval, false);
        }

        assert_eq!(model.mode(), Mode::Eval);
    }

    #[test]
    fn no_grad_restores_prior_flag() {
        let mut model = Flags {
            grad: true,
            ..Default::default()
        };

        {
            let guard = NoGrad::new(&mut model);
            assert!(!guard.grad_enabled());
        }
        assert!(model.grad_enabled());

        model.set_grad_enabled(false);
        {
            let _guard = NoGrad::new(&mut model);
        }
        assert!(!model.grad_enabled());
    }

    #[test]
    fn guards_nest() {
        let mut model = Flags {
            grad: true,
            ..Default::default()
        };

        {
            let mut mode_guard = ModeGuard::new(&mut model, Mode::Eval, true);
            let no_grad = NoGrad::new(&mut *mode_guard);
            assert_eq!(no_grad.mode(), Mode::Eval);
            assert!(!no_grad.grad_enabled());
        }

        assert_eq!(model.mode(), Mode::Train);
        assert!(model.grad_enabled());
    }
}
