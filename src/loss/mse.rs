use ndarray::{ArrayView, ArrayView4, Dimension};

use super::LossFn;

/// Returns the mean squared error over every element.
///
/// # Panics
/// If the shapes can't be broadcast together.
pub fn mse_loss<D: Dimension>(predictions: ArrayView<f32, D>, labels: ArrayView<f32, D>) -> f32 {
    (&predictions - &labels)
        .mapv(|x| x.powi(2))
        .mean()
        .unwrap_or(f32::NAN)
}

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn name(&self) -> &'static str {
        "mse"
    }

    fn loss(&self, predictions: ArrayView4<f32>, labels: ArrayView4<f32>) -> f32 {
        mse_loss(predictions, labels)
    }
}
