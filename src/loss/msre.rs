use ndarray::{ArrayView, ArrayView4, Dimension};

use super::LossFn;

/// The epsilon added to the labels in the relative error denominator.
pub const MSRE_EPS: f32 = 1e-8;

/// Returns the mean squared relative error over every element, using
/// `MSRE_EPS` as the denominator offset.
///
/// Labels close to `-MSRE_EPS` still blow the result up.
///
/// # Panics
/// If the shapes can't be broadcast together.
pub fn msre_loss<D: Dimension>(predictions: ArrayView<f32, D>, labels: ArrayView<f32, D>) -> f32 {
    Msre::new(MSRE_EPS).relative(predictions, labels)
}

/// Mean squared relative error loss function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Msre {
    eps: f32,
}

impl Default for Msre {
    fn default() -> Self {
        Self::new(MSRE_EPS)
    }
}

impl Msre {
    /// Returns a new `Msre`.
    ///
    /// # Arguments
    /// * `eps` - The offset added to each label before dividing by it.
    pub fn new(eps: f32) -> Self {
        Self { eps }
    }

    pub fn eps(&self) -> f32 {
        self.eps
    }

    /// Computes `mean(((predictions - labels) / (labels + eps))²)`.
    pub fn relative<D: Dimension>(
        &self,
        predictions: ArrayView<f32, D>,
        labels: ArrayView<f32, D>,
    ) -> f32 {
        let eps = self.eps;
        let denom = labels.mapv(|l| l + eps);

        (&(&predictions - &labels) / &denom)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or(f32::NAN)
    }
}

impl LossFn for Msre {
    fn name(&self) -> &'static str {
        "msre"
    }

    fn loss(&self, predictions: ArrayView4<f32>, labels: ArrayView4<f32>) -> f32 {
        self.relative(predictions, labels)
    }
}
