use ndarray::ArrayView4;

/// A scalar loss over `[batch, time, grid, channel]` arrays.
pub trait LossFn {
    /// A short, stable name used in logs.
    fn name(&self) -> &'static str;

    fn loss(&self, predictions: ArrayView4<f32>, labels: ArrayView4<f32>) -> f32;
}
