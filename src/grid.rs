use ndarray::{Array2, ArrayView, Axis, Dimension, Ix4, Ix5};

use crate::error::{MetricsErr, Result};

/// Ranks of arrays laid out as `[batch, ..interior, channel]`.
///
/// Every axis between the leading batch axis and the trailing channel axis
/// is an interior (time or space) axis. Per-variable metrics collapse all of
/// them, keeping batch and channel apart.
///
/// * `Ix4` - `[batch, time, grid, channel]`, the flattened grid layout.
/// * `Ix5` - `[batch, time, grid_0, grid_1, channel]`, the 2D grid layout.
pub trait GridRank: Dimension {
    /// Sums `a` over every interior axis.
    ///
    /// # Returns
    /// An array of shape `[batch, channel]`.
    fn sum_interior(a: ArrayView<f32, Self>) -> Array2<f32>;

    /// Returns how many elements get reduced into each `[batch, channel]` cell.
    fn interior_len(shape: &[usize]) -> usize {
        shape[1..shape.len() - 1].iter().product()
    }
}

impl GridRank for Ix4 {
    fn sum_interior(a: ArrayView<f32, Self>) -> Array2<f32> {
        a.sum_axis(Axis(1)).sum_axis(Axis(1))
    }
}

impl GridRank for Ix5 {
    fn sum_interior(a: ArrayView<f32, Self>) -> Array2<f32> {
        a.sum_axis(Axis(1)).sum_axis(Axis(1)).sum_axis(Axis(1))
    }
}

/// Checks that `predictions` and `labels` have exactly the same shape.
///
/// The metric functions themselves don't validate anything and rely on
/// ndarray's broadcasting rules, this is the opt-in strict check.
///
/// # Returns
/// A `ShapeMismatch` error if the shapes differ.
pub fn check_shapes<D: Dimension>(
    predictions: &ArrayView<f32, D>,
    labels: &ArrayView<f32, D>,
) -> Result<()> {
    if predictions.shape() != labels.shape() {
        return Err(MetricsErr::ShapeMismatch {
            a: "predictions",
            b: "labels",
            got: predictions.shape().to_vec(),
            expected: labels.shape().to_vec(),
        });
    }

    Ok(())
}
