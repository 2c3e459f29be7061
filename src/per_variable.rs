//! Per-variable error metrics.
//!
//! Inputs are `[batch, time, grid_0, grid_1, channel]` arrays (the flattened
//! `[batch, time, grid, channel]` layout works too) and every interior axis is
//! reduced, so the output is always `[batch, channel]`.
//!
//! None of these functions validate their inputs. Shapes that can't be
//! broadcast together panic inside ndarray, and all-zero labels make the
//! relative errors non-finite.

use ndarray::{Array2, ArrayView};

use crate::grid::GridRank;

/// Returns the mean squared error per variable.
///
/// # Arguments
/// * `predictions` - The model's predictions.
/// * `labels` - The ground truth.
///
/// # Returns
/// The mean of `(predictions - labels)²` over the interior axes.
///
/// # Panics
/// If the shapes can't be broadcast together.
pub fn mse_error<D: GridRank>(
    predictions: ArrayView<f32, D>,
    labels: ArrayView<f32, D>,
) -> Array2<f32> {
    let squared = (&predictions - &labels).mapv(|x| x.powi(2));
    let n = D::interior_len(squared.shape());

    D::sum_interior(squared.view()) / n as f32
}

/// Returns the relative L1-norm of the error per variable.
///
/// This is `Σ|predictions - labels| / Σ|labels|` over the interior axes,
/// nothing gets squared nor square rooted.
///
/// # Arguments
/// * `predictions` - The model's predictions.
/// * `labels` - The ground truth.
///
/// # Panics
/// If the shapes can't be broadcast together.
pub fn rel_l1_error<D: GridRank>(
    predictions: ArrayView<f32, D>,
    labels: ArrayView<f32, D>,
) -> Array2<f32> {
    let err_abs = D::sum_interior((&predictions - &labels).mapv(f32::abs).view());
    let lab_abs = D::sum_interior(labels.mapv(f32::abs).view());

    &err_abs / &lab_abs
}

/// Returns the relative L2-norm of the error per variable.
///
/// This is `sqrt(Σ(predictions - labels)² / Σlabels²)` over the interior axes.
///
/// # Arguments
/// * `predictions` - The model's predictions.
/// * `labels` - The ground truth.
///
/// # Panics
/// If the shapes can't be broadcast together.
pub fn rel_l2_error<D: GridRank>(
    predictions: ArrayView<f32, D>,
    labels: ArrayView<f32, D>,
) -> Array2<f32> {
    let err_squared = D::sum_interior((&predictions - &labels).mapv(|x| x.powi(2)).view());
    let lab_squared = D::sum_interior(labels.mapv(|x| x.powi(2)).view());

    (&err_squared / &lab_squared).mapv(f32::sqrt)
}
