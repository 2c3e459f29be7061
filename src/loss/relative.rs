use ndarray::{Array2, ArrayView, ArrayView4, Axis};

use super::LossFn;
use crate::{
    grid::GridRank,
    per_variable::{rel_l1_error, rel_l2_error},
};

/// Combines `[batch, channel]` relative errors into a single scalar: the
/// Euclidean norm across channels for each batch entry, averaged over the
/// batch.
fn channel_norm_batch_mean(rel_err_per_var: Array2<f32>) -> f32 {
    rel_err_per_var
        .mapv(|x| x.powi(2))
        .sum_axis(Axis(1))
        .mapv(f32::sqrt)
        .mean()
        .unwrap_or(f32::NAN)
}

/// Returns the mean relative L1-norm loss.
///
/// The per-variable `rel_l1_error` is computed over the interior axes, then
/// combined across channels with `channel_norm_batch_mean`.
///
/// # Panics
/// If the shapes can't be broadcast together.
pub fn rel_l1_loss<D: GridRank>(predictions: ArrayView<f32, D>, labels: ArrayView<f32, D>) -> f32 {
    channel_norm_batch_mean(rel_l1_error(predictions, labels))
}

/// Returns the mean relative L2-norm loss, same as `rel_l1_loss` but built on
/// `rel_l2_error`.
///
/// # Panics
/// If the shapes can't be broadcast together.
pub fn rel_l2_loss<D: GridRank>(predictions: ArrayView<f32, D>, labels: ArrayView<f32, D>) -> f32 {
    channel_norm_batch_mean(rel_l2_error(predictions, labels))
}

/// Relative L1-norm loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct RelL1;

impl LossFn for RelL1 {
    fn name(&self) -> &'static str {
        "rel_l1"
    }

    fn loss(&self, predictions: ArrayView4<f32>, labels: ArrayView4<f32>) -> f32 {
        rel_l1_loss(predictions, labels)
    }
}

/// Relative L2-norm loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct RelL2;

impl LossFn for RelL2 {
    fn name(&self) -> &'static str {
        "rel_l2"
    }

    fn loss(&self, predictions: ArrayView4<f32>, labels: ArrayView4<f32>) -> f32 {
        rel_l2_loss(predictions, labels)
    }
}
