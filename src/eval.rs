use std::fmt::{self, Display};

use log::warn;
use ndarray::ArrayView;
use serde::{Deserialize, Serialize};

use crate::{
    grid::GridRank,
    loss::{mse_loss, rel_l1_loss, rel_l2_loss},
};

/// The evaluation mode a set of errors was measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalMode {
    /// Single step prediction.
    Direct,
    /// Multi step autoregressive rollout.
    Rollout,
    /// The last step of a rollout.
    Final,
}

impl EvalMode {
    pub const ALL: [EvalMode; 3] = [EvalMode::Direct, EvalMode::Rollout, EvalMode::Final];

    pub fn name(&self) -> &'static str {
        match self {
            EvalMode::Direct => "direct",
            EvalMode::Rollout => "rollout",
            EvalMode::Final => "final",
        }
    }
}

/// Labeled evaluation results.
///
/// Every field starts unset and serializes as `null` until filled, either
/// directly or through `record`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalMetrics {
    pub error_direct_ms: Option<f32>,
    pub error_direct_l1: Option<f32>,
    pub error_direct_l2: Option<f32>,
    pub error_rollout_ms: Option<f32>,
    pub error_rollout_l1: Option<f32>,
    pub error_rollout_l2: Option<f32>,
    pub error_final_ms: Option<f32>,
    pub error_final_l1: Option<f32>,
    pub error_final_l2: Option<f32>,
}

impl EvalMetrics {
    /// Returns a new `EvalMetrics` with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the mean squared error and the relative L1 and L2 losses
    /// between `predictions` and `labels` and stores them under `mode`.
    ///
    /// Non-finite values are stored as they are, only a warning is logged.
    ///
    /// # Panics
    /// If the shapes can't be broadcast together.
    pub fn record<D: GridRank>(
        &mut self,
        mode: EvalMode,
        predictions: ArrayView<f32, D>,
        labels: ArrayView<f32, D>,
    ) {
        let ms = mse_loss(predictions.view(), labels.view());
        let l1 = rel_l1_loss(predictions.view(), labels.view());
        let l2 = rel_l2_loss(predictions, labels);

        for (metric, value) in [("ms", ms), ("l1", l1), ("l2", l2)] {
            if !value.is_finite() {
                warn!(mode = mode.name(), metric = metric; "non-finite error value {value}");
            }
        }

        self.set(mode, Some(ms), Some(l1), Some(l2));
    }

    /// Overwrites the `(ms, l1, l2)` triple of `mode`.
    pub fn set(&mut self, mode: EvalMode, ms: Option<f32>, l1: Option<f32>, l2: Option<f32>) {
        let [ms_slot, l1_slot, l2_slot] = self.slots_mut(mode);
        *ms_slot = ms;
        *l1_slot = l1;
        *l2_slot = l2;
    }

    /// Returns the `(ms, l1, l2)` triple of `mode`.
    pub fn get(&self, mode: EvalMode) -> (Option<f32>, Option<f32>, Option<f32>) {
        match mode {
            EvalMode::Direct => (
                self.error_direct_ms,
                self.error_direct_l1,
                self.error_direct_l2,
            ),
            EvalMode::Rollout => (
                self.error_rollout_ms,
                self.error_rollout_l1,
                self.error_rollout_l2,
            ),
            EvalMode::Final => (
                self.error_final_ms,
                self.error_final_l1,
                self.error_final_l2,
            ),
        }
    }

    /// Whether nothing has been recorded for any mode.
    pub fn is_empty(&self) -> bool {
        EvalMode::ALL
            .iter()
            .all(|&mode| self.get(mode) == (None, None, None))
    }

    fn slots_mut(&mut self, mode: EvalMode) -> [&mut Option<f32>; 3] {
        match mode {
            EvalMode::Direct => [
                &mut self.error_direct_ms,
                &mut self.error_direct_l1,
                &mut self.error_direct_l2,
            ],
            EvalMode::Rollout => [
                &mut self.error_rollout_ms,
                &mut self.error_rollout_l1,
                &mut self.error_rollout_l2,
            ],
            EvalMode::Final => [
                &mut self.error_final_ms,
                &mut self.error_final_l1,
                &mut self.error_final_l2,
            ],
        }
    }
}

fn fmt_slot(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{v:.6e}"),
        None => "-".to_string(),
    }
}

impl Display for EvalMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no metrics recorded");
        }

        let lines: Vec<String> = EvalMode::ALL
            .iter()
            .filter_map(|&mode| {
                let (ms, l1, l2) = self.get(mode);
                if (ms, l1, l2) == (None, None, None) {
                    return None;
                }

                Some(format!(
                    "{}: ms={} l1={} l2={}",
                    mode.name(),
                    fmt_slot(ms),
                    fmt_slot(l1),
                    fmt_slot(l2)
                ))
            })
            .collect();

        write!(f, "{}", lines.join("\n"))
    }
}
