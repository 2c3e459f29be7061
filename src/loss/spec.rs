use log::debug;
use ndarray::ArrayView4;
use serde::{Deserialize, Serialize};

use super::{LossFn, MSRE_EPS, Mse, Msre, RelL1, RelL2};
use crate::{
    error::{MetricsErr, Result},
    grid::check_shapes,
};

fn default_eps() -> f32 {
    MSRE_EPS
}

/// Serializable description of a `LossFn`, as found in evaluation configs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossFnSpec {
    Mse,
    Msre {
        #[serde(default = "default_eps")]
        eps: f32,
    },
    RelL1,
    RelL2,
}

impl LossFnSpec {
    /// Parses and validates a spec from its JSON representation.
    ///
    /// # Errors
    /// `Json` if the text isn't a valid spec, `InvalidConfig` if it fails validation.
    pub fn from_json(s: &str) -> Result<Self> {
        let spec: Self = serde_json::from_str(s)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        if let LossFnSpec::Msre { eps } = *self {
            if !eps.is_finite() || eps <= 0.0 {
                return Err(MetricsErr::InvalidConfig(format!(
                    "msre epsilon must be positive and finite, got {eps}"
                )));
            }
        }

        Ok(())
    }

    /// Resolves the spec into its loss function.
    pub fn build(&self) -> Result<Box<dyn LossFn>> {
        self.validate()?;

        let loss: Box<dyn LossFn> = match *self {
            LossFnSpec::Mse => Box::new(Mse::new()),
            LossFnSpec::Msre { eps } => Box::new(Msre::new(eps)),
            LossFnSpec::RelL1 => Box::new(RelL1),
            LossFnSpec::RelL2 => Box::new(RelL2),
        };

        Ok(loss)
    }

    /// Evaluates the specified loss, refusing inputs whose shapes differ
    /// instead of broadcasting them.
    ///
    /// # Arguments
    /// * `predictions` - `[batch, time, grid, channel]` predictions.
    /// * `labels` - `[batch, time, grid, channel]` ground truth.
    ///
    /// # Errors
    /// `InvalidConfig` for an invalid spec, `ShapeMismatch` if the shapes differ.
    pub fn evaluate(&self, predictions: ArrayView4<f32>, labels: ArrayView4<f32>) -> Result<f32> {
        let loss = self.build()?;
        check_shapes(&predictions, &labels)?;

        let value = loss.loss(predictions, labels);
        debug!(loss = loss.name(), value = value; "evaluated loss");

        Ok(value)
    }
}
