pub mod error;
pub mod eval;
pub mod grid;
pub mod loss;
pub mod per_variable;

pub use error::{MetricsErr, Result};
pub use eval::{EvalMetrics, EvalMode};
pub use grid::{GridRank, check_shapes};
pub use loss::{
    LossFn, LossFnSpec, MSRE_EPS, Mse, Msre, RelL1, RelL2, mse_loss, msre_loss, rel_l1_loss,
    rel_l2_loss,
};
pub use per_variable::{mse_error, rel_l1_error, rel_l2_error};
