mod loss_fn;
mod mse;
mod msre;
mod relative;
mod spec;

pub use loss_fn::LossFn;
pub use mse::{Mse, mse_loss};
pub use msre::{MSRE_EPS, Msre, msre_loss};
pub use relative::{RelL1, RelL2, rel_l1_loss, rel_l2_loss};
pub use spec::LossFnSpec;
