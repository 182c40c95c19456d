pub use crate::loss::{DEFAULT_ALPHA, DEFAULT_GAMMA, focal_loss, focal_loss_default};
