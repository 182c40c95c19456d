//! # focal-loss
//!
//! Elementwise focal loss for binary and multi-class classification, built on
//! [`ndarray`].
//!
//! The focal loss is a variant of the cross-entropy loss that multiplies each
//! example's loss by a factor shrinking as the model's confidence in the
//! correct class grows, so that training focuses on hard examples:
//!
//! FL = alpha * (1 - y_pred)^gamma * CE(y_true, y_pred)
//!
//! The crate contains exactly this computation. There is no model, optimizer,
//! data pipeline, or training loop here; the loss returns the full elementwise
//! array and leaves aggregation to the caller.

/// Module `loss` contains the focal loss computation.
///
/// # Core Functions
///
/// - `focal_loss` - Elementwise focal loss with explicit `alpha` and `gamma`
/// - `focal_loss_default` - Focal loss with the conventional defaults (`alpha = 0.25`, `gamma = 2.0`)
///
/// # Examples
/// ```rust
/// use focal_loss::loss::{focal_loss, focal_loss_default};
/// use ndarray::array;
///
/// let y_true = array![1.0, 0.0, 1.0];
/// let y_pred = array![0.9, 0.2, 0.6];
///
/// let (name, loss, is_evaluative) = focal_loss(&y_true, &y_pred, 0.25, 2.0);
/// assert_eq!(name, "focal_loss");
/// assert_eq!(loss.shape(), y_true.shape());
/// assert!(!is_evaluative);
///
/// // Same call with the default hyperparameters
/// let (_, default_loss, _) = focal_loss_default(&y_true, &y_pred);
/// assert_eq!(loss, default_loss);
/// ```
pub mod loss;

/// A convenience module that re-exports the commonly used items from this crate.
///
/// # Examples
/// ```rust
/// use focal_loss::prelude::*;
/// use ndarray::array;
///
/// let (_, loss, _) = focal_loss(&array![1.0, 0.0], &array![0.8, 0.3], DEFAULT_ALPHA, DEFAULT_GAMMA);
/// assert_eq!(loss.len(), 2);
/// ```
pub mod prelude;
