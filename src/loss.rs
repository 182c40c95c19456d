use ndarray::prelude::*;
use ndarray::Data;

/// Default weighting factor applied uniformly to the focal loss.
pub const DEFAULT_ALPHA: f64 = 0.25;

/// Default focusing exponent controlling how aggressively well-classified
/// examples are down-weighted.
pub const DEFAULT_GAMMA: f64 = 2.0;

/// Computes the elementwise focal loss for binary and multi-class classification.
///
/// The focal loss is a variant of the cross-entropy loss that down-weights the
/// loss contribution of well-classified examples so that training focuses on
/// hard examples:
///
/// FL = alpha * (1 - y_pred)^gamma * CE(y_true, y_pred)
///
/// where CE is the elementwise binary cross-entropy
/// `-(y_true * ln(y_pred) + (1 - y_true) * ln(1 - y_pred))`.
///
/// No reduction is performed: the full elementwise loss array is returned and
/// aggregation (sum or mean) is left to the caller.
///
/// # Parameters
///
/// - `y_true` - Ground-truth labels, each value in `[0, 1]` (binary indicator
///   or soft label), shaped `(n_samples,)` or `(n_samples, n_classes)`
/// - `y_pred` - Predicted probabilities with the same shape as `y_true`,
///   each value expected strictly inside `(0, 1)`
/// - `alpha` - Weighting factor for the loss, conventionally in `[0, 1]`
/// - `gamma` - Focusing exponent, conventionally non-negative
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use focal_loss::loss::focal_loss;
///
/// let y_true = array![1.0, 0.0];
/// let y_pred = array![0.9, 0.1];
/// let (name, loss, is_evaluative) = focal_loss(&y_true, &y_pred, 0.25, 2.0);
///
/// assert_eq!(name, "focal_loss");
/// assert!(!is_evaluative);
/// // 0.25 * (1 - 0.9)^2 * -ln(0.9)
/// assert!((loss[0] - 0.25 * 0.01 * -(0.9f64.ln())).abs() < 1e-12);
/// ```
///
/// # Returns
///
/// A tuple of:
/// - `&'static str` - The loss function name, always `"focal_loss"`
/// - `Array<f64, D>` - The elementwise loss, same shape as the inputs
/// - `bool` - Whether the loss is evaluative rather than optimizable, always `false`
///
/// # Panics
///
/// - Panics if the two arrays have shapes that cannot be broadcast together
///
/// # Numerical notes
///
/// Predictions are used as-is, without clipping or validation. A `y_pred`
/// element of exactly `0.0` or `1.0` makes the logarithm infinite and
/// propagates `inf`/`nan` into the corresponding output element rather than
/// returning an error. Likewise `alpha` and `gamma` are not range-checked;
/// out-of-range values yield whatever the arithmetic yields.
pub fn focal_loss<S, D>(
    y_true: &ArrayBase<S, D>,
    y_pred: &ArrayBase<S, D>,
    alpha: f64,
    gamma: f64,
) -> (&'static str, Array<f64, D>, bool)
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut log_pred = y_pred.to_owned();
    log_pred.par_mapv_inplace(f64::ln);

    let mut log_one_minus_pred = y_pred.to_owned();
    log_one_minus_pred.par_mapv_inplace(|p| (1.0 - p).ln());

    // Elementwise binary cross entropy: -[y_true * ln(y_pred) + (1 - y_true) * ln(1 - y_pred)]
    let ce = -(y_true * &log_pred + (1.0 - y_true) * log_one_minus_pred);

    // Modulating factor: alpha * (1 - y_pred)^gamma
    let mut weight = y_pred.to_owned();
    weight.par_mapv_inplace(|p| alpha * (1.0 - p).powf(gamma));

    ("focal_loss", weight * ce, false)
}

/// Computes the focal loss with the default hyperparameters
/// [`DEFAULT_ALPHA`] (0.25) and [`DEFAULT_GAMMA`] (2.0).
///
/// See [`focal_loss`] for the full contract.
pub fn focal_loss_default<S, D>(
    y_true: &ArrayBase<S, D>,
    y_pred: &ArrayBase<S, D>,
) -> (&'static str, Array<f64, D>, bool)
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    focal_loss(y_true, y_pred, DEFAULT_ALPHA, DEFAULT_GAMMA)
}
