/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Returns `true` if `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use calcore::util::num::is_integral;
///
/// assert!(is_integral(-3.0));
/// assert!(!is_integral(2.5));
/// assert!(!is_integral(f64::NAN));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Converts an `f64` to `u64` if and only if the conversion is exact and the
/// value is no larger than [`MAX_SAFE_U64_INT`].
///
/// ## Example
/// ```
/// use calcore::util::num::f64_to_u64_exact;
///
/// assert_eq!(f64_to_u64_exact(3.0), Some(3));
/// assert_eq!(f64_to_u64_exact(-1.0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_exact(value: f64) -> Option<u64> {
    if !is_integral(value) || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    Some(value as u64)
}
