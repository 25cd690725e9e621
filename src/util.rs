/// Numeric conversion helpers.
///
/// Exact conversions between `f64` and the integer types, used wherever a
/// float has to be interpreted as an iteration count or an integer exponent.
/// Every function returns `None` rather than silently rounding.
pub mod num;
