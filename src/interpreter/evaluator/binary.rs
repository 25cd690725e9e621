/// Addition, subtraction, multiplication and division.
///
/// Each operator handles the four kind pairs explicitly: scalars combine
/// directly, scalars and matrices combine entrywise, and matrices combine
/// through entrywise sums, the matrix product or the matrix inverse.
pub mod arithmetic;
/// Binary dispatch.
///
/// Evaluates both operands of a binary node and routes them to the
/// operator's algorithm set.
pub mod core;
/// Exponentiation.
///
/// Complex powers with exact real and imaginary shortcuts, integer powers of
/// square matrices, and the unsupported matrix-exponent combinations.
pub mod power;
