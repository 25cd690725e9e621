/// Real-domain approximation.
///
/// Computes a single `f64` for an expression using plain floating-point
/// operations. Used for fast numeric display and for validating matrix
/// power exponents.
pub mod approximate;

/// Binary operator evaluation logic.
///
/// Evaluates both operands, then runs the algorithm matching the pair of
/// runtime kinds (scalar or matrix on each side) for the operator.
pub mod binary;

/// Core evaluation logic and the symbol table.
///
/// Contains the `Context` type, the recursive evaluation entry point and the
/// evaluation of leaves (numbers, symbols, matrix literals).
pub mod core;

/// Unary operator evaluation logic.
///
/// Negation, grouping parentheses and the trigonometric functions.
pub mod unary;
