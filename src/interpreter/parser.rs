/// Parser entry points.
///
/// Tokenizes a source string, parses one complete expression and rejects
/// trailing input.
pub mod core;

/// Unary, power and primary expressions.
///
/// Handles prefix negation, right-associative exponentiation, literals,
/// constants, symbols, function calls, parentheses and matrix literals.
pub mod unary;

/// Left-associative binary operators.
///
/// Parses the additive and multiplicative precedence levels.
pub mod binary;

/// Shared parsing helpers.
pub mod utils;
