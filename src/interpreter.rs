/// The evaluator module computes numeric results from expression trees.
///
/// The evaluator traverses the tree, evaluates leaves against the symbol
/// table, and dispatches every operator on the runtime kinds of its operands.
/// It is the numeric kernel of the engine.
///
/// # Responsibilities
/// - Evaluates expression nodes to real, complex or matrix values.
/// - Runs the algorithm matching each operator and kind pair.
/// - Reports invalid domains in-band as NaN rather than as errors.
/// - Provides the fast real-only approximation.
pub mod evaluator;
/// The layout module turns expressions and results into rendering trees.
///
/// Layouts are built under the float display mode and complex format
/// preferences, and render to linear text through `Display`.
pub mod layout;
/// The lexer module tokenizes expression source text.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a number, an identifier, an operator or a delimiter. Every
/// token carries its byte offset for error reporting.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the tree the evaluator consumes.
///
/// # Responsibilities
/// - Applies operator precedence and associativity.
/// - Keeps explicit parentheses as nodes so layouts can reproduce them.
/// - Validates matrix literals and function calls, reporting errors with
///   positions.
pub mod parser;
/// Evaluation and display preferences.
///
/// Angle unit, float display mode and complex format, each with a `Default`
/// sentinel that must be resolved before use.
pub mod preferences;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the numeric kinds produced by evaluation: real
/// numbers, complex numbers and matrices of complex entries, together with
/// their arithmetic.
pub mod value;
