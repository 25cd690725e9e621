use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    #[error("Error at position {position}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The text of the offending token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input while more was expected.
    #[error("Error: Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected ')'.")]
    ExpectedClosingParen {
        /// Where the matching `(` starts.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Unexpected trailing token '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Called a function that does not exist.
    #[error("Error at position {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name used in the call.
        name:     String,
        /// Where the name starts.
        position: usize,
    },
    /// Called a function with the wrong number of arguments.
    #[error("Error at position {position}: '{name}' takes {expected} argument(s), found {found}.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// Number of arguments the function takes.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// Where the name starts.
        position: usize,
    },
    /// A matrix literal is empty or its rows have different lengths.
    #[error("Error at position {position}: Matrix rows must be non-empty and of equal length.")]
    MalformedMatrix {
        /// Where the matrix literal starts.
        position: usize,
    },
}
