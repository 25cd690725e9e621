/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression. Evaluation itself never fails: invalid domains are reported
/// in-band as NaN, and broken preconditions panic.
pub mod parse_error;

pub use parse_error::ParseError;
