use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete expression from source text.
///
/// The whole input must form a single expression; anything left over after
/// it is an error.
///
/// # Errors
/// Returns a `ParseError` for invalid tokens, grammar violations, unknown
/// functions, malformed matrices or trailing input.
///
/// # Example
/// ```
/// use calcore::{ast::Expr, interpreter::parser::core::parse};
///
/// let e = parse("2^(1+1)").unwrap();
/// assert_eq!(e,
///            Expr::power(Expr::real(2.0),
///                        Expr::parenthesis(Expr::addition(Expr::real(1.0), Expr::real(1.0)))));
///
/// assert!(parse("2 +").is_err());
/// assert!(parse("2 3").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
