use std::{
    f64::consts::{E, PI},
    iter::Peekable,
};

use crate::{
    ast::{Expr, MatrixLiteral, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative and binds looser than exponentiation, so `-2^2` is
/// parsed as `-(2^2)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An opposite node or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        Ok(Expr::opposite(operand))
    } else {
        parse_power(tokens)
    }
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes `^`
/// right-associative (`2^3^2` is `2^(3^2)`) and allows signed exponents such
/// as `A^-1`.
///
/// Grammar: `power := primary ("^" unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens)?;
    if let Some((Token::Caret, _)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return Ok(Expr::power(base, exponent));
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - the constants `i`, `pi` and `e`
/// - function calls (`sin(x)`, `cos(x)`)
/// - symbols
/// - parenthesized expressions, kept as explicit parenthesis nodes
/// - matrix literals (`[[1,2],[3,4]]`)
///
/// # Errors
/// Returns a `ParseError` on an unexpected token, premature end of input, an
/// unclosed parenthesis, an unknown function or a malformed matrix.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), _)) => Ok(Expr::real(*n)),
        Some((Token::Identifier(name), position)) => parse_identifier(tokens, name, *position),
        Some((Token::LParen, position)) => {
            let inner = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(Expr::parenthesis(inner)),
                _ => Err(ParseError::ExpectedClosingParen { position: *position }),
            }
        },
        Some((Token::LBracket, position)) => parse_matrix_literal(tokens, *position),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses an identifier that has already been consumed.
///
/// An identifier directly followed by `(` is a function call; otherwise it is
/// one of the reserved constants or a symbol looked up at evaluation time.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                           name: &str,
                           position: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let Some(op) = UnaryOperator::from_function_name(name) else {
            return Err(ParseError::UnknownFunction { name:     name.to_string(),
                                                     position, });
        };
        let mut arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        if arguments.len() != 1 {
            return Err(ParseError::ArgumentCountMismatch { name:     name.to_string(),
                                                           expected: 1,
                                                           found:    arguments.len(),
                                                           position });
        }
        return Ok(Expr::operation(op, vec![arguments.remove(0)]));
    }

    Ok(match name {
        "i" => Expr::complex(0.0, 1.0),
        "pi" => Expr::real(PI),
        "e" => Expr::real(E),
        _ => Expr::symbol(name),
    })
}

/// Parses a matrix literal after its opening bracket.
///
/// A matrix is a bracketed, comma-separated list of rows, each row a
/// bracketed, comma-separated list of expressions. All rows must be non-empty
/// and of equal length.
///
/// Grammar: `matrix := "[" row ("," row)* "]"`, `row := "[" expression ("," expression)* "]"`
fn parse_matrix_literal<'a, I>(tokens: &mut Peekable<I>, position: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let parse_row = |tokens: &mut Peekable<I>| -> ParseResult<Vec<Expr>> {
        expect_token(tokens, &Token::LBracket)?;
        parse_comma_separated(tokens, parse_expression, &Token::RBracket)
    };
    let rows = parse_comma_separated(tokens, parse_row, &Token::RBracket)?;

    let columns = rows.first().map_or(0, Vec::len);
    if columns == 0 || rows.iter().any(|row| row.len() != columns) {
        return Err(ParseError::MalformedMatrix { position });
    }

    let number_of_rows = rows.len();
    let entries = rows.into_iter().flatten().collect();
    Ok(Expr::Matrix(MatrixLiteral::new(number_of_rows, columns, entries)))
}
