//! # calcore
//!
//! calcore is the numeric evaluation kernel of a calculator engine written in
//! Rust. It parses expressions into trees and evaluates them to real numbers,
//! complex numbers or matrices, dispatching every operator on the runtime
//! kinds of its operands. Invalid domains produce NaN rather than errors.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context, parser::core::parse, preferences::Preferences,
        value::core::NumericValue,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The tree is built by the parser (or directly by
/// callers) and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression nodes: numbers, symbols, matrix literals and
///   operations.
/// - Enforces that every operation carries exactly its operator's arity.
/// - Provides constructors and structural cloning.
pub mod ast;
/// Provides the error types of the parsing front end.
///
/// Evaluation itself never fails; only turning text into a tree can.
pub mod error;
/// Orchestrates lexing, parsing, evaluation and layout.
///
/// This module ties together the lexer, parser, evaluator, value
/// representations, preferences and layouts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating expressions.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers used by the evaluator, such as
/// checks that a float holds an exact integer and conversions between
/// floating-point and integer types without silent data loss.
pub mod util;

/// Parses and evaluates `source` under the given preferences.
///
/// # Errors
/// Returns a `ParseError` if the source is not a valid expression. Numeric
/// problems are not errors: they evaluate to NaN.
///
/// # Examples
/// ```
/// use calcore::{
///     evaluate_source,
///     interpreter::{evaluator::core::Context, preferences::Preferences, value::core::NumericValue},
/// };
///
/// let context = Context::new();
/// let preferences = Preferences::default();
///
/// let v = evaluate_source("(-4)^0.5", &context, &preferences).unwrap();
/// assert_eq!(v.to_string(), "2i");
///
/// let v = evaluate_source("[[1,2],[3,4]]^[[1,0],[0,1]]", &context, &preferences).unwrap();
/// assert!(v.is_nan());
///
/// assert!(evaluate_source("2 *", &context, &preferences).is_err());
/// ```
pub fn evaluate_source(source: &str,
                       context: &Context,
                       preferences: &Preferences)
                       -> Result<NumericValue, ParseError> {
    let expr = parse(source)?;
    Ok(context.evaluate(&expr, preferences.angle_unit))
}

/// Parses `source` and computes its real-domain approximation.
///
/// # Errors
/// Returns a `ParseError` if the source is not a valid expression.
///
/// # Examples
/// ```
/// use calcore::{
///     approximate_source,
///     interpreter::{evaluator::core::Context, preferences::Preferences},
/// };
///
/// let context = Context::new();
/// let preferences = Preferences::default();
///
/// assert_eq!(approximate_source("2^10 - 24", &context, &preferences).unwrap(), 1000.0);
/// assert!(approximate_source("(-4)^0.5", &context, &preferences).unwrap().is_nan());
/// ```
pub fn approximate_source(source: &str,
                          context: &Context,
                          preferences: &Preferences)
                          -> Result<f64, ParseError> {
    let expr = parse(source)?;
    Ok(context.approximate(&expr, preferences.angle_unit))
}
