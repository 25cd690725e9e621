use std::f64::consts::PI;

use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::Context,
        preferences::AngleUnit,
        value::{complex::ComplexNumber, core::NumericValue},
    },
};

impl Context {
    /// Evaluates a unary operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `Negate`: negation of a scalar, or of every matrix entry.
    /// - `Parenthesis`: returns the operand unchanged.
    /// - `Sin`, `Cos`: complex sine and cosine, applied entrywise to
    ///   matrices. In degree mode the argument is converted to radians first.
    ///
    /// # Panics
    /// Panics on [`AngleUnit::Default`], for every operator.
    ///
    /// # Example
    /// ```
    /// use calcore::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, preferences::AngleUnit, value::core::NumericValue},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, NumericValue::Real(5.0), AngleUnit::Radian);
    /// assert_eq!(v, NumericValue::Real(-5.0));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Sin, NumericValue::Real(90.0), AngleUnit::Degree);
    /// assert_eq!(v, NumericValue::Real(1.0));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: NumericValue, angle_unit: AngleUnit) -> NumericValue {
        assert_ne!(angle_unit, AngleUnit::Default, "angle unit must be resolved before evaluation");

        match op {
            UnaryOperator::Parenthesis => value,
            UnaryOperator::Negate => map_scalars(&value, |c| -c),
            UnaryOperator::Sin => map_scalars(&value, |c| to_radians(c, angle_unit).sin()),
            UnaryOperator::Cos => map_scalars(&value, |c| to_radians(c, angle_unit).cos()),
        }
    }
}

fn map_scalars<F>(value: &NumericValue, f: F) -> NumericValue
    where F: Fn(ComplexNumber) -> ComplexNumber
{
    match value {
        NumericValue::Matrix(m) => m.map(f).into(),
        NumericValue::Real(r) => f(ComplexNumber::float(*r)).into(),
        NumericValue::Complex(c) => f(*c).into(),
    }
}

/// Converts a trigonometric argument to radians.
///
/// # Panics
/// Panics on [`AngleUnit::Default`].
pub(crate) fn to_radians(c: ComplexNumber, angle_unit: AngleUnit) -> ComplexNumber {
    match angle_unit {
        AngleUnit::Radian => c,
        AngleUnit::Degree => c * ComplexNumber::float(PI / 180.0),
        AngleUnit::Default => panic!("angle unit must be resolved before evaluation"),
    }
}
