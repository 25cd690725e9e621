use crate::{
    ast::{BinaryOperator, Expr, Operator, UnaryOperator},
    interpreter::{
        evaluator::{core::Context, unary::to_radians},
        preferences::AngleUnit,
        value::complex::ComplexNumber,
    },
};

impl Context {
    /// Approximates an expression as a single real float.
    ///
    /// This is the fast path used for numeric display. Every operator maps to
    /// the plain `f64` operation with no special cases, so illegal domains
    /// simply propagate NaN (for instance a negative base with a fractional
    /// exponent). Non-real literals, non-real symbols and matrices
    /// approximate to NaN.
    ///
    /// # Panics
    /// Panics if `angle_unit` is [`AngleUnit::Default`].
    ///
    /// # Example
    /// ```
    /// use calcore::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, preferences::AngleUnit},
    /// };
    ///
    /// let context = Context::new();
    /// let e = Expr::power(Expr::real(9.0), Expr::real(0.5));
    /// assert_eq!(context.approximate(&e, AngleUnit::Radian), 3.0);
    ///
    /// let e = Expr::power(Expr::real(-9.0), Expr::real(0.5));
    /// assert!(context.approximate(&e, AngleUnit::Radian).is_nan());
    /// ```
    #[must_use]
    pub fn approximate(&self, expr: &Expr, angle_unit: AngleUnit) -> f64 {
        assert_ne!(angle_unit, AngleUnit::Default, "angle unit must be resolved before evaluation");
        self.approx(expr, angle_unit)
    }

    pub(crate) fn approx(&self, expr: &Expr, angle_unit: AngleUnit) -> f64 {
        match expr {
            Expr::Number(c) => c.approximate(),
            Expr::Symbol(name) => self.get(name).map_or(f64::NAN, |value| value.approximate()),
            Expr::Matrix(_) => f64::NAN,
            Expr::Operation(operation) => match operation.operator() {
                Operator::Binary(op) => {
                    let left = self.approx(operation.operand(0), angle_unit);
                    let right = self.approx(operation.operand(1), angle_unit);
                    match op {
                        BinaryOperator::Add => left + right,
                        BinaryOperator::Sub => left - right,
                        BinaryOperator::Mul => left * right,
                        BinaryOperator::Div => left / right,
                        BinaryOperator::Pow => left.powf(right),
                    }
                },
                Operator::Unary(op) => {
                    let operand = self.approx(operation.operand(0), angle_unit);
                    match op {
                        UnaryOperator::Negate => -operand,
                        UnaryOperator::Parenthesis => operand,
                        UnaryOperator::Sin => {
                            to_radians(ComplexNumber::float(operand), angle_unit).real.sin()
                        },
                        UnaryOperator::Cos => {
                            to_radians(ComplexNumber::float(operand), angle_unit).real.cos()
                        },
                    }
                },
            },
        }
    }
}
