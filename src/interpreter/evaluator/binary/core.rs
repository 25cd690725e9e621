use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::Context,
        preferences::AngleUnit,
        value::core::NumericValue,
    },
};

impl Context {
    /// Evaluates a binary operation node.
    ///
    /// Both operands are evaluated first, left to right. The operator then
    /// picks the algorithm matching the pair of runtime kinds: every operator
    /// handles scalar × scalar, matrix × scalar, scalar × matrix and
    /// matrix × matrix explicitly.
    ///
    /// Power also receives the unevaluated exponent node, since validating a
    /// matrix power approximates it.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `operands`: The node's two operands, left then right.
    /// - `angle_unit`: Resolved angle unit.
    ///
    /// # Returns
    /// A freshly owned `NumericValue`.
    ///
    /// # Panics
    /// Panics on [`AngleUnit::Default`].
    ///
    /// # Example
    /// ```
    /// use calcore::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, preferences::AngleUnit, value::core::NumericValue},
    /// };
    ///
    /// let context = Context::new();
    /// let operands = [Expr::real(3.0), Expr::real(4.0)];
    ///
    /// let result = context.eval_binary(BinaryOperator::Add, &operands, AngleUnit::Radian);
    /// assert_eq!(result, NumericValue::Real(7.0));
    /// ```
    #[must_use]
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       operands: &[Expr],
                       angle_unit: AngleUnit)
                       -> NumericValue {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        assert_ne!(angle_unit, AngleUnit::Default, "angle unit must be resolved before evaluation");

        let left = self.eval(&operands[0], angle_unit);
        let right = self.eval(&operands[1], angle_unit);

        trace!(%op, lhs = %left.kind(), rhs = %right.kind(), "binary dispatch");

        match op {
            Add => Self::eval_addition(&left, &right),
            Sub => Self::eval_subtraction(&left, &right),
            Mul => Self::eval_multiplication(&left, &right),
            Div => Self::eval_division(&left, &right),
            Pow => self.eval_pow(&left, &right, &operands[1], angle_unit),
        }
    }
}
