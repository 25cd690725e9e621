use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Expr, MatrixLiteral, Operator},
    interpreter::{
        preferences::AngleUnit,
        value::{
            core::{Kind, NumericValue},
            matrix::Matrix,
        },
    },
};

/// Symbol table consulted while evaluating expressions.
///
/// The evaluator only ever reads from it: a `Context` is passed by shared
/// reference and nothing in the evaluation path can change it.
///
/// ## Usage
///
/// Build a `Context` once, [`define`](Context::define) the symbols an
/// expression refers to, then call [`evaluate`](Context::evaluate) or
/// [`approximate`](Context::approximate) as many times as needed.
#[derive(Debug, Clone, Default)]
pub struct Context {
    symbols: HashMap<String, NumericValue>,
}

impl Context {
    /// Creates a context with no symbols defined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn define(&mut self, name: impl Into<String>, value: NumericValue) {
        self.symbols.insert(name.into(), value);
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NumericValue> {
        self.symbols.get(name)
    }

    /// Evaluates an expression tree to a freshly owned value.
    ///
    /// Children are evaluated first, then the node's operator combines their
    /// values according to their runtime kinds. Invalid domains never fail:
    /// they produce a NaN scalar in-band.
    ///
    /// # Panics
    /// Panics if `angle_unit` is [`AngleUnit::Default`]; the sentinel must be
    /// resolved by the caller.
    ///
    /// # Example
    /// ```
    /// use calcore::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, preferences::AngleUnit, value::core::NumericValue},
    /// };
    ///
    /// let context = Context::new();
    /// let e = Expr::power(Expr::real(2.0), Expr::real(10.0));
    /// assert_eq!(context.evaluate(&e, AngleUnit::Radian), NumericValue::Real(1024.0));
    /// ```
    #[must_use]
    pub fn evaluate(&self, expr: &Expr, angle_unit: AngleUnit) -> NumericValue {
        assert_ne!(angle_unit, AngleUnit::Default, "angle unit must be resolved before evaluation");
        self.eval(expr, angle_unit)
    }

    pub(crate) fn eval(&self, expr: &Expr, angle_unit: AngleUnit) -> NumericValue {
        match expr {
            Expr::Number(c) => NumericValue::from(*c),
            Expr::Symbol(name) => self.eval_symbol(name),
            Expr::Matrix(matrix) => self.eval_matrix_literal(matrix, angle_unit),
            Expr::Operation(operation) => match operation.operator() {
                Operator::Binary(op) => self.eval_binary(op, operation.operands(), angle_unit),
                Operator::Unary(op) => {
                    let operand = self.eval(operation.operand(0), angle_unit);
                    Self::eval_unary(op, operand, angle_unit)
                },
            },
        }
    }

    fn eval_symbol(&self, name: &str) -> NumericValue {
        self.get(name).cloned().unwrap_or_else(|| {
                                   debug!(symbol = name, "unknown symbol evaluates to NaN");
                                   NumericValue::nan()
                               })
    }

    /// Evaluates every entry of a matrix literal. Matrices cannot nest, so an
    /// entry that evaluates to a matrix becomes a NaN entry.
    fn eval_matrix_literal(&self, matrix: &MatrixLiteral, angle_unit: AngleUnit) -> NumericValue {
        let entries = matrix.entries()
                            .iter()
                            .map(|entry| {
                                let value = self.eval(entry, angle_unit);
                                if value.kind() == Kind::Matrix {
                                    debug!("nested matrix entry evaluates to NaN");
                                }
                                value.into_entry()
                            })
                            .collect();

        Matrix::new(matrix.number_of_rows(), matrix.number_of_columns(), entries).into()
    }
}
