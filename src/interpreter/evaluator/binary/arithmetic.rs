use tracing::debug;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::Context,
        value::{
            complex::ComplexNumber,
            core::{NumericValue, Operand},
            matrix::Matrix,
        },
    },
};

impl Context {
    /// Evaluates an addition.
    ///
    /// Scalars add directly. A scalar and a matrix add entrywise. Two
    /// matrices add entrywise when their dimensions match and give NaN
    /// otherwise.
    #[must_use]
    pub fn eval_addition(left: &NumericValue, right: &NumericValue) -> NumericValue {
        entrywise(BinaryOperator::Add, left, right, |a, b| a + b)
    }

    /// Evaluates a subtraction, with the same kind rules as
    /// [`Context::eval_addition`]. Operand order is kept for a scalar and a
    /// matrix: `c - m` subtracts every entry from `c`.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::{
    ///     evaluator::core::Context,
    ///     value::{core::NumericValue, matrix::Matrix},
    /// };
    ///
    /// let m = NumericValue::Matrix(Matrix::from_real_rows(&[[1.0, 2.0]]));
    /// let shifted = Context::eval_subtraction(&NumericValue::Real(10.0), &m);
    /// assert_eq!(shifted, NumericValue::Matrix(Matrix::from_real_rows(&[[9.0, 8.0]])));
    ///
    /// let column = NumericValue::Matrix(Matrix::from_real_rows(&[[1.0], [2.0]]));
    /// assert!(Context::eval_subtraction(&m, &column).is_nan());
    /// ```
    #[must_use]
    pub fn eval_subtraction(left: &NumericValue, right: &NumericValue) -> NumericValue {
        entrywise(BinaryOperator::Sub, left, right, |a, b| a - b)
    }

    /// Evaluates a multiplication of two values.
    ///
    /// See [`Context::multiply`].
    #[must_use]
    pub fn eval_multiplication(left: &NumericValue, right: &NumericValue) -> NumericValue {
        Self::multiply(left.operand(), right.operand())
    }

    /// Multiplies two operands.
    ///
    /// A scalar scales every entry of a matrix. Two matrices give their
    /// matrix product, or NaN when the inner dimensions differ.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::{
    ///     evaluator::core::Context,
    ///     value::{
    ///         complex::ComplexNumber,
    ///         core::{NumericValue, Operand},
    ///         matrix::Matrix,
    ///     },
    /// };
    ///
    /// let m = Matrix::from_real_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// let doubled = Context::multiply(Operand::Scalar(ComplexNumber::float(2.0)), Operand::Matrix(&m));
    /// assert_eq!(doubled, NumericValue::Matrix(Matrix::from_real_rows(&[[2.0, 4.0], [6.0, 8.0]])));
    ///
    /// let row = Matrix::from_real_rows(&[[1.0, 2.0, 3.0]]);
    /// assert!(Context::multiply(Operand::Matrix(&m), Operand::Matrix(&row)).is_nan());
    /// ```
    #[must_use]
    pub fn multiply(left: Operand<'_>, right: Operand<'_>) -> NumericValue {
        match (left, right) {
            (Operand::Scalar(c), Operand::Scalar(d)) => (c * d).into(),
            (Operand::Matrix(m), Operand::Scalar(c)) => m.map(|entry| entry * c).into(),
            (Operand::Scalar(c), Operand::Matrix(m)) => m.map(|entry| c * entry).into(),
            (Operand::Matrix(m), Operand::Matrix(n)) => product_or_nan(m, n),
        }
    }

    /// Evaluates a division.
    ///
    /// Dividing by a matrix multiplies by its inverse: `c / m` is `c · m⁻¹`
    /// and `m / n` is `m · n⁻¹`. A divisor that is not invertible gives NaN.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::{
    ///     evaluator::core::Context,
    ///     value::{core::NumericValue, matrix::Matrix},
    /// };
    ///
    /// let m = NumericValue::Matrix(Matrix::from_real_rows(&[[2.0, 0.0], [0.0, 4.0]]));
    /// let inverse = Context::eval_division(&NumericValue::Real(1.0), &m);
    /// assert_eq!(inverse,
    ///            NumericValue::Matrix(Matrix::from_real_rows(&[[0.5, 0.0], [0.0, 0.25]])));
    /// ```
    #[must_use]
    pub fn eval_division(left: &NumericValue, right: &NumericValue) -> NumericValue {
        match (left.operand(), right.operand()) {
            (Operand::Scalar(c), Operand::Scalar(d)) => (c / d).into(),
            (Operand::Matrix(m), Operand::Scalar(c)) => m.map(|entry| entry / c).into(),
            (Operand::Scalar(c), Operand::Matrix(m)) => match m.inverse() {
                Some(inverse) => inverse.scale(c).into(),
                None => not_invertible(m),
            },
            (Operand::Matrix(m), Operand::Matrix(n)) => match n.inverse() {
                Some(inverse) => product_or_nan(m, &inverse),
                None => not_invertible(n),
            },
        }
    }
}

fn entrywise(op: BinaryOperator,
             left: &NumericValue,
             right: &NumericValue,
             combine: fn(ComplexNumber, ComplexNumber) -> ComplexNumber)
             -> NumericValue {
    match (left.operand(), right.operand()) {
        (Operand::Scalar(c), Operand::Scalar(d)) => combine(c, d).into(),
        (Operand::Matrix(m), Operand::Scalar(c)) => m.map(|entry| combine(entry, c)).into(),
        (Operand::Scalar(c), Operand::Matrix(m)) => m.map(|entry| combine(c, entry)).into(),
        (Operand::Matrix(m), Operand::Matrix(n)) => {
            m.zip_with(n, combine).map_or_else(|| {
                                                   debug!(%op, "matrix dimensions differ");
                                                   NumericValue::nan()
                                               },
                                               NumericValue::from)
        },
    }
}

fn product_or_nan(m: &Matrix, n: &Matrix) -> NumericValue {
    m.multiply(n).map_or_else(|| {
                                  debug!(left_columns = m.number_of_columns(),
                                         right_rows = n.number_of_rows(),
                                         "matrix product dimensions differ");
                                  NumericValue::nan()
                              },
                              NumericValue::from)
}

fn not_invertible(m: &Matrix) -> NumericValue {
    debug!(rows = m.number_of_rows(),
           columns = m.number_of_columns(),
           "division by a non-invertible matrix");
    NumericValue::nan()
}
