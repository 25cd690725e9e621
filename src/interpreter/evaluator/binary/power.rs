use tracing::debug;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::Context,
        preferences::AngleUnit,
        value::{
            complex::{ComplexNumber, NAN},
            core::{NumericValue, Operand},
            matrix::Matrix,
        },
    },
    util::num::{f64_to_u64_exact, is_integral},
};

impl Context {
    /// Evaluates an exponentiation.
    ///
    /// Dispatches on the kinds of the evaluated operands:
    /// - scalar ^ scalar: [`Context::pow_on_complex`].
    /// - matrix ^ scalar: [`Context::pow_on_matrix_and_complex`]; the
    ///   exponent node is approximated for validation.
    /// - scalar ^ matrix and matrix ^ matrix: always NaN.
    ///
    /// # Parameters
    /// - `base`: The evaluated base.
    /// - `exponent`: The evaluated exponent.
    /// - `exponent_node`: The unevaluated exponent.
    /// - `angle_unit`: Resolved angle unit.
    ///
    /// # Panics
    /// Panics on [`AngleUnit::Default`], whatever the operand kinds.
    ///
    /// # Example
    /// ```
    /// use calcore::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, preferences::AngleUnit, value::core::NumericValue},
    /// };
    ///
    /// let context = Context::new();
    /// let base = NumericValue::Real(2.0);
    /// let exponent = NumericValue::Real(10.0);
    ///
    /// let result = context.eval_pow(&base, &exponent, &Expr::real(10.0), AngleUnit::Radian);
    /// assert_eq!(result, NumericValue::Real(1024.0));
    /// ```
    #[must_use]
    pub fn eval_pow(&self,
                    base: &NumericValue,
                    exponent: &NumericValue,
                    exponent_node: &Expr,
                    angle_unit: AngleUnit)
                    -> NumericValue {
        assert_ne!(angle_unit, AngleUnit::Default, "angle unit must be resolved before evaluation");

        match (base.operand(), exponent.operand()) {
            (Operand::Scalar(c), Operand::Scalar(d)) => Self::pow_on_complex(c, d).into(),
            (Operand::Matrix(m), Operand::Scalar(c)) => {
                let exponent_approximation = self.approx(exponent_node, angle_unit);
                Self::pow_on_matrix_and_complex(m, c, exponent_approximation)
            },
            (Operand::Scalar(_), Operand::Matrix(_)) | (Operand::Matrix(_), Operand::Matrix(_)) => {
                debug!(base = %base.kind(), exponent = %exponent.kind(), "unsupported power");
                NumericValue::nan()
            },
        }
    }

    /// Raises a complex number to a complex power.
    ///
    /// Multi-valued cases are refused: a non-real exponent is only accepted on
    /// a positive real base, anything else gives NaN.
    ///
    /// For a real exponent, two exact shortcuts run before the polar formula,
    /// in this order:
    /// 1. a real base with an integer exponent gives a real result;
    /// 2. a negative real base with exponent exactly `0.5` gives a purely
    ///    imaginary result.
    ///
    /// The shortcut results are computed from the base's radius, so a
    /// negative base with an odd exponent comes out positive.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::{evaluator::core::Context, value::complex::ComplexNumber};
    ///
    /// let c = Context::pow_on_complex(ComplexNumber::new(2.0, 0.0), ComplexNumber::new(3.0, 0.0));
    /// assert_eq!(c, ComplexNumber::new(8.0, 0.0));
    ///
    /// let c = Context::pow_on_complex(ComplexNumber::new(-4.0, 0.0), ComplexNumber::new(0.5, 0.0));
    /// assert_eq!(c, ComplexNumber::new(0.0, 2.0));
    ///
    /// let c = Context::pow_on_complex(ComplexNumber::new(1.0, 1.0), ComplexNumber::new(0.0, 1.0));
    /// assert!(c.is_nan());
    /// ```
    #[must_use]
    pub fn pow_on_complex(c: ComplexNumber, d: ComplexNumber) -> ComplexNumber {
        if d.b() != 0.0 {
            if c.b() != 0.0 || c.a() <= 0.0 {
                return NAN;
            }
            let radius = c.a().powf(d.a());
            let theta = d.b() * c.a().ln();
            return ComplexNumber::polar(radius, theta);
        }

        let radius = c.r().powf(d.a());
        // A real raised to an integer is real; the polar formula would leave
        // a tiny imaginary residue.
        if c.b() == 0.0 && d.a() == d.a().round() {
            return ComplexNumber::cartesian(radius, 0.0);
        }
        // Likewise the square root of a negative real is purely imaginary.
        if c.a() < 0.0 && c.b() == 0.0 && d.a() == 0.5 {
            return ComplexNumber::cartesian(0.0, radius);
        }
        let theta = d.a() * c.th();
        ComplexNumber::polar(radius, theta)
    }

    /// Raises a square matrix to an integer power.
    ///
    /// The checks run in order and any failure gives NaN:
    /// 1. `exponent_approximation`, the real approximation of the exponent
    ///    node, is integral;
    /// 2. `m` is square;
    /// 3. the evaluated exponent `c` approximates to a finite integer.
    ///
    /// A zero power gives the identity. A negative power inverts `m` (NaN if
    /// it is singular) and raises the inverse to the opposite power. A
    /// positive power `k` multiplies an accumulator, starting from the scalar
    /// `1`, by `m` exactly `k` times through the multiplication evaluator.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::{
    ///     evaluator::core::Context,
    ///     value::{complex::ComplexNumber, core::NumericValue, matrix::Matrix},
    /// };
    ///
    /// let m = Matrix::from_real_rows(&[[1.0, 1.0], [0.0, 1.0]]);
    ///
    /// let cube = Context::pow_on_matrix_and_complex(&m, ComplexNumber::float(3.0), 3.0);
    /// assert_eq!(cube, NumericValue::Matrix(Matrix::from_real_rows(&[[1.0, 3.0], [0.0, 1.0]])));
    ///
    /// let half = Context::pow_on_matrix_and_complex(&m, ComplexNumber::float(0.5), 0.5);
    /// assert!(half.is_nan());
    /// ```
    #[must_use]
    pub fn pow_on_matrix_and_complex(m: &Matrix,
                                     c: ComplexNumber,
                                     exponent_approximation: f64)
                                     -> NumericValue {
        if !is_integral(exponent_approximation) {
            debug!(exponent = exponent_approximation, "matrix power needs an integer exponent");
            return NumericValue::nan();
        }
        if !m.is_square() {
            debug!(rows = m.number_of_rows(),
                   columns = m.number_of_columns(),
                   "matrix power needs a square matrix");
            return NumericValue::nan();
        }
        let power = c.approximate();
        if !is_integral(power) {
            debug!(exponent = %c, "matrix power needs a finite integer exponent");
            return NumericValue::nan();
        }

        if power == 0.0 {
            return Matrix::identity(m.number_of_rows()).into();
        }

        if power < 0.0 {
            let Some(inverse) = m.inverse() else {
                debug!("singular matrix raised to a negative power");
                return NumericValue::nan();
            };
            return Self::pow_on_matrix_and_complex(&inverse, ComplexNumber::float(-power), -power);
        }

        let Some(count) = f64_to_u64_exact(power) else {
            debug!(exponent = power, "matrix power exponent is too large");
            return NumericValue::nan();
        };

        let mut result = NumericValue::Real(1.0);
        for _ in 0..count {
            result = Self::multiply(result.operand(), Operand::Matrix(m));
        }
        result
    }
}
