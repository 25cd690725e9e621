use std::fmt::Display;

use crate::interpreter::value::{
    complex::{ComplexNumber, NAN},
    matrix::Matrix,
};

/// Runtime numeric category of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Real,
    Complex,
    Matrix,
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Complex => write!(f, "complex"),
            Self::Matrix => write!(f, "matrix"),
        }
    }
}

/// Represents the result of evaluating an expression.
///
/// Every evaluation step produces a fresh, independently owned value;
/// operands are only ever read.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    /// A real scalar. This is also how in-band failures are reported: as
    /// `Real(NaN)`.
    Real(f64),
    /// A scalar with a nonzero imaginary part.
    Complex(ComplexNumber),
    /// A dense matrix of complex entries.
    Matrix(Matrix),
}

/// Borrowed view of a value used by the binary-operator dispatch.
///
/// Real and complex values are unified into a single scalar case, leaving
/// exactly four kind pairs per binary operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Scalar(ComplexNumber),
    Matrix(&'a Matrix),
}

impl From<ComplexNumber> for NumericValue {
    fn from(c: ComplexNumber) -> Self {
        c.checked_as_real()
    }
}

impl From<f64> for NumericValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<Matrix> for NumericValue {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl NumericValue {
    /// The NaN scalar used for every invalid-domain result.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::core::{Kind, NumericValue};
    ///
    /// let nan = NumericValue::nan();
    /// assert!(nan.is_nan());
    /// assert_eq!(nan.kind(), Kind::Real);
    /// ```
    #[must_use]
    pub const fn nan() -> Self {
        Self::Real(f64::NAN)
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Real(_) => Kind::Real,
            Self::Complex(_) => Kind::Complex,
            Self::Matrix(_) => Kind::Matrix,
        }
    }

    /// Returns `true` for a scalar with a NaN part. Matrices are never NaN as
    /// a whole, even if some of their entries are.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        match self {
            Self::Real(r) => r.is_nan(),
            Self::Complex(c) => c.is_nan(),
            Self::Matrix(_) => false,
        }
    }

    /// Returns the dispatch view of this value.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::{
    ///     complex::ComplexNumber,
    ///     core::{NumericValue, Operand},
    /// };
    ///
    /// let v = NumericValue::Real(3.0);
    /// assert_eq!(v.operand(), Operand::Scalar(ComplexNumber::float(3.0)));
    /// ```
    #[must_use]
    pub const fn operand(&self) -> Operand<'_> {
        match self {
            Self::Real(r) => Operand::Scalar(ComplexNumber::float(*r)),
            Self::Complex(c) => Operand::Scalar(*c),
            Self::Matrix(m) => Operand::Matrix(m),
        }
    }

    /// Views a scalar as a complex number; `None` for matrices.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::{complex::ComplexNumber, core::NumericValue};
    ///
    /// assert_eq!(NumericValue::Real(2.0).as_complex(), Some(ComplexNumber::new(2.0, 0.0)));
    /// ```
    #[must_use]
    pub fn as_complex(&self) -> Option<ComplexNumber> {
        match self {
            Self::Real(r) => Some(ComplexNumber::float(*r)),
            Self::Complex(c) => Some(*c),
            Self::Matrix(_) => None,
        }
    }

    /// Approximates the value as a real float. Complex numbers with a nonzero
    /// imaginary part and matrices have no real approximation and give NaN.
    #[must_use]
    pub fn approximate(&self) -> f64 {
        match self {
            Self::Real(r) => *r,
            Self::Complex(c) => c.approximate(),
            Self::Matrix(_) => f64::NAN,
        }
    }

    /// Collapses the value to a single matrix entry. Matrices cannot be
    /// nested, so a matrix collapses to NaN.
    #[must_use]
    pub fn into_entry(self) -> ComplexNumber {
        self.as_complex().unwrap_or(NAN)
    }
}

impl Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
