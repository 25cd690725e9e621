use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

use crate::interpreter::value::core::NumericValue;

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
/// The scalar used for every in-band invalid-domain result.
pub const NAN: ComplexNumber = ComplexNumber::new(f64::NAN, 0.0);

/// Represents a complex number with real and imaginary parts.
///
/// The Cartesian pair is the only stored form. The polar view
/// ([`ComplexNumber::r`], [`ComplexNumber::th`]) is always derived from it, so
/// the two representations can never drift apart.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imaginary) {
            (0.0, 0.0) => write!(f, "0"),
            (real, 0.0) => write!(f, "{real}"),
            (0.0, imaginary) => write!(f, "{imaginary}i",),
            (real, imaginary) if imaginary > 0.0 => write!(f, "{real} + {imaginary}i"),
            (real, imaginary) => write!(f, "{real} - {}i", -imaginary),
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Constructs a purely real complex number.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Constructs a complex number from its Cartesian parts.
    ///
    /// Identical to [`ComplexNumber::new`]; exists so call sites read the same
    /// way as [`ComplexNumber::polar`].
    #[must_use]
    pub const fn cartesian(real: f64, imaginary: f64) -> Self {
        Self::new(real, imaginary)
    }

    /// Constructs a complex number from a radius and an angle in radians.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::polar(2.0, std::f64::consts::FRAC_PI_2);
    /// assert!(c.real.abs() < 1e-12);
    /// assert!((c.imaginary - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn polar(radius: f64, theta: f64) -> Self {
        Self { real:      radius * theta.cos(),
               imaginary: radius * theta.sin(), }
    }

    /// Real part.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.real
    }

    /// Imaginary part.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.imaginary
    }

    /// Returns the radius (magnitude) of the number.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.r(), 5.0);
    /// ```
    #[must_use]
    pub fn r(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the angle (argument) in radians, in `(-π, π]`.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.th() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn th(&self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Returns `true` if either part is NaN.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imaginary.is_nan()
    }

    /// Approximates the number as a real float.
    ///
    /// A number with a nonzero imaginary part has no real approximation and
    /// yields NaN.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::complex::ComplexNumber;
    /// assert_eq!(ComplexNumber::new(2.5, 0.0).approximate(), 2.5);
    /// assert!(ComplexNumber::new(2.5, 1.0).approximate().is_nan());
    /// ```
    #[must_use]
    pub const fn approximate(&self) -> f64 {
        if self.imaginary == 0.0 { self.real } else { f64::NAN }
    }

    /// Converts to a `NumericValue::Real` if the imaginary part is zero,
    /// otherwise returns `NumericValue::Complex`.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::{complex::ComplexNumber, core::NumericValue};
    /// let real = ComplexNumber::new(3.0, 0.0);
    /// assert_eq!(real.checked_as_real(), NumericValue::Real(3.0));
    ///
    /// let complex = ComplexNumber::new(2.0, 1.0);
    /// assert!(matches!(complex.checked_as_real(), NumericValue::Complex(_)));
    /// ```
    #[must_use]
    pub const fn checked_as_real(&self) -> NumericValue {
        if self.imaginary == 0.0 {
            NumericValue::Real(self.real)
        } else {
            NumericValue::Complex(*self)
        }
    }

    /// Returns the sine of the complex number (argument in radians).
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, 0.0);
    /// assert!(z.sin().real.abs() < 1e-10);
    /// assert!(z.sin().imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn sin(self) -> Self {
        Self { real:      self.real.sin() * self.imaginary.cosh(),
               imaginary: self.real.cos() * self.imaginary.sinh(), }
    }

    /// Returns the cosine of the complex number (argument in radians).
    #[must_use]
    pub fn cos(self) -> Self {
        Self { real:      self.real.cos() * self.imaginary.cosh(),
               imaginary: -self.real.sin() * self.imaginary.sinh(), }
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::AddAssign for ComplexNumber {
    fn add_assign(&mut self, rhs: Self) {
        self.real += rhs.real;
        self.imaginary += rhs.imaginary;
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::SubAssign for ComplexNumber {
    fn sub_assign(&mut self, rhs: Self) {
        self.real -= rhs.real;
        self.imaginary -= rhs.imaginary;
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}
