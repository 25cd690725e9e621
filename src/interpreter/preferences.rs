use clap::ValueEnum;

/// Unit in which trigonometric arguments are interpreted.
///
/// `Default` is a sentinel meaning "use the caller's preference". It must be
/// resolved before reaching numeric code; the evaluator asserts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum AngleUnit {
    #[default]
    #[value(skip)]
    Default,
    Radian,
    Degree,
}

impl AngleUnit {
    /// Replaces the `Default` sentinel with `preferred`.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::preferences::AngleUnit;
    ///
    /// assert_eq!(AngleUnit::Default.resolve(AngleUnit::Degree), AngleUnit::Degree);
    /// assert_eq!(AngleUnit::Radian.resolve(AngleUnit::Degree), AngleUnit::Radian);
    /// ```
    #[must_use]
    pub const fn resolve(self, preferred: Self) -> Self {
        match self {
            Self::Default => preferred,
            unit => unit,
        }
    }
}

/// How real numbers are written in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum FloatDisplayMode {
    #[default]
    #[value(skip)]
    Default,
    /// Plain positional notation, e.g. `1234.5`.
    Decimal,
    /// Mantissa and exponent, e.g. `1.2345e3`.
    Scientific,
}

/// How non-real numbers are written in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum ComplexFormat {
    #[default]
    #[value(skip)]
    Default,
    /// `a + bi`
    Cartesian,
    /// `r·e^(θi)`
    Polar,
}

/// Immutable configuration threaded through evaluation and layout.
///
/// None of the fields may hold a `Default` sentinel; use
/// [`Preferences::new`], which resolves them, or [`Preferences::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Preferences {
    pub angle_unit:         AngleUnit,
    pub float_display_mode: FloatDisplayMode,
    pub complex_format:     ComplexFormat,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { angle_unit:         AngleUnit::Radian,
               float_display_mode: FloatDisplayMode::Decimal,
               complex_format:     ComplexFormat::Cartesian, }
    }
}

impl Preferences {
    /// Builds preferences, replacing any `Default` sentinel with the engine
    /// default for that setting.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::preferences::{
    ///     AngleUnit, ComplexFormat, FloatDisplayMode, Preferences,
    /// };
    ///
    /// let p = Preferences::new(AngleUnit::Degree, FloatDisplayMode::Default, ComplexFormat::Polar);
    /// assert_eq!(p.angle_unit, AngleUnit::Degree);
    /// assert_eq!(p.float_display_mode, FloatDisplayMode::Decimal);
    /// ```
    #[must_use]
    pub fn new(angle_unit: AngleUnit,
               float_display_mode: FloatDisplayMode,
               complex_format: ComplexFormat)
               -> Self {
        let fallback = Self::default();
        Self { angle_unit:         angle_unit.resolve(fallback.angle_unit),
               float_display_mode: match float_display_mode {
                   FloatDisplayMode::Default => fallback.float_display_mode,
                   mode => mode,
               },
               complex_format:     match complex_format {
                   ComplexFormat::Default => fallback.complex_format,
                   format => format,
               }, }
    }
}
