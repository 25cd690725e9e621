use std::fmt::Display;

use crate::{
    ast::{BinaryOperator, Expr, Operator, UnaryOperator},
    interpreter::{
        preferences::{ComplexFormat, FloatDisplayMode},
        value::{complex::ComplexNumber, core::NumericValue, matrix::Matrix},
    },
};

/// A two-dimensional rendering tree.
///
/// A layout describes how an expression or a value is drawn, independently of
/// the surface it is drawn on. The [`Display`] implementation produces the
/// linear text form, inserting parentheses wherever a two-dimensional
/// construct would otherwise become ambiguous on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// A run of text drawn as is.
    String(String),
    /// Children drawn left to right.
    Horizontal(Vec<Layout>),
    /// A child surrounded by parentheses.
    Parenthesis(Box<Layout>),
    /// A base with a raised index, as in `x²`.
    BaselineRelative {
        /// The full-size part.
        base:  Box<Layout>,
        /// The raised part.
        index: Box<Layout>,
    },
    /// A numerator stacked over a denominator.
    Fraction {
        numerator:   Box<Layout>,
        denominator: Box<Layout>,
    },
    /// Cells laid out in rows.
    Grid(Grid),
}

/// Cells laid out in rows, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows:    usize,
    columns: usize,
    cells:   Vec<Layout>,
}

impl Grid {
    /// Builds a grid from row-major cells.
    ///
    /// # Panics
    /// Panics if either dimension is zero or if the number of cells does not
    /// equal `rows * columns`.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::layout::{Grid, Layout};
    ///
    /// let grid = Grid::new(2, 1, vec![Layout::string("a"), Layout::string("b")]);
    /// assert_eq!(grid.number_of_rows(), 2);
    /// assert_eq!(Layout::Grid(grid).to_string(), "[[a],[b]]");
    /// ```
    #[must_use]
    pub fn new(rows: usize, columns: usize, cells: Vec<Layout>) -> Self {
        assert!(rows >= 1 && columns >= 1, "grid dimensions must be at least 1x1");
        assert_eq!(cells.len(),
                   rows * columns,
                   "grid of {rows}x{columns} needs {} cells",
                   rows * columns);
        Self { rows,
               columns,
               cells }
    }

    #[must_use]
    pub const fn number_of_rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn number_of_columns(&self) -> usize {
        self.columns
    }

    /// The cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Layout] {
        &self.cells
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.cells.chunks(self.columns).enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "[")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{cell}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl Layout {
    /// Builds a text leaf.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }

    /// Whether the linear form of this layout reads as a single unit.
    ///
    /// A text leaf carrying a leading sign does not: `-2` under a
    /// superscript would read as `-(2^…)`.
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        match self {
            Self::String(s) => !s.starts_with('-'),
            Self::Parenthesis(_) | Self::Grid(_) => true,
            _ => false,
        }
    }

    fn fmt_grouped(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_atomic() {
            write!(f, "{self}")
        } else {
            write!(f, "({self})")
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Horizontal(children) => children.iter().try_for_each(|child| write!(f, "{child}")),
            Self::Parenthesis(inner) => write!(f, "({inner})"),
            Self::BaselineRelative { base, index } => {
                base.fmt_grouped(f)?;
                write!(f, "^")?;
                index.fmt_grouped(f)
            },
            Self::Fraction { numerator, denominator } => {
                numerator.fmt_grouped(f)?;
                write!(f, "/")?;
                denominator.fmt_grouped(f)
            },
            Self::Grid(grid) => write!(f, "{grid}"),
        }
    }
}

// Binding strength of an expression's linear form, loosest first.
const ADDITIVE: u8 = 1;
const MULTIPLICATIVE: u8 = 2;
const PREFIX: u8 = 3;
const POWER: u8 = 4;
const ATOM: u8 = 5;

fn assert_resolved(float_display_mode: FloatDisplayMode, complex_format: ComplexFormat) {
    assert_ne!(float_display_mode,
               FloatDisplayMode::Default,
               "float display mode must be resolved before layout");
    assert_ne!(complex_format,
               ComplexFormat::Default,
               "complex format must be resolved before layout");
}

fn format_float(x: f64, float_display_mode: FloatDisplayMode) -> String {
    match float_display_mode {
        FloatDisplayMode::Scientific if x.is_finite() => format!("{x:e}"),
        _ => format!("{x}"),
    }
}

fn number_layout(c: ComplexNumber,
                 float_display_mode: FloatDisplayMode,
                 complex_format: ComplexFormat)
                 -> Layout {
    let real = format_float(c.real, float_display_mode);
    if c.imaginary == 0.0 || c.is_nan() {
        return Layout::String(real);
    }

    match complex_format {
        ComplexFormat::Polar => {
            let radius = format_float(c.r(), float_display_mode);
            let theta = format_float(c.th(), float_display_mode);
            let angle = Layout::Horizontal(vec![Layout::String(theta), Layout::string("i")]);
            let exponential = Layout::BaselineRelative { base:  Box::new(Layout::string("e")),
                                                         index: Box::new(angle), };
            Layout::Horizontal(vec![Layout::String(radius), Layout::string("*"), exponential])
        },
        _ => {
            let imaginary = format_float(c.imaginary.abs(), float_display_mode);
            if c.real == 0.0 {
                let sign = if c.imaginary < 0.0 { "-" } else { "" };
                return Layout::String(format!("{sign}{imaginary}i"));
            }
            let sign = if c.imaginary < 0.0 { "-" } else { "+" };
            Layout::Horizontal(vec![Layout::String(real),
                                    Layout::String(format!(" {sign} ")),
                                    Layout::String(format!("{imaginary}i"))])
        },
    }
}

/// Binding strength of the text [`number_layout`] produces for `c`.
fn number_precedence(c: ComplexNumber, complex_format: ComplexFormat) -> u8 {
    if c.is_nan() {
        return ATOM;
    }
    if c.imaginary == 0.0 {
        return if c.real.is_sign_negative() { PREFIX } else { ATOM };
    }
    match complex_format {
        ComplexFormat::Polar => MULTIPLICATIVE,
        _ if c.real != 0.0 => ADDITIVE,
        _ if c.imaginary < 0.0 => PREFIX,
        _ => MULTIPLICATIVE,
    }
}

fn matrix_layout(m: &Matrix,
                 float_display_mode: FloatDisplayMode,
                 complex_format: ComplexFormat)
                 -> Layout {
    let cells = m.entries()
                 .iter()
                 .map(|c| number_layout(*c, float_display_mode, complex_format))
                 .collect();
    Layout::Grid(Grid::new(m.number_of_rows(), m.number_of_columns(), cells))
}

impl Expr {
    /// Produces the layout of this expression.
    ///
    /// Every operator delegates to its operands' layouts. A power becomes a
    /// superscript composite; when its exponent is a parenthesis node, the
    /// grouping is dropped since the superscript position already groups it.
    ///
    /// Operands that bind more loosely than their operator are wrapped in a
    /// [`Layout::Parenthesis`], so the linear text parses back to the same
    /// tree: `2 * (3 + 4)`, `1 - (2 - 3)` and `(-2)^2` keep their grouping.
    ///
    /// # Panics
    /// Panics if either mode is its `Default` sentinel.
    ///
    /// # Example
    /// ```
    /// use calcore::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         layout::Layout,
    ///         preferences::{ComplexFormat, FloatDisplayMode},
    ///     },
    /// };
    ///
    /// let e = Expr::power(Expr::symbol("x"), Expr::parenthesis(Expr::real(2.0)));
    /// let layout = e.create_layout(FloatDisplayMode::Decimal, ComplexFormat::Cartesian);
    /// assert_eq!(layout,
    ///            Layout::BaselineRelative { base:  Box::new(Layout::string("x")),
    ///                                       index: Box::new(Layout::string("2")), });
    /// assert_eq!(layout.to_string(), "x^2");
    ///
    /// let e = Expr::multiplication(Expr::real(2.0), Expr::addition(Expr::real(3.0), Expr::real(4.0)));
    /// let layout = e.create_layout(FloatDisplayMode::Decimal, ComplexFormat::Cartesian);
    /// assert_eq!(layout.to_string(), "2*(3+4)");
    /// ```
    #[must_use]
    pub fn create_layout(&self,
                         float_display_mode: FloatDisplayMode,
                         complex_format: ComplexFormat)
                         -> Layout {
        assert_resolved(float_display_mode, complex_format);
        self.layout(float_display_mode, complex_format)
    }

    fn precedence(&self, complex_format: ComplexFormat) -> u8 {
        match self {
            Self::Number(c) => number_precedence(*c, complex_format),
            Self::Symbol(_) | Self::Matrix(_) => ATOM,
            Self::Operation(operation) => match operation.operator() {
                Operator::Binary(BinaryOperator::Add | BinaryOperator::Sub) => ADDITIVE,
                Operator::Binary(BinaryOperator::Mul | BinaryOperator::Div) => MULTIPLICATIVE,
                Operator::Binary(BinaryOperator::Pow) => POWER,
                Operator::Unary(UnaryOperator::Negate) => PREFIX,
                Operator::Unary(_) => ATOM,
            },
        }
    }

    fn layout(&self, float_display_mode: FloatDisplayMode, complex_format: ComplexFormat) -> Layout {
        let sub = |e: &Self| e.layout(float_display_mode, complex_format);
        // Wraps `e` when it binds more loosely than `minimum`.
        let grouped = |e: &Self, minimum: u8| {
            if e.precedence(complex_format) < minimum {
                Layout::Parenthesis(Box::new(sub(e)))
            } else {
                sub(e)
            }
        };
        match self {
            Self::Number(c) => number_layout(*c, float_display_mode, complex_format),
            Self::Symbol(name) => Layout::string(name.clone()),
            Self::Matrix(literal) => Layout::Grid(Grid::new(literal.number_of_rows(),
                                                            literal.number_of_columns(),
                                                            literal.entries().iter().map(sub).collect())),
            Self::Operation(operation) => match operation.operator() {
                Operator::Binary(BinaryOperator::Pow) => {
                    let exponent = operation.operand(1);
                    let exponent = if exponent.is_parenthesis() { &exponent.operands()[0] } else { exponent };
                    Layout::BaselineRelative { base:  Box::new(grouped(operation.operand(0), ATOM)),
                                               index: Box::new(sub(exponent)), }
                },
                Operator::Binary(BinaryOperator::Div) => {
                    Layout::Fraction { numerator:   Box::new(sub(operation.operand(0))),
                                       denominator: Box::new(sub(operation.operand(1))), }
                },
                Operator::Binary(op) => {
                    let (left, right) = match op {
                        BinaryOperator::Mul => (MULTIPLICATIVE, PREFIX),
                        _ => (ADDITIVE, MULTIPLICATIVE),
                    };
                    Layout::Horizontal(vec![grouped(operation.operand(0), left),
                                            Layout::String(op.to_string()),
                                            grouped(operation.operand(1), right)])
                },
                Operator::Unary(UnaryOperator::Parenthesis) => {
                    Layout::Parenthesis(Box::new(sub(operation.operand(0))))
                },
                Operator::Unary(UnaryOperator::Negate) => {
                    Layout::Horizontal(vec![Layout::string("-"), grouped(operation.operand(0), PREFIX)])
                },
                Operator::Unary(op) => {
                    let name = op.function_name().unwrap_or_default();
                    Layout::Horizontal(vec![Layout::string(name),
                                            Layout::Parenthesis(Box::new(sub(operation.operand(0))))])
                },
            },
        }
    }
}

impl NumericValue {
    /// Produces the layout of an evaluated result.
    ///
    /// Scalars render as numbers in the selected float and complex formats;
    /// matrices render as a grid of such numbers.
    ///
    /// # Panics
    /// Panics if either mode is its `Default` sentinel.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::{
    ///     preferences::{ComplexFormat, FloatDisplayMode},
    ///     value::{complex::ComplexNumber, core::NumericValue},
    /// };
    ///
    /// let v = NumericValue::Complex(ComplexNumber::new(1.0, -2.0));
    /// let layout = v.create_layout(FloatDisplayMode::Decimal, ComplexFormat::Cartesian);
    /// assert_eq!(layout.to_string(), "1 - 2i");
    ///
    /// let v = NumericValue::Real(1500.0);
    /// let layout = v.create_layout(FloatDisplayMode::Scientific, ComplexFormat::Cartesian);
    /// assert_eq!(layout.to_string(), "1.5e3");
    /// ```
    #[must_use]
    pub fn create_layout(&self,
                         float_display_mode: FloatDisplayMode,
                         complex_format: ComplexFormat)
                         -> Layout {
        assert_resolved(float_display_mode, complex_format);
        match self {
            Self::Real(r) => Layout::String(format_float(*r, float_display_mode)),
            Self::Complex(c) => number_layout(*c, float_display_mode, complex_format),
            Self::Matrix(m) => matrix_layout(m, float_display_mode, complex_format),
        }
    }
}
