use std::fmt::Display;

use crate::interpreter::value::complex::ComplexNumber;

/// Operators taking two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`; the matrix product when both sides are matrices.
    Mul,
    /// `a / b`
    Div,
    /// `a ^ b`
    Pow,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{s}")
    }
}

/// Operators taking a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-a`
    Negate,
    /// `(a)`. Numerically transparent; kept in the tree for layout.
    Parenthesis,
    /// `sin(a)`
    Sin,
    /// `cos(a)`
    Cos,
}

impl UnaryOperator {
    /// Returns the function name for operators written in call syntax.
    #[must_use]
    pub const fn function_name(self) -> Option<&'static str> {
        match self {
            Self::Sin => Some("sin"),
            Self::Cos => Some("cos"),
            Self::Negate | Self::Parenthesis => None,
        }
    }

    /// Looks up an operator written in call syntax by its name.
    #[must_use]
    pub fn from_function_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            _ => None,
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Negate => "-",
            Self::Parenthesis => "()",
            Self::Sin => "sin",
            Self::Cos => "cos",
        };
        write!(f, "{s}")
    }
}

/// The closed set of operator tags an expression node can carry.
///
/// Each operator has a fixed arity, see [`Operator::arity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Self::Binary(op)
    }
}

impl From<UnaryOperator> for Operator {
    fn from(op: UnaryOperator) -> Self {
        Self::Unary(op)
    }
}

impl Operator {
    /// Number of operands every node with this operator owns.
    ///
    /// # Example
    /// ```
    /// use calcore::ast::{BinaryOperator, Operator, UnaryOperator};
    ///
    /// assert_eq!(Operator::from(BinaryOperator::Pow).arity(), 2);
    /// assert_eq!(Operator::from(UnaryOperator::Parenthesis).arity(), 1);
    /// ```
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Binary(_) => 2,
            Self::Unary(_) => 1,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(op) => write!(f, "{op}"),
            Self::Unary(op) => write!(f, "{op}"),
        }
    }
}

/// An operator node together with the operands it exclusively owns.
///
/// The operand count always equals the operator's arity; the fields are
/// private so the only ways in are [`Operation::new`] and
/// [`Expr::clone_with_operands`], both of which check it.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    op:       Operator,
    operands: Vec<Expr>,
}

impl Operation {
    /// Creates an operation node.
    ///
    /// # Panics
    /// Panics if `operands.len()` differs from `op.arity()`. A wrong arity is
    /// a programming error upstream, never a user error.
    #[must_use]
    pub fn new(op: Operator, operands: Vec<Expr>) -> Self {
        assert_eq!(operands.len(),
                   op.arity(),
                   "operator {op:?} takes {} operands",
                   op.arity());
        Self { op, operands }
    }

    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.op
    }

    #[must_use]
    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }

    /// Returns the operand at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below the operator's arity.
    #[must_use]
    pub fn operand(&self, index: usize) -> &Expr {
        &self.operands[index]
    }
}

/// A matrix written out in an expression, with one owned node per entry.
///
/// Invariant: `rows >= 1`, `columns >= 1`, `entries.len() == rows * columns`,
/// entries in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixLiteral {
    rows:    usize,
    columns: usize,
    entries: Vec<Expr>,
}

impl MatrixLiteral {
    /// # Panics
    /// Panics if a dimension is zero or the entry count does not match.
    #[must_use]
    pub fn new(rows: usize, columns: usize, entries: Vec<Expr>) -> Self {
        assert!(rows >= 1 && columns >= 1, "matrix dimensions must be at least 1x1");
        assert_eq!(entries.len(),
                   rows * columns,
                   "matrix of {rows}x{columns} needs {} entries",
                   rows * columns);
        Self { rows,
               columns,
               entries }
    }

    #[must_use]
    pub const fn number_of_rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn number_of_columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn entries(&self) -> &[Expr] {
        &self.entries
    }
}

/// A node of an expression tree.
///
/// The tree is strictly hierarchical: each node owns its children and no node
/// is shared. Cloning deep-copies the whole subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(ComplexNumber),
    /// A name resolved through the evaluation context.
    Symbol(String),
    /// A matrix literal.
    Matrix(MatrixLiteral),
    /// An operator applied to its operands.
    Operation(Operation),
}

impl From<ComplexNumber> for Expr {
    fn from(value: ComplexNumber) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(ComplexNumber::float(value))
    }
}

impl Expr {
    /// A real literal.
    #[must_use]
    pub const fn real(value: f64) -> Self {
        Self::Number(ComplexNumber::float(value))
    }

    /// A complex literal `a + bi`.
    #[must_use]
    pub const fn complex(a: f64, b: f64) -> Self {
        Self::Number(ComplexNumber::new(a, b))
    }

    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Builds a matrix literal of real entries from nested rows.
    ///
    /// # Panics
    /// Panics if `rows` is empty or ragged.
    #[must_use]
    pub fn real_matrix<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        let entries = rows.iter()
                          .flat_map(|row| {
                              let row = row.as_ref();
                              assert_eq!(row.len(), columns, "ragged matrix rows");
                              row.iter().copied().map(Self::real)
                          })
                          .collect();
        Self::Matrix(MatrixLiteral::new(rows.len(), columns, entries))
    }

    /// Applies `op` to `operands`.
    ///
    /// # Panics
    /// Panics on an arity mismatch, see [`Operation::new`].
    #[must_use]
    pub fn operation(op: impl Into<Operator>, operands: Vec<Self>) -> Self {
        Self::Operation(Operation::new(op.into(), operands))
    }

    /// `base ^ exponent`
    ///
    /// # Example
    /// ```
    /// use calcore::ast::{BinaryOperator, Expr, Operator};
    ///
    /// let e = Expr::power(Expr::real(2.0), Expr::real(3.0));
    /// assert_eq!(e.operator(), Some(Operator::Binary(BinaryOperator::Pow)));
    /// assert_eq!(e.operands().len(), 2);
    /// ```
    #[must_use]
    pub fn power(base: Self, exponent: Self) -> Self {
        Self::operation(BinaryOperator::Pow, vec![base, exponent])
    }

    #[must_use]
    pub fn addition(left: Self, right: Self) -> Self {
        Self::operation(BinaryOperator::Add, vec![left, right])
    }

    #[must_use]
    pub fn subtraction(left: Self, right: Self) -> Self {
        Self::operation(BinaryOperator::Sub, vec![left, right])
    }

    #[must_use]
    pub fn multiplication(left: Self, right: Self) -> Self {
        Self::operation(BinaryOperator::Mul, vec![left, right])
    }

    #[must_use]
    pub fn division(left: Self, right: Self) -> Self {
        Self::operation(BinaryOperator::Div, vec![left, right])
    }

    #[must_use]
    pub fn opposite(operand: Self) -> Self {
        Self::operation(UnaryOperator::Negate, vec![operand])
    }

    #[must_use]
    pub fn parenthesis(operand: Self) -> Self {
        Self::operation(UnaryOperator::Parenthesis, vec![operand])
    }

    /// The operator of an operation node; `None` for leaves.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Operation(operation) => Some(operation.op),
            _ => None,
        }
    }

    /// The children of this node in order. Leaves other than matrix literals
    /// have none; a matrix literal's children are its entries.
    #[must_use]
    pub fn operands(&self) -> &[Self] {
        match self {
            Self::Number(_) | Self::Symbol(_) => &[],
            Self::Matrix(matrix) => &matrix.entries,
            Self::Operation(operation) => &operation.operands,
        }
    }

    /// Returns `true` if this node is a grouping parenthesis.
    #[must_use]
    pub const fn is_parenthesis(&self) -> bool {
        matches!(self.operator(), Some(Operator::Unary(UnaryOperator::Parenthesis)))
    }

    /// Produces a node identical to `self` but owning `operands` instead of
    /// the current children.
    ///
    /// # Panics
    /// Panics if `operands.len()` differs from the number of children `self`
    /// has (the operator's arity, the entry count of a matrix literal, zero
    /// for other leaves).
    ///
    /// # Example
    /// ```
    /// use calcore::ast::Expr;
    ///
    /// let e = Expr::power(Expr::real(2.0), Expr::real(3.0));
    /// let swapped = e.clone_with_operands(vec![Expr::real(3.0), Expr::real(2.0)]);
    /// assert_eq!(swapped, Expr::power(Expr::real(3.0), Expr::real(2.0)));
    /// ```
    #[must_use]
    pub fn clone_with_operands(&self, operands: Vec<Self>) -> Self {
        assert_eq!(operands.len(),
                   self.operands().len(),
                   "clone_with_operands: wrong number of operands");
        match self {
            Self::Number(_) | Self::Symbol(_) => self.clone(),
            Self::Matrix(matrix) => {
                Self::Matrix(MatrixLiteral::new(matrix.rows, matrix.columns, operands))
            },
            Self::Operation(operation) => Self::operation(operation.op, operands),
        }
    }
}
