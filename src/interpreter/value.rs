/// Complex number support.
///
/// Defines the `ComplexNumber` scalar with its Cartesian parts, the derived
/// polar view (radius and angle), and the arithmetic the evaluator builds on.
/// Real numbers are the special case of a zero imaginary part.
pub mod complex;
/// The evaluation result type.
///
/// Declares `NumericValue`, the tagged union of real, complex and matrix
/// values that every evaluation step consumes and produces, and `Kind`, its
/// runtime tag.
pub mod core;
/// Dense matrices.
///
/// Defines `Matrix` together with the operations the evaluator consumes:
/// identity construction, dimension queries, product, inverse and
/// entrywise combinators.
pub mod matrix;
