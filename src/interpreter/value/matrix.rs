use std::fmt::Display;

use crate::interpreter::value::complex::{ComplexNumber, ONE, ZERO};

/// A dense, row-major matrix of complex entries.
///
/// Invariant: `rows >= 1`, `columns >= 1` and
/// `entries.len() == rows * columns`. Every constructor enforces it, and no
/// method hands out mutable access to the entries, so it holds for the whole
/// lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows:    usize,
    columns: usize,
    entries: Vec<ComplexNumber>,
}

impl Matrix {
    /// Builds a matrix from row-major entries.
    ///
    /// # Panics
    /// Panics if either dimension is zero or if the number of entries does
    /// not equal `rows * columns`.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::{complex::ComplexNumber, matrix::Matrix};
    ///
    /// let m = Matrix::new(1, 2, vec![ComplexNumber::float(1.0), ComplexNumber::float(2.0)]);
    /// assert_eq!(m.number_of_rows(), 1);
    /// assert_eq!(m.number_of_columns(), 2);
    /// ```
    #[must_use]
    pub fn new(rows: usize, columns: usize, entries: Vec<ComplexNumber>) -> Self {
        assert!(rows >= 1 && columns >= 1, "matrix dimensions must be at least 1x1");
        assert_eq!(entries.len(),
                   rows * columns,
                   "matrix of {rows}x{columns} needs {} entries",
                   rows * columns);
        Self { rows,
               columns,
               entries }
    }

    /// Builds a matrix of real entries from nested rows.
    ///
    /// # Panics
    /// Panics if `rows` is empty or ragged.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::matrix::Matrix;
    ///
    /// let m = Matrix::from_real_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.get(1, 0).real, 3.0);
    /// ```
    #[must_use]
    pub fn from_real_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        let entries = rows.iter()
                          .flat_map(|row| {
                              let row = row.as_ref();
                              assert_eq!(row.len(), columns, "ragged matrix rows");
                              row.iter().copied().map(ComplexNumber::float)
                          })
                          .collect();
        Self::new(rows.len(), columns, entries)
    }

    /// Builds the `n`×`n` identity matrix.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::matrix::Matrix;
    ///
    /// let id = Matrix::identity(2);
    /// assert_eq!(id, Matrix::from_real_rows(&[[1.0, 0.0], [0.0, 1.0]]));
    /// ```
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let entries = (0..n * n).map(|index| if index / n == index % n { ONE } else { ZERO })
                                .collect();
        Self::new(n, n, entries)
    }

    #[must_use]
    pub const fn number_of_rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn number_of_columns(&self) -> usize {
        self.columns
    }

    /// Row-major view of the entries.
    #[must_use]
    pub fn entries(&self) -> &[ComplexNumber] {
        &self.entries
    }

    /// Returns the entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if the position is outside the matrix.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> ComplexNumber {
        assert!(i < self.rows && j < self.columns, "matrix index ({i}, {j}) out of bounds");
        self.entries[i * self.columns + j]
    }

    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    #[must_use]
    pub const fn same_dimensions(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns
    }

    /// Applies `f` to every entry, producing a new matrix of the same shape.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
        where F: Fn(ComplexNumber) -> ComplexNumber
    {
        Self { rows:    self.rows,
               columns: self.columns,
               entries: self.entries.iter().copied().map(f).collect(), }
    }

    /// Combines two matrices of identical shape entry by entry.
    ///
    /// Returns `None` when the shapes differ.
    #[must_use]
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Option<Self>
        where F: Fn(ComplexNumber, ComplexNumber) -> ComplexNumber
    {
        if !self.same_dimensions(other) {
            return None;
        }
        Some(Self { rows:    self.rows,
                    columns: self.columns,
                    entries: self.entries
                                 .iter()
                                 .zip(&other.entries)
                                 .map(|(a, b)| f(*a, *b))
                                 .collect(), })
    }

    /// Multiplies every entry by a scalar.
    #[must_use]
    pub fn scale(&self, factor: ComplexNumber) -> Self {
        self.map(|entry| entry * factor)
    }

    /// Computes the matrix product `self · other`.
    ///
    /// Returns `None` when the number of columns of `self` differs from the
    /// number of rows of `other`.
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::matrix::Matrix;
    ///
    /// let a = Matrix::from_real_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::from_real_rows(&[[0.0, 1.0], [1.0, 0.0]]);
    /// let product = a.multiply(&b).unwrap();
    /// assert_eq!(product, Matrix::from_real_rows(&[[2.0, 1.0], [4.0, 3.0]]));
    ///
    /// let column = Matrix::from_real_rows(&[[1.0], [1.0], [1.0]]);
    /// assert!(a.multiply(&column).is_none());
    /// ```
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Option<Self> {
        if self.columns != other.rows {
            return None;
        }

        let mut entries = Vec::with_capacity(self.rows * other.columns);
        for i in 0..self.rows {
            for j in 0..other.columns {
                let mut sum = ZERO;
                for k in 0..self.columns {
                    sum += self.get(i, k) * other.get(k, j);
                }
                entries.push(sum);
            }
        }

        Some(Self::new(self.rows, other.columns, entries))
    }

    /// Computes the inverse with Gauss–Jordan elimination and partial
    /// pivoting.
    ///
    /// Returns `None` for non-square matrices and for singular matrices (a
    /// pivot column that is exactly zero).
    ///
    /// # Example
    /// ```
    /// use calcore::interpreter::value::matrix::Matrix;
    ///
    /// let m = Matrix::from_real_rows(&[[2.0, 0.0], [0.0, 4.0]]);
    /// let inverse = m.inverse().unwrap();
    /// assert_eq!(inverse, Matrix::from_real_rows(&[[0.5, 0.0], [0.0, 0.25]]));
    ///
    /// let singular = Matrix::from_real_rows(&[[1.0, 2.0], [2.0, 4.0]]);
    /// assert!(singular.inverse().is_none());
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_square() {
            return None;
        }

        let n = self.rows;
        let width = 2 * n;
        // Augmented [self | I], reduced in place to [I | self⁻¹].
        let mut augmented: Vec<ComplexNumber> = Vec::with_capacity(n * width);
        for i in 0..n {
            augmented.extend_from_slice(&self.entries[i * n..(i + 1) * n]);
            augmented.extend((0..n).map(|j| if i == j { ONE } else { ZERO }));
        }

        for column in 0..n {
            let pivot_row = (column..n).max_by(|&x, &y| {
                                           let rx = augmented[x * width + column].r();
                                           let ry = augmented[y * width + column].r();
                                           rx.total_cmp(&ry)
                                       })?;
            if augmented[pivot_row * width + column].r() == 0.0 {
                return None;
            }
            if pivot_row != column {
                for j in 0..width {
                    augmented.swap(pivot_row * width + j, column * width + j);
                }
            }

            let pivot = augmented[column * width + column];
            for j in 0..width {
                augmented[column * width + j] = augmented[column * width + j] / pivot;
            }

            for row in 0..n {
                if row == column {
                    continue;
                }
                let factor = augmented[row * width + column];
                if factor == ZERO {
                    continue;
                }
                for j in 0..width {
                    let delta = factor * augmented[column * width + j];
                    augmented[row * width + j] -= delta;
                }
            }
        }

        let entries = (0..n).flat_map(|i| augmented[i * width + n..(i + 1) * width].to_vec())
                            .collect();
        Some(Self::new(n, n, entries))
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.entries.chunks(self.columns).enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "[")?;
            for (j, entry) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{entry}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
