//! Square matrices in row-major storage.
//!
//! A matrix owns its backing `Vec<E>`. Minors are always freshly built
//! copies with no link back to their parent; transposition is the only
//! operation that mutates a matrix in place.

use std::fmt;
use std::ops::{Index, IndexMut};

use laplace_algebra::{Entry, SymExpr};

use crate::error::LinalgError;

/// Maps a two-dimensional position into row-major one-dimensional storage.
///
/// `0 <= row, col < dimension` is a caller contract; this function does no
/// bounds checking, and an out-of-range position makes the caller index
/// past the end of the backing slice and panic.
#[inline]
#[must_use]
pub fn linear_index(dimension: usize, row: usize, col: usize) -> usize {
    row * dimension + col
}

/// A square matrix with row-major owned storage.
///
/// The dimension is at least 2 and `entries.len() == dimension * dimension`;
/// both invariants are enforced at construction.
#[derive(Clone, PartialEq, Debug)]
pub struct SquareMatrix<E> {
    dimension: usize,
    entries: Vec<E>,
}

impl<E: Entry> SquareMatrix<E> {
    /// Creates a matrix from row-major entries.
    ///
    /// # Errors
    ///
    /// Returns `DimensionTooSmall` for dimensions below 2 and
    /// `ShapeMismatch` when the entry count is not `dimension²`.
    pub fn from_entries(dimension: usize, entries: Vec<E>) -> Result<Self, LinalgError> {
        if dimension < 2 {
            return Err(LinalgError::DimensionTooSmall {
                required: 2,
                actual: dimension,
            });
        }
        if entries.len() != dimension * dimension {
            return Err(LinalgError::ShapeMismatch {
                dimension,
                entries: entries.len(),
            });
        }
        Ok(Self { dimension, entries })
    }

    /// Creates a matrix from a vector of rows.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` for ragged rows and `DimensionTooSmall`
    /// for fewer than two rows.
    pub fn from_rows(rows: Vec<Vec<E>>) -> Result<Self, LinalgError> {
        let dimension = rows.len();
        // Each row is checked individually: ragged rows whose lengths
        // merely sum to dimension² would otherwise scramble the storage.
        if let Some(row) = rows.iter().find(|row| row.len() != dimension) {
            return Err(LinalgError::ShapeMismatch {
                dimension,
                entries: row.len(),
            });
        }
        let entries: Vec<E> = rows.into_iter().flatten().collect();
        Self::from_entries(dimension, entries)
    }

    /// Returns the dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the row-major entries.
    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&E> {
        if row < self.dimension && col < self.dimension {
            Some(&self.entries[linear_index(self.dimension, row, col)])
        } else {
            None
        }
    }

    /// Builds the minor matrix at (row, col): every entry except those in
    /// the deleted row and column, in their original row-major order.
    ///
    /// The minor is an independent copy owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns `DimensionTooSmall` below dimension 3, since the resulting
    /// minor would fall under the dimension-2 floor. The determinant's
    /// base case guarantees the recursion never asks for one.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, LinalgError> {
        let n = self.dimension;
        if n < 3 {
            return Err(LinalgError::DimensionTooSmall {
                required: 3,
                actual: n,
            });
        }

        let mut entries = Vec::with_capacity((n - 1) * (n - 1));
        for i in 0..n {
            if i == row {
                continue;
            }
            for j in 0..n {
                if j == col {
                    continue;
                }
                entries.push(self.entries[linear_index(n, i, j)].clone());
            }
        }
        Ok(Self {
            dimension: n - 1,
            entries,
        })
    }

    /// Transposes the matrix in place, swapping (i, j) with (j, i) for
    /// every `i <= j`.
    pub fn transpose_in_place(&mut self) {
        let n = self.dimension;
        for i in 0..n {
            for j in i + 1..n {
                self.entries
                    .swap(linear_index(n, i, j), linear_index(n, j, i));
            }
        }
    }
}

impl SquareMatrix<SymExpr> {
    /// Populates a matrix of placeholder symbols `a{row+1}{col+1}`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionTooSmall` for dimensions below 2.
    pub fn placeholders(dimension: usize) -> Result<Self, LinalgError> {
        let entries = (0..dimension)
            .flat_map(|row| (0..dimension).map(move |col| SymExpr::placeholder(row, col)))
            .collect();
        Self::from_entries(dimension, entries)
    }
}

impl<E> Index<(usize, usize)> for SquareMatrix<E> {
    type Output = E;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.entries[linear_index(self.dimension, row, col)]
    }
}

impl<E> IndexMut<(usize, usize)> for SquareMatrix<E> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.entries[linear_index(self.dimension, row, col)]
    }
}

impl<E: Entry> fmt::Display for SquareMatrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                if col > 0 {
                    f.write_str("   ")?;
                }
                write!(f, "{}", self[(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use laplace_algebra::Numeric;

    use super::*;

    fn numeric(rows: &[&[f64]]) -> SquareMatrix<Numeric> {
        SquareMatrix::from_rows(
            rows.iter()
                .map(|row| row.iter().copied().map(Numeric::new).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_linear_index() {
        assert_eq!(linear_index(3, 0, 0), 0);
        assert_eq!(linear_index(3, 1, 2), 5);
        assert_eq!(linear_index(4, 3, 3), 15);
    }

    #[test]
    fn test_from_entries_checks_shape() {
        let err = SquareMatrix::from_entries(3, vec![Numeric::new(1.0); 8]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::ShapeMismatch {
                dimension: 3,
                entries: 8
            }
        );
    }

    #[test]
    fn test_from_entries_checks_dimension_floor() {
        let err = SquareMatrix::from_entries(1, vec![Numeric::new(1.0)]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionTooSmall {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows_with_square_total() {
        // Lengths 2, 4, 3 sum to 9 entries but do not form a 3x3 matrix.
        let rows = vec![
            vec![Numeric::new(1.0); 2],
            vec![Numeric::new(2.0); 4],
            vec![Numeric::new(3.0); 3],
        ];
        let err = SquareMatrix::from_rows(rows).unwrap_err();
        assert_eq!(
            err,
            LinalgError::ShapeMismatch {
                dimension: 3,
                entries: 2
            }
        );
    }

    #[test]
    fn test_get() {
        let m = numeric(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(m.get(1, 0), Some(&Numeric::new(3.0)));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_minor_preserves_row_major_order() {
        let m = numeric(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let minor = m.minor(0, 1).unwrap();
        assert_eq!(minor.dimension(), 2);
        assert_eq!(
            minor.entries(),
            &[
                Numeric::new(4.0),
                Numeric::new(6.0),
                Numeric::new(7.0),
                Numeric::new(9.0)
            ]
        );
    }

    #[test]
    fn test_minor_is_independent_of_parent() {
        let m = numeric(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let mut minor = m.minor(2, 2).unwrap();
        minor[(0, 0)] = Numeric::new(99.0);
        assert_eq!(m[(0, 0)], Numeric::new(1.0));
    }

    #[test]
    fn test_minor_rejects_two_by_two() {
        let m = numeric(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(
            m.minor(0, 0).unwrap_err(),
            LinalgError::DimensionTooSmall {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_transpose_in_place() {
        let mut m = numeric(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        m.transpose_in_place();
        assert_eq!(m, numeric(&[&[1.0, 4.0, 7.0], &[2.0, 5.0, 8.0], &[3.0, 6.0, 9.0]]));
    }

    #[test]
    fn test_placeholders() {
        let m = SquareMatrix::placeholders(2).unwrap();
        assert_eq!(m[(0, 0)].as_str(), "a11");
        assert_eq!(m[(0, 1)].as_str(), "a12");
        assert_eq!(m[(1, 0)].as_str(), "a21");
        assert_eq!(m[(1, 1)].as_str(), "a22");
    }

    #[test]
    fn test_display_pretty_prints_rows() {
        let m = numeric(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(m.to_string(), "1   2\n3   4\n");
    }
}
