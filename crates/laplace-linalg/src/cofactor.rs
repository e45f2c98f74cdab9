//! Determinants and inverses by first-row cofactor expansion.
//!
//! One recursive algorithm serves both entry types: `Numeric` entries
//! evaluate the arithmetic, `SymExpr` entries record it as closed-form
//! text with the same sign and term structure. Repeated minors are
//! recomputed rather than shared between sibling branches, which keeps
//! every intermediate matrix single-owner at O(n!) total cost.

use laplace_algebra::{Entry, Numeric};

use crate::error::LinalgError;
use crate::square_matrix::SquareMatrix;

impl<E: Entry> SquareMatrix<E> {
    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// The base case at dimension 2 is `m00*m11 - m01*m10`; larger
    /// dimensions expand column by column with alternating signs
    /// (`col % 2 == 1` terms are subtracted). Each completed expansion is
    /// grouped, so symbolic results arrive fully parenthesized, e.g.
    /// `(a11*a22 - a12*a21)` at dimension 2.
    ///
    /// # Errors
    ///
    /// Propagates `DimensionTooSmall` from minor extraction; this cannot
    /// occur for a well-formed matrix, whose dimension is at least 2.
    pub fn determinant(&self) -> Result<E, LinalgError> {
        let n = self.dimension();
        if n == 2 {
            let ad = self[(0, 0)].clone() * self[(1, 1)].clone();
            let bc = self[(0, 1)].clone() * self[(1, 0)].clone();
            return Ok((ad - bc).grouped());
        }

        let mut acc = self[(0, 0)].clone() * self.minor(0, 0)?.determinant()?;
        for col in 1..n {
            let term = self[(0, col)].clone() * self.minor(0, col)?.determinant()?;
            acc = if col % 2 == 1 { acc - term } else { acc + term };
        }
        Ok(acc.grouped())
    }

    /// Builds the cofactor matrix: the determinant of the minor at each
    /// position, negated where `row + col` is odd.
    ///
    /// # Errors
    ///
    /// Returns `DimensionTooSmall` below dimension 3; the generalized
    /// routine needs dimension-2 minors to recurse into.
    pub fn cofactor_matrix(&self) -> Result<Self, LinalgError> {
        let n = self.dimension();
        if n < 3 {
            return Err(LinalgError::DimensionTooSmall {
                required: 3,
                actual: n,
            });
        }

        let mut entries = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let mut cofactor = self.minor(row, col)?.determinant()?;
                if (row + col) % 2 == 1 {
                    cofactor = -cofactor;
                }
                entries.push(cofactor);
            }
        }
        Self::from_entries(n, entries)
    }

    /// Builds the adjugate: the transpose of the cofactor matrix.
    ///
    /// For symbolic matrices this is the un-normalized closed-form
    /// inverse; the caller divides each entry by the separately computed
    /// determinant expression. The numeric `inverse` performs that
    /// division itself.
    ///
    /// # Errors
    ///
    /// Returns `DimensionTooSmall` below dimension 3.
    pub fn adjugate(&self) -> Result<Self, LinalgError> {
        let mut adjugate = self.cofactor_matrix()?;
        adjugate.transpose_in_place();
        Ok(adjugate)
    }
}

impl SquareMatrix<Numeric> {
    /// Computes the inverse as the adjugate divided by the determinant.
    ///
    /// Dimension 2 uses the direct `[[d, -b], [-c, a]] / det` form, since
    /// the generalized cofactor routine starts at dimension 3.
    ///
    /// # Errors
    ///
    /// Returns `Singular` when the determinant is exactly zero. The check
    /// applies no epsilon: a nearly singular matrix still inverts, with
    /// the accuracy loss that implies.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        let det = self.determinant()?;
        if det.is_zero() {
            return Err(LinalgError::Singular);
        }

        let n = self.dimension();
        if n == 2 {
            return Self::from_entries(
                2,
                vec![
                    self[(1, 1)] / det,
                    -self[(0, 1)] / det,
                    -self[(1, 0)] / det,
                    self[(0, 0)] / det,
                ],
            );
        }

        let mut entries = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let mut cofactor = self.minor(row, col)?.determinant()?;
                if (row + col) % 2 == 1 {
                    cofactor = -cofactor;
                }
                entries.push(cofactor / det);
            }
        }
        let mut inverse = Self::from_entries(n, entries)?;
        inverse.transpose_in_place();
        Ok(inverse)
    }
}
