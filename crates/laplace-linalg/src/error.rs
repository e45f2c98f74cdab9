//! Error types for matrix construction and cofactor computation.

use thiserror::Error;

/// Errors reported by matrix construction and the cofactor algorithms.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LinalgError {
    /// The operation needs a larger matrix than it was given.
    #[error("matrix dimension {actual} is below the minimum {required} for this operation")]
    DimensionTooSmall {
        /// The smallest dimension the operation supports.
        required: usize,
        /// The dimension that was supplied.
        actual: usize,
    },

    /// The supplied entries cannot fill a square matrix of the claimed
    /// dimension.
    #[error("{entries} entries cannot fill a {dimension}x{dimension} matrix")]
    ShapeMismatch {
        /// The claimed dimension.
        dimension: usize,
        /// The number of entries supplied.
        entries: usize,
    },

    /// The matrix has determinant zero, so no inverse exists.
    #[error("matrix is singular, no inverse exists")]
    Singular,
}
