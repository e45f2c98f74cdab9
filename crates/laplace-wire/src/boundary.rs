//! Entry points exposed to an embedding runtime.
//!
//! These are the string-in/string-out calls a host makes. Errors never
//! cross the boundary as panics: the closed-form calls report them as
//! `Result`s, and the encoded-inverse call follows the empty-string
//! contract, logging the diagnostic to the error stream instead.

use laplace_algebra::SymExpr;
use laplace_linalg::{LinalgError, SquareMatrix};

use crate::codec::{decode, encode, WireError};

/// Computes the closed-form determinant expression for a placeholder
/// matrix of the given dimension.
///
/// # Errors
///
/// Returns `DimensionTooSmall` below dimension 2.
pub fn closed_form_determinant(dimension: usize) -> Result<String, LinalgError> {
    let matrix = SquareMatrix::placeholders(dimension)?;
    Ok(matrix.determinant()?.to_string())
}

/// Computes the closed-form inverse grid for a placeholder matrix of the
/// given dimension, encoded as wire text.
///
/// Each emitted expression is the transposed signed cofactor; the caller
/// divides every entry by the determinant expression from
/// [`closed_form_determinant`] to obtain the inverse proper.
///
/// # Errors
///
/// Returns `DimensionTooSmall` below dimension 3.
pub fn closed_form_inverse(dimension: usize) -> Result<String, LinalgError> {
    let matrix = SquareMatrix::<SymExpr>::placeholders(dimension)?;
    Ok(encode(&matrix.adjugate()?))
}

/// Inverts an encoded numeric matrix, returning the encoded inverse, or
/// an empty string when decoding fails or the matrix is singular.
#[must_use]
pub fn inverse_from_encoded(input: &str) -> String {
    let result = decode(input).and_then(|matrix| matrix.inverse().map_err(WireError::from));
    match result {
        Ok(inverse) => encode(&inverse),
        Err(error) => {
            tracing::error!(%error, "encoded inverse request failed");
            String::new()
        }
    }
}
