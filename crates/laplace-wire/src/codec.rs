//! The delimited text codec.
//!
//! Wire format: every entry is followed by a comma, and every row is
//! terminated by a literal newline token followed by a comma, so a 3x3
//! matrix reads `"1,2,3,\n,4,5,6,\n,7,8,9,\n,"`. The newline-marker
//! convention produces empty tokens when splitting on commas; the decoder
//! skips them.

use std::fmt::Write;

use laplace_algebra::{Entry, Numeric};
use laplace_linalg::{LinalgError, SquareMatrix};
use thiserror::Error;

/// Errors reported while decoding wire text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// Input ended without a trailing delimiter.
    #[error("no delimiter found before end of input")]
    MissingDelimiter,

    /// A token could not be parsed as a numeric value.
    #[error("token `{0}` is not a numeric value")]
    InvalidToken(String),

    /// The decoded rows do not form a square matrix.
    #[error("decoded {rows} rows but found a row of {row_len} entries")]
    RaggedRows {
        /// The number of decoded rows.
        rows: usize,
        /// The length of the offending row.
        row_len: usize,
    },

    /// The decoded matrix failed a structural invariant.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

/// Encodes a matrix as delimited wire text.
///
/// Entries print through their `Display` form; for `Numeric` that is the
/// shortest round-trippable representation of the value, so
/// `decode(encode(m)) == m` for finite entries.
#[must_use]
pub fn encode<E: Entry>(matrix: &SquareMatrix<E>) -> String {
    let n = matrix.dimension();
    let mut out = String::new();
    for row in 0..n {
        for col in 0..n {
            let _ = write!(out, "{},", matrix[(row, col)]);
        }
        out.push_str("\n,");
    }
    out
}

/// Decodes wire text into a numeric matrix.
///
/// # Errors
///
/// Returns `MissingDelimiter` when the input does not end with one,
/// `InvalidToken` for unparsable numeric tokens, `RaggedRows` when the
/// rows do not form a square, and a wrapped `LinalgError` when the
/// decoded shape falls below the dimension floor.
pub fn decode(input: &str) -> Result<SquareMatrix<Numeric>, WireError> {
    if !input.ends_with(',') {
        return Err(WireError::MissingDelimiter);
    }

    let mut rows: Vec<Vec<Numeric>> = Vec::new();
    let mut current: Vec<Numeric> = Vec::new();
    for token in input.split(',') {
        match token {
            // Empty tokens fall out of the trailing-delimiter convention.
            "" => {}
            "\n" => rows.push(std::mem::take(&mut current)),
            value => {
                // Tolerate surrounding whitespace the way the original
                // decoder's string-to-double conversion did.
                let parsed: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| WireError::InvalidToken(value.to_owned()))?;
                current.push(Numeric::new(parsed));
            }
        }
    }
    // Entries after the final row marker still belong to a row.
    if !current.is_empty() {
        rows.push(current);
    }

    let dimension = rows.len();
    if let Some(row) = rows.iter().find(|row| row.len() != dimension) {
        return Err(WireError::RaggedRows {
            rows: dimension,
            row_len: row.len(),
        });
    }
    SquareMatrix::from_rows(rows).map_err(WireError::from)
}
