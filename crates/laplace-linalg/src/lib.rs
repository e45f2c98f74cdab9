//! # laplace-linalg
//!
//! Square matrices and first-row cofactor expansion for the Laplace
//! engine.
//!
//! This crate provides:
//! - `SquareMatrix<E>`: row-major owned storage, generic over any
//!   `laplace_algebra::Entry`
//! - Minor extraction and in-place transposition
//! - The recursive determinant, cofactor matrix, and adjugate
//! - The numeric inverse (adjugate over determinant)
//!
//! ## Cost model
//!
//! The determinant is the naive O(n!) expansion along the first row, with
//! no memoization of repeated minors. Recursion depth equals the matrix
//! dimension. Symbolic closed forms stay practical up to roughly
//! dimension 6-8; pure numeric evaluation goes somewhat higher. Callers
//! needing large or numerically delicate inverses want an LU/QR
//! factorization, which this crate deliberately does not provide.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod square_matrix;

mod cofactor;

pub use error::LinalgError;
pub use square_matrix::{linear_index, SquareMatrix};

#[cfg(test)]
mod proptests;
