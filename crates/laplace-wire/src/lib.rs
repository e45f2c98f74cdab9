//! # laplace-wire
//!
//! Boundary plumbing for the Laplace engine.
//!
//! This crate provides:
//! - The delimited text codec used to pass matrices across a
//!   process/runtime boundary
//! - The entry points an embedding runtime calls: closed-form
//!   determinants and inverses by dimension, and numeric inversion of an
//!   encoded matrix
//!
//! Nothing in here is core algorithm; it exists so the computation crates
//! stay pure while callers on the far side of a string-shaped boundary
//! can still use them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod boundary;
pub mod codec;

pub use boundary::{closed_form_determinant, closed_form_inverse, inverse_from_encoded};
pub use codec::{decode, encode, WireError};
