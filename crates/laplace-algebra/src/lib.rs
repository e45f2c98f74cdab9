//! # laplace-algebra
//!
//! Entry types for the Laplace expansion engine.
//!
//! This crate provides:
//! - The `Entry` trait: the minimal algebraic capability set the
//!   cofactor-expansion algorithm needs from a matrix entry
//! - `Numeric`: double-precision entries that evaluate arithmetic
//! - `SymExpr`: symbolic entries that build closed-form expression text
//!
//! The same determinant/inverse algorithm runs over both entry types; the
//! symbolic instantiation mirrors the numeric sign and term structure
//! exactly, so substituting numbers into an emitted expression and
//! evaluating it reproduces the numeric result.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod numeric;
pub mod symbolic;
pub mod traits;

pub use numeric::Numeric;
pub use symbolic::SymExpr;
pub use traits::Entry;
