//! # Laplace
//!
//! Closed-form determinants and inverses by first-row cofactor expansion.
//!
//! Laplace runs one recursive cofactor-expansion algorithm over two entry
//! types: symbolic placeholders that build the closed-form expression
//! text for a determinant or inverse, and double-precision values that
//! evaluate the same expansion numerically.
//!
//! ## Quick Start
//!
//! ```rust
//! use laplace::prelude::*;
//!
//! let placeholders = SquareMatrix::placeholders(3).unwrap();
//! let determinant = placeholders.determinant().unwrap();
//! assert!(determinant.as_str().starts_with("(a11*"));
//!
//! let m = SquareMatrix::from_entries(
//!     2,
//!     vec![1.0, 2.0, 3.0, 4.0].into_iter().map(Numeric::new).collect(),
//! )
//! .unwrap();
//! assert_eq!(m.determinant().unwrap().value(), -2.0);
//! ```
//!
//! The expansion is the naive O(n!) one by design: it exists to emit the
//! full closed form, not to invert large matrices quickly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use laplace_algebra as algebra;
pub use laplace_linalg as linalg;
pub use laplace_wire as wire;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use laplace_algebra::{Entry, Numeric, SymExpr};
    pub use laplace_linalg::{LinalgError, SquareMatrix};
    pub use laplace_wire::{
        closed_form_determinant, closed_form_inverse, decode, encode, inverse_from_encoded,
        WireError,
    };
}
