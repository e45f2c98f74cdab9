//! The entry capability trait.
//!
//! Cofactor expansion only ever adds, subtracts, multiplies, and negates
//! matrix entries. Abstracting over exactly that set lets one algorithm
//! serve both numeric evaluation and closed-form text construction.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// A matrix entry usable by the cofactor-expansion algorithms.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - `a - b == a + (-b)`
/// - Multiplication distributes over addition
///
/// Symbolic implementations satisfy these laws up to the arithmetic
/// reading of the text they produce, not up to textual equality.
pub trait Entry:
    Clone
    + Debug
    + Display
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Wraps the entry in an explicit grouping.
    ///
    /// Numeric entries are unaffected; symbolic entries gain one pair of
    /// enclosing parentheses. The determinant applies this to every
    /// completed expansion so nested minors read as atomic factors.
    #[must_use]
    fn grouped(self) -> Self {
        self
    }
}
