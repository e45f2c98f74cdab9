//! Double-precision numeric entries.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::traits::Entry;

/// A double-precision matrix entry.
///
/// This is a thin wrapper around `f64` that implements the `Entry`
/// capability set. Accumulation follows standard IEEE semantics.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Numeric(pub f64);

impl Numeric {
    /// Creates a new numeric entry.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Entry for Numeric {
    fn zero() -> Self {
        Self(0.0)
    }

    // Exact comparison, no epsilon: the singularity check is specified to
    // report "no inverse" only for a determinant of exactly zero.
    #[allow(clippy::float_cmp)]
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display is the shortest round-trippable form, which the
        // text codec relies on.
        write!(f, "{}", self.0)
    }
}

impl Add for Numeric {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Numeric {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Numeric {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Numeric {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Numeric {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Zero for Numeric {
    fn zero() -> Self {
        Self(0.0)
    }

    fn is_zero(&self) -> bool {
        Entry::is_zero(self)
    }
}

impl One for Numeric {
    fn one() -> Self {
        Self(1.0)
    }
}
