//! Symbolic expression entries.
//!
//! A `SymExpr` is a flat piece of expression text plus the precedence of
//! its outermost operator. Arithmetic on `SymExpr` concatenates text
//! instead of evaluating, inserting parentheses only where the reading of
//! the result would otherwise change. Every recursive call of the
//! determinant rebuilds the full text of its subtree, so expression length
//! grows combinatorially with dimension; that is the intended closed-form
//! design, not something to optimize here.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::Entry;

/// Precedence of the outermost operator of an expression.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
enum Precedence {
    /// `a + b` or `a - b`.
    Sum,
    /// `a*b`.
    Product,
    /// A bare symbol or a parenthesized group.
    Atom,
}

/// A closed-form symbolic matrix entry.
///
/// Placeholder entries are named `a{row+1}{col+1}`; composed entries hold
/// the full text of a sub-expression.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SymExpr {
    text: String,
    precedence: Precedence,
}

impl SymExpr {
    /// Creates an atomic symbol.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self {
            text: name.into(),
            precedence: Precedence::Atom,
        }
    }

    /// Creates the placeholder symbol for a zero-based matrix position.
    ///
    /// Labels are 1-based: position `(0, 1)` becomes `a12`.
    #[must_use]
    pub fn placeholder(row: usize, col: usize) -> Self {
        Self::symbol(format!("a{}{}", row + 1, col + 1))
    }

    /// Returns the expression text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the text, parenthesized unless it already binds at least
    /// as tightly as `min`.
    fn fenced(&self, min: Precedence) -> String {
        if self.precedence >= min {
            self.text.clone()
        } else {
            format!("({})", self.text)
        }
    }
}

impl Entry for SymExpr {
    fn zero() -> Self {
        Self::symbol("0")
    }

    fn is_zero(&self) -> bool {
        self.text == "0"
    }

    fn grouped(self) -> Self {
        Self {
            text: format!("({})", self.text),
            precedence: Precedence::Atom,
        }
    }
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Add for SymExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            text: format!(
                "{} + {}",
                self.fenced(Precedence::Sum),
                rhs.fenced(Precedence::Product)
            ),
            precedence: Precedence::Sum,
        }
    }
}

impl Sub for SymExpr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        // The right operand must bind tighter than a sum, otherwise the
        // minus sign would only apply to its first term.
        Self {
            text: format!(
                "{} - {}",
                self.fenced(Precedence::Sum),
                rhs.fenced(Precedence::Product)
            ),
            precedence: Precedence::Sum,
        }
    }
}

impl Mul for SymExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            text: format!(
                "{}*{}",
                self.fenced(Precedence::Product),
                rhs.fenced(Precedence::Product)
            ),
            precedence: Precedence::Product,
        }
    }
}

impl Neg for SymExpr {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            text: format!("-{}", self.fenced(Precedence::Atom)),
            precedence: Precedence::Sum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_labels_are_one_based() {
        assert_eq!(SymExpr::placeholder(0, 0).as_str(), "a11");
        assert_eq!(SymExpr::placeholder(2, 1).as_str(), "a32");
    }

    #[test]
    fn test_product_of_symbols() {
        let p = SymExpr::symbol("x") * SymExpr::symbol("y");
        assert_eq!(p.as_str(), "x*y");
    }

    #[test]
    fn test_two_by_two_template() {
        let ad = SymExpr::placeholder(0, 0) * SymExpr::placeholder(1, 1);
        let bc = SymExpr::placeholder(0, 1) * SymExpr::placeholder(1, 0);
        assert_eq!((ad - bc).grouped().as_str(), "(a11*a22 - a12*a21)");
    }

    #[test]
    fn test_sum_operand_of_product_is_fenced() {
        let sum = SymExpr::symbol("x") + SymExpr::symbol("y");
        let p = SymExpr::symbol("z") * sum;
        assert_eq!(p.as_str(), "z*(x + y)");
    }

    #[test]
    fn test_grouped_factor_keeps_single_parens() {
        let group = (SymExpr::symbol("x") + SymExpr::symbol("y")).grouped();
        let p = SymExpr::symbol("z") * group;
        assert_eq!(p.as_str(), "z*(x + y)");
    }

    #[test]
    fn test_subtracting_a_sum_is_fenced() {
        let sum = SymExpr::symbol("x") + SymExpr::symbol("y");
        let d = SymExpr::symbol("z") - sum;
        assert_eq!(d.as_str(), "z - (x + y)");
    }

    #[test]
    fn test_expressions_are_hashable() {
        let mut seen = std::collections::HashSet::new();
        assert!(seen.insert(SymExpr::placeholder(0, 0)));
        assert!(seen.insert(SymExpr::placeholder(0, 0) * SymExpr::placeholder(1, 1)));
        assert!(!seen.insert(SymExpr::placeholder(0, 0)));
    }

    #[test]
    fn test_negation_of_group() {
        let group = (SymExpr::symbol("x") - SymExpr::symbol("y")).grouped();
        assert_eq!((-group).as_str(), "-(x - y)");
    }
}
