//! Linear constraint rows over 0/1 selection variables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single linear constraint: `sum(coeffs[i] * x[i]) {<=, =} rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Short label used in logs ("budget", "quota_GK", "team_ARS").
    pub label: String,
    /// Coefficients for each variable.
    pub coefficients: Vec<Decimal>,
    /// Constraint sense (<=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: Decimal,
}

impl Constraint {
    /// Create a <= constraint.
    #[must_use]
    pub fn leq(label: impl Into<String>, coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            label: label.into(),
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub fn eq(label: impl Into<String>, coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            label: label.into(),
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }

    /// Left-hand side for a 0/1 assignment.
    #[must_use]
    pub fn lhs(&self, selected: &[bool]) -> Decimal {
        self.coefficients
            .iter()
            .zip(selected)
            .filter(|(_, on)| **on)
            .map(|(c, _)| *c)
            .sum()
    }

    /// Return `true` if the 0/1 assignment satisfies this row.
    #[must_use]
    pub fn is_satisfied(&self, selected: &[bool]) -> bool {
        let lhs = self.lhs(selected);
        match self.sense {
            ConstraintSense::LessEqual => lhs <= self.rhs,
            ConstraintSense::Equal => lhs == self.rhs,
        }
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn evaluates_each_sense() {
        let coeffs = vec![dec!(1), dec!(2), dec!(3)];
        let pick = [true, false, true];

        assert_eq!(Constraint::leq("a", coeffs.clone(), dec!(4)).lhs(&pick), dec!(4));
        assert!(Constraint::leq("a", coeffs.clone(), dec!(4)).is_satisfied(&pick));
        assert!(!Constraint::leq("a", coeffs.clone(), dec!(3.9)).is_satisfied(&pick));
        assert!(Constraint::eq("b", coeffs.clone(), dec!(4)).is_satisfied(&pick));
        assert!(!Constraint::eq("b", coeffs, dec!(5)).is_satisfied(&pick));
    }
}
