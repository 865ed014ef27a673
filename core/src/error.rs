//! Error types for rational arithmetic.

use std::fmt;

use crate::numeric::Rational;

/// Categories of rational arithmetic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationalErrorKind {
    /// Construction with a zero denominator
    InvalidDenominator,
    /// Division where the dividend has a zero denominator or the divisor is zero
    NotDivisible,
    /// Inversion of a value whose numerator is zero
    NoInverse,
    /// An intermediate product or sum left the `i64` range (checked operations only)
    Overflow,
}

/// A failed rational operation.
///
/// Every failure still carries the value the operation fell back to, so callers
/// that only want a best-effort result can take it with [`RationalError::fallback`].
/// That value is not meaningful arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct RationalError {
    /// The category of error
    pub kind: RationalErrorKind,
    value: Rational,
}

impl RationalError {
    /// Create a new error carrying a fallback value.
    pub fn new(kind: RationalErrorKind, value: Rational) -> Self {
        Self { kind, value }
    }

    pub fn invalid_denominator() -> Self {
        Self::new(
            RationalErrorKind::InvalidDenominator,
            Rational::new_unchecked(0, 0),
        )
    }

    pub fn not_divisible(dividend: Rational) -> Self {
        Self::new(RationalErrorKind::NotDivisible, dividend)
    }

    pub fn no_inverse(value: Rational) -> Self {
        Self::new(RationalErrorKind::NoInverse, value)
    }

    pub fn overflow() -> Self {
        Self::new(RationalErrorKind::Overflow, Rational::new_unchecked(0, 0))
    }

    /// The value the failed operation returned alongside the error.
    pub fn fallback(&self) -> Rational {
        self.value
    }
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RationalErrorKind::InvalidDenominator => {
                write!(f, "cannot make a rational number with a zero denominator")
            }
            RationalErrorKind::NotDivisible => write!(
                f,
                "{} is not divisible: either its denominator is 0 or the divisor's numerator is 0",
                self.value
            ),
            RationalErrorKind::NoInverse => {
                write!(f, "{} has a zero numerator, so it has no inverse", self.value)
            }
            RationalErrorKind::Overflow => write!(f, "rational arithmetic overflowed i64"),
        }
    }
}

impl std::error::Error for RationalError {}

impl From<RationalError> for String {
    fn from(err: RationalError) -> String {
        err.to_string()
    }
}
