use std::cmp::Ordering;
use std::fmt;
use std::ops;

use num_traits::{One, ToPrimitive, Zero};

use crate::error::RationalError;

// ============================================================================
// Rational Type
// ============================================================================

/// An exact fraction `numerator/denominator` over `i64`.
///
/// Construction keeps the literal numerator and denominator, so `2/-4` prints
/// as `2/-4`. Arithmetic and reduction return fresh values with a non-negative
/// denominator. Products wrap at `i64` width in the plain operations; use the
/// `checked_*` variants to detect overflow.
///
/// A zero denominator can only appear through [`Rational::new_unchecked`] or
/// wrapped overflow. Every operation handles it without panicking. `==` and the
/// comparison operators treat such a value like NaN: it is neither equal to nor
/// ordered against anything. The [`Rational::equal`] and [`Rational::less_than`]
/// methods keep their cross-multiplication answers for it.
#[derive(Debug, Clone, Copy)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

// ============================================================================
// Utility Functions
// ============================================================================

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// Flip both signs when the denominator is negative.
fn sign_normalized(num: i64, denom: i64) -> (i64, i64) {
    if denom < 0 {
        (num.wrapping_neg(), denom.wrapping_neg())
    } else {
        (num, denom)
    }
}

fn checked_sign_normalized(num: i64, denom: i64) -> Option<(i64, i64)> {
    if denom < 0 {
        Some((num.checked_neg()?, denom.checked_neg()?))
    } else {
        Some((num, denom))
    }
}

// ============================================================================
// Construction and Accessors
// ============================================================================

impl Rational {
    /// `0/1`
    pub const ZERO: Rational = Rational::new_unchecked(0, 1);

    /// `1/1`
    pub const ONE: Rational = Rational::new_unchecked(1, 1);

    /// Create a rational, rejecting a zero denominator.
    ///
    /// The value is neither reduced nor sign-normalized.
    pub fn new(numerator: i64, denominator: i64) -> Result<Rational, RationalError> {
        if denominator == 0 {
            tracing::trace!(numerator, "rejected zero denominator");
            return Err(RationalError::invalid_denominator());
        }

        Ok(Rational {
            numerator,
            denominator,
        })
    }

    /// Create a rational without validating the denominator.
    pub const fn new_unchecked(numerator: i64, denominator: i64) -> Rational {
        Rational {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// The numerator and denominator as a pair.
    pub fn split(&self) -> (i64, i64) {
        (self.numerator, self.denominator)
    }

    /// Convert to float (may lose precision)
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Check whether the value is a whole number.
    pub fn is_int(&self) -> bool {
        if self.denominator == 0 {
            return false;
        }
        self.numerator.wrapping_rem(self.denominator) == 0
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::new_unchecked(n, 1)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// ============================================================================
// Reduction
// ============================================================================

impl Rational {
    /// Return an equal value in lowest terms with a non-negative denominator.
    ///
    /// A zero numerator or zero denominator has no usable common divisor, so
    /// such values come back sign-normalized but otherwise unchanged (`0/5`
    /// stays `0/5`).
    pub fn to_lowest_terms(&self) -> Rational {
        let (num, denom) = sign_normalized(self.numerator, self.denominator);

        if num == 0 || denom <= 0 {
            return Rational::new_unchecked(num, denom);
        }

        // g <= denom, so it fits back into i64
        let g = gcd(num.unsigned_abs(), denom.unsigned_abs()) as i64;
        if g > 1 {
            Rational::new_unchecked(num / g, denom / g)
        } else {
            Rational::new_unchecked(num, denom)
        }
    }
}

// ============================================================================
// Equality and Comparison
// ============================================================================

impl Rational {
    /// Exact value equality: `2/4` equals `1/2` and `-1/2` equals `1/-2`.
    pub fn equal(&self, other: &Rational) -> bool {
        let a = self.to_lowest_terms();
        let b = other.to_lowest_terms();

        a.numerator.wrapping_mul(b.denominator) == a.denominator.wrapping_mul(b.numerator)
    }

    /// Strict ordering: a/b < c/d iff ad < cb once both denominators are non-negative.
    ///
    /// When `other` has a zero denominator this falls back to `self < 0` as a
    /// float, which is not a real ordering and must not be relied on for sorting.
    pub fn less_than(&self, other: &Rational) -> bool {
        let (num, denom) = sign_normalized(self.numerator, self.denominator);
        let other = other.to_lowest_terms();

        if other.denominator == 0 {
            return Rational::new_unchecked(num, denom).to_f64() < 0.0;
        }

        num.wrapping_mul(other.denominator) < other.numerator.wrapping_mul(denom)
    }
}

impl Rational {
    fn is_well_formed(&self) -> bool {
        self.denominator != 0
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.is_well_formed() && other.is_well_formed() && self.equal(other)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.is_well_formed() || !other.is_well_formed() {
            return None;
        }

        if self.less_than(other) {
            Some(Ordering::Less)
        } else if other.less_than(self) {
            Some(Ordering::Greater)
        } else if self.equal(other) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Rational {
    /// `num/denom` is exactly one, or gets sign-normalized and reduced.
    fn settle(num: i64, denom: i64) -> Rational {
        if num == denom {
            return Rational::ONE;
        }
        let (num, denom) = sign_normalized(num, denom);
        Rational::new_unchecked(num, denom).to_lowest_terms()
    }

    fn sum_from_parts(num: i64, denom: i64) -> Rational {
        if num == 0 {
            Rational::ZERO
        } else {
            Self::settle(num, denom)
        }
    }

    // A zero product keeps the raw denominator, unlike a zero sum.
    fn product_from_parts(num: i64, denom: i64) -> Rational {
        if num == 0 {
            Rational::new_unchecked(0, denom)
        } else {
            Self::settle(num, denom)
        }
    }

    fn quotient_from_parts(num: i64, denom: i64) -> Result<Rational, RationalError> {
        if num == denom {
            return Ok(Rational::ONE);
        }
        let (num, denom) = sign_normalized(num, denom);
        Ok(Rational::new(num, denom)?.to_lowest_terms())
    }

    /// a/b + c/d = (ad + cb) / bd
    pub fn add(&self, other: &Rational) -> Rational {
        let num = self
            .numerator
            .wrapping_mul(other.denominator)
            .wrapping_add(other.numerator.wrapping_mul(self.denominator));
        let denom = self.denominator.wrapping_mul(other.denominator);

        Self::sum_from_parts(num, denom)
    }

    /// a/b * c/d = ac / bd
    ///
    /// A zero product is returned as `0/bd` rather than `0/1`.
    pub fn multiply(&self, other: &Rational) -> Rational {
        let num = self.numerator.wrapping_mul(other.numerator);
        let denom = self.denominator.wrapping_mul(other.denominator);

        Self::product_from_parts(num, denom)
    }

    /// (a/b) / (c/d) = ad / bc
    pub fn divide(&self, other: &Rational) -> Result<Rational, RationalError> {
        if self.denominator == 0 || other.numerator == 0 {
            tracing::trace!(dividend = %self, divisor = %other, "division rejected");
            return Err(RationalError::not_divisible(*self));
        }

        let denom = self.denominator.wrapping_mul(other.numerator);
        if other.denominator == 0 {
            return Rational::new(0, denom);
        }

        let num = self.numerator.wrapping_mul(other.denominator);
        Self::quotient_from_parts(num, denom)
    }

    /// Swap numerator and denominator. The result is not reduced.
    pub fn invert(&self) -> Result<Rational, RationalError> {
        if self.numerator == 0 {
            tracing::trace!(value = %self, "inversion rejected");
            return Err(RationalError::no_inverse(*self));
        }

        Ok(Rational::new_unchecked(self.denominator, self.numerator))
    }

    /// Addition that fails instead of wrapping on overflow.
    pub fn checked_add(&self, other: &Rational) -> Result<Rational, RationalError> {
        let num = self.numerator.checked_mul(other.denominator).and_then(|x| {
            other
                .numerator
                .checked_mul(self.denominator)
                .and_then(|y| x.checked_add(y))
        });
        let denom = self.denominator.checked_mul(other.denominator);

        match (num, denom) {
            (Some(num), Some(denom)) if checked_sign_normalized(num, denom).is_some() => {
                Ok(Self::sum_from_parts(num, denom))
            }
            _ => Err(Self::overflowed("add", self, other)),
        }
    }

    /// Multiplication that fails instead of wrapping on overflow.
    pub fn checked_multiply(&self, other: &Rational) -> Result<Rational, RationalError> {
        let num = self.numerator.checked_mul(other.numerator);
        let denom = self.denominator.checked_mul(other.denominator);

        match (num, denom) {
            (Some(num), Some(denom)) if checked_sign_normalized(num, denom).is_some() => {
                Ok(Self::product_from_parts(num, denom))
            }
            _ => Err(Self::overflowed("multiply", self, other)),
        }
    }

    /// Division that fails instead of wrapping on overflow.
    pub fn checked_divide(&self, other: &Rational) -> Result<Rational, RationalError> {
        if self.denominator == 0 || other.numerator == 0 {
            tracing::trace!(dividend = %self, divisor = %other, "division rejected");
            return Err(RationalError::not_divisible(*self));
        }

        let denom = self
            .denominator
            .checked_mul(other.numerator)
            .ok_or_else(|| Self::overflowed("divide", self, other))?;
        if other.denominator == 0 {
            return Rational::new(0, denom);
        }

        let num = self
            .numerator
            .checked_mul(other.denominator)
            .ok_or_else(|| Self::overflowed("divide", self, other))?;
        if checked_sign_normalized(num, denom).is_none() {
            return Err(Self::overflowed("divide", self, other));
        }

        Self::quotient_from_parts(num, denom)
    }

    fn overflowed(op: &str, a: &Rational, b: &Rational) -> RationalError {
        tracing::trace!(op, lhs = %a, rhs = %b, "overflow");
        RationalError::overflow()
    }
}

impl ops::Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        Rational::add(&self, &rhs)
    }
}

impl ops::Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        Rational::add(self, rhs)
    }
}

impl ops::Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        self.multiply(&rhs)
    }
}

impl ops::Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        self.multiply(rhs)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::ZERO
    }

    /// Any `0/d` with a non-zero `d`.
    fn is_zero(&self) -> bool {
        self.numerator == 0 && self.denominator != 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::ONE
    }
}

impl ToPrimitive for Rational {
    /// Truncates toward zero; `None` for a zero denominator.
    fn to_i64(&self) -> Option<i64> {
        self.numerator.checked_div(self.denominator)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|n| u64::try_from(n).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}

/// 1/1 + 1/2 + ... + 1/n, or `1/1` when `n <= 1`.
pub fn harmonic_sum(n: i64) -> Rational {
    (2..=n).fold(Rational::ONE, |sum, i| {
        sum.add(&Rational::new_unchecked(1, i))
    })
}
