//! # Rational numbers
//!
//! Exact fractions of fixed size. Values are always in lowest terms and the denominator is always
//! positive, so that each number has exactly one representation.
use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};

use num::{One, ToPrimitive, Zero};
use num::traits::checked_pow;

use crate::data::number_types::integer::{gcd, SignedPrimitive};
use crate::io::error::Arithmetic;

mod macros;
mod ops;

/// Aliased type for the most common sizes.
pub type Rational8 = Ratio<i8>;
/// Aliased type for the most common sizes.
pub type Rational16 = Ratio<i16>;
/// Aliased type for the most common sizes.
pub type Rational32 = Ratio<i32>;
/// Aliased type for the most common sizes.
pub type Rational64 = Ratio<i64>;
/// Aliased type for the most common sizes.
pub type Rational128 = Ratio<i128>;

/// A rational number in lowest terms.
///
/// Invariants:
///
/// * `denominator > 0`
/// * `gcd(|numerator|, denominator) == 1`, in particular, zero is represented as `0 / 1`
///
/// Because the representation is unique, the derived equality and hash agree with equality of the
/// represented values.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ratio<T> {
    numerator: T,
    denominator: T,
}

impl<T: SignedPrimitive> Ratio<T> {
    /// Create a rational number, reduced to lowest terms with a positive denominator.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value.
    /// * `denominator`: Nonzero value, the sign may be negative.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the denominator is zero. `Overflow` if the reduced value doesn't fit.
    /// That happens when the reduced numerator should be `|T::MIN|`, as in `T::MIN / -1`, or when
    /// the reduced denominator would be `|T::MIN|`, as in `1 / T::MIN`.
    pub fn new(numerator: T, denominator: T) -> Result<Self, Arithmetic> {
        if denominator.is_zero() {
            return Err(Arithmetic::DivisionByZero);
        }
        if numerator.is_zero() {
            return Ok(Self::zero());
        }

        let (numerator_magnitude, denominator_magnitude) = (numerator.magnitude(), denominator.magnitude());
        let divisor = gcd(numerator_magnitude, denominator_magnitude);
        let negative = numerator.is_negative() != denominator.is_negative();

        let numerator = T::from_magnitude(negative, numerator_magnitude / divisor)
            .ok_or(Arithmetic::Overflow)?;
        let denominator = T::from_magnitude(false, denominator_magnitude / divisor)
            .ok_or(Arithmetic::Overflow)?;

        Ok(Self { numerator, denominator })
    }

    /// Integer value, as a fraction with denominator `1`.
    pub fn from_integer(value: T) -> Self {
        Self { numerator: value, denominator: T::one() }
    }

    /// Numerator of the reduced fraction, carries the sign.
    pub fn numerator(self) -> T {
        self.numerator
    }

    /// Denominator of the reduced fraction, always positive.
    pub fn denominator(self) -> T {
        self.denominator
    }

    /// Whether the denominator is one.
    pub fn is_integer(self) -> bool {
        self.denominator.is_one()
    }

    /// Whether `x > 0`.
    pub fn is_positive(self) -> bool {
        self.numerator.is_positive()
    }

    /// Whether `x < 0`.
    pub fn is_negative(self) -> bool {
        self.numerator.is_negative()
    }

    /// `-1`, `0` or `1`, depending on the sign of the value.
    pub fn signum(self) -> Self {
        Self::from_integer(self.numerator.signum())
    }

    /// Absolute value.
    ///
    /// # Errors
    ///
    /// `Overflow` if the numerator is `T::MIN`.
    pub fn checked_abs(self) -> Result<Self, Arithmetic> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Integer part, rounding towards zero.
    pub fn to_integer(self) -> T {
        self.numerator / self.denominator
    }

    /// Largest integer not above the value.
    pub fn floor(self) -> T {
        self.numerator.div_floor(&self.denominator)
    }

    /// Smallest integer not below the value.
    pub fn ceil(self) -> T {
        let (quotient, remainder) = self.numerator.div_mod_floor(&self.denominator);
        if remainder.is_zero() {
            quotient
        } else {
            // A nonzero remainder means that the denominator is at least two, so this fits
            quotient + T::one()
        }
    }

    /// Multiplicative inverse, `d / n` for `n / d`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the value is zero. `Overflow` if the numerator is `T::MIN`.
    pub fn recip(self) -> Result<Self, Arithmetic> {
        Self::new(self.denominator, self.numerator)
    }

    /// Raise to an integer power.
    ///
    /// Numerator and denominator are raised exactly, using repeated multiplication. A negative
    /// exponent raises the reciprocal, and `x^0 == 1` for all `x`, including zero.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when raising zero to a negative power, `Overflow` when the result doesn't
    /// fit.
    pub fn pow(self, exponent: i32) -> Result<Self, Arithmetic> {
        let base = if exponent < 0 { self.recip()? } else { self };
        let exponent = exponent.unsigned_abs() as usize;

        let numerator = checked_pow(base.numerator, exponent).ok_or(Arithmetic::Overflow)?;
        let denominator = checked_pow(base.denominator, exponent).ok_or(Arithmetic::Overflow)?;

        Self::new(numerator, denominator)
    }

    /// Approximate decimal value, for display.
    ///
    /// # Example
    ///
    /// ```
    /// # use relp_rational::Rational32;
    /// let value = Rational32::new(-1, 8)?;
    /// assert_eq!(value.decimal().to_string(), "-0.125");
    /// assert_eq!(format!("{:.2}", Rational32::new(2, 3)?.decimal()), "0.67");
    /// # Ok::<(), relp_rational::Arithmetic>(())
    /// ```
    pub fn decimal(self) -> Decimal {
        Decimal(self.to_f64().unwrap_or(f64::NAN))
    }
}

/// Approximate decimal rendering of a rational number.
///
/// Created by [`Ratio::decimal`]. Formatting flags, such as the precision, are passed on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decimal(f64);

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: SignedPrimitive> From<T> for Ratio<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: SignedPrimitive> Default for Ratio<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: SignedPrimitive> Zero for Ratio<T> {
    fn zero() -> Self {
        Self { numerator: T::zero(), denominator: T::one() }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<T: SignedPrimitive> One for Ratio<T> {
    fn one() -> Self {
        Self::from_integer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl<T: SignedPrimitive> PartialOrd for Ratio<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: SignedPrimitive> Ord for Ratio<T> {
    /// Orders by value.
    ///
    /// The result is the sign of `a.n * b.d - b.n * a.d`, but the cross products are never
    /// computed, so this doesn't overflow.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        compare_fractions(self.numerator, self.denominator, other.numerator, other.denominator)
    }
}

/// Compare `a / b` with `c / d`, for positive `b` and `d`.
///
/// Compares the integer parts first. If these are equal, the fractional parts are compared
/// through their reciprocals, which are again fractions with positive denominators.
fn compare_fractions<T: SignedPrimitive>(a: T, b: T, c: T, d: T) -> Ordering {
    debug_assert!(b.is_positive() && d.is_positive());

    let (a_floor, a_remainder) = a.div_mod_floor(&b);
    let (c_floor, c_remainder) = c.div_mod_floor(&d);

    match a_floor.cmp(&c_floor) {
        Ordering::Equal => match (a_remainder.is_zero(), c_remainder.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // a_remainder / b < c_remainder / d if and only if b / a_remainder > d / c_remainder
            (false, false) => compare_fractions(d, c_remainder, b, a_remainder),
        },
        ordering => ordering,
    }
}

impl<T: SignedPrimitive> Display for Ratio<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<T: SignedPrimitive> ToPrimitive for Ratio<T> {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_integer().to_i128()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_integer().to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.numerator.to_f64()? / self.denominator.to_f64()?)
    }
}
