//! # Integers
//!
//! The fixed size signed integers that serve as numerator and denominator, and the greatest common
//! divisor that keeps rational numbers in lowest terms.
use std::convert::TryFrom;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

use num::{Integer, PrimInt, Signed};
use num::traits::CheckedNeg;

use crate::io::error::Arithmetic;

/// A signed primitive integer that can be used as numerator and denominator.
///
/// On top of the `num` traits, this gives access to the unsigned magnitude of a value. Reduction
/// works on magnitudes, because `|T::MIN|` does not fit `T`.
pub trait SignedPrimitive:
    PrimInt +
    Integer +
    Signed +
    CheckedNeg +
    Hash +
    Debug +
    Display +
    FromStr<Err = ParseIntError> +
    Send +
    Sync +
    'static
{
    /// Unsigned integer of the same width.
    type Magnitude: PrimInt + Debug;

    /// Absolute value, always representable.
    fn magnitude(self) -> Self::Magnitude;

    /// Combine a sign and a magnitude.
    ///
    /// # Return value
    ///
    /// `None` if the value doesn't fit, which happens for magnitudes above `|T::MIN|` and for a
    /// nonnegative value of magnitude `|T::MIN|`.
    fn from_magnitude(negative: bool, magnitude: Self::Magnitude) -> Option<Self>;
}

macro_rules! signed_primitive {
    ($signed:ident, $unsigned:ident) => {
        impl SignedPrimitive for $signed {
            type Magnitude = $unsigned;

            fn magnitude(self) -> Self::Magnitude {
                self.unsigned_abs()
            }

            fn from_magnitude(negative: bool, magnitude: Self::Magnitude) -> Option<Self> {
                if !negative {
                    $signed::try_from(magnitude).ok()
                } else if magnitude == $signed::MIN.unsigned_abs() {
                    Some($signed::MIN)
                } else {
                    $signed::try_from(magnitude).ok().map(|value| -value)
                }
            }
        }
    }
}

signed_primitive!(i8, u8);
signed_primitive!(i16, u16);
signed_primitive!(i32, u32);
signed_primitive!(i64, u64);
signed_primitive!(i128, u128);

/// Greatest common divisor, using Euclid's algorithm.
///
/// See https://en.wikipedia.org/wiki/Greatest_common_divisor#Euclid's_algorithm.
///
/// `gcd(a, 0) == a`, so the result is zero only when both arguments are.
pub fn gcd<U: PrimInt>(mut a: U, mut b: U) -> U {
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }

    a
}

/// Greatest common divisor of the magnitudes of two signed values.
///
/// # Errors
///
/// Overflow when the divisor is `|T::MIN|`, which can only happen when neither argument has
/// another value than `0` or `T::MIN`. When one of the arguments is a denominator, this never
/// happens.
pub fn common_factor<T: SignedPrimitive>(a: T, b: T) -> Result<T, Arithmetic> {
    let divisor = gcd(a.magnitude(), b.magnitude());
    T::from_magnitude(false, divisor).ok_or(Arithmetic::Overflow)
}
