//! # Arithmetic
//!
//! Checked operations returning a `Result`, and the operator traits built on top of them.
//!
//! The operator traits behave like they do for the integer primitives: when the result can't be
//! represented, they panic.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{One, Zero};
use num::traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub};

use crate::data::number_types::integer::{common_factor, SignedPrimitive};
use crate::data::number_types::rational::Ratio;
use crate::io::error::Arithmetic;

impl<T: SignedPrimitive> Ratio<T> {
    /// Sum of two values.
    ///
    /// # Errors
    ///
    /// `Overflow` if an intermediate value doesn't fit. The common factor of the denominators is
    /// divided out first, which keeps those values small.
    pub fn checked_add(self, rhs: Self) -> Result<Self, Arithmetic> {
        self.combine(rhs, <T as CheckedAdd>::checked_add)
    }

    /// Difference of two values, equal to adding the negation of `rhs`.
    ///
    /// # Errors
    ///
    /// `Overflow` if an intermediate value doesn't fit.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, Arithmetic> {
        self.combine(rhs, <T as CheckedSub>::checked_sub)
    }

    /// Bring both values on a common denominator and combine the numerators.
    ///
    /// `a / b ± c / d = (a * (d / g) ± c * (b / g)) / (b * (d / g))` with `g = gcd(b, d)`.
    fn combine(
        self,
        rhs: Self,
        operation: impl FnOnce(&T, &T) -> Option<T>,
    ) -> Result<Self, Arithmetic> {
        let divisor = common_factor(self.denominator, rhs.denominator)?;
        let left_scale = rhs.denominator / divisor;
        let right_scale = self.denominator / divisor;

        let left = self.numerator.checked_mul(&left_scale).ok_or(Arithmetic::Overflow)?;
        let right = rhs.numerator.checked_mul(&right_scale).ok_or(Arithmetic::Overflow)?;
        let numerator = operation(&left, &right).ok_or(Arithmetic::Overflow)?;
        let denominator = self.denominator.checked_mul(&left_scale).ok_or(Arithmetic::Overflow)?;

        Self::new(numerator, denominator)
    }

    /// Product of two values.
    ///
    /// Factors shared between a numerator and the other denominator are divided out before
    /// multiplying, so this only fails when the reduced product doesn't fit.
    ///
    /// # Errors
    ///
    /// `Overflow` if the product can't be represented.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, Arithmetic> {
        // Both factors are bounded by a denominator, so they always fit
        let left_factor = common_factor(self.numerator, rhs.denominator)?;
        let right_factor = common_factor(rhs.numerator, self.denominator)?;

        let numerator = (self.numerator / left_factor)
            .checked_mul(&(rhs.numerator / right_factor))
            .ok_or(Arithmetic::Overflow)?;
        let denominator = (self.denominator / right_factor)
            .checked_mul(&(rhs.denominator / left_factor))
            .ok_or(Arithmetic::Overflow)?;

        Self::new(numerator, denominator)
    }

    /// Quotient of two values, multiplying by the reciprocal of `rhs`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `rhs` is zero, `Overflow` if the reciprocal of `rhs` or the quotient
    /// can't be represented.
    pub fn checked_div(self, rhs: Self) -> Result<Self, Arithmetic> {
        self.checked_mul(rhs.recip()?)
    }

    /// Negation, `-n / d` for `n / d`.
    ///
    /// # Errors
    ///
    /// `Overflow` if the numerator is `T::MIN`.
    pub fn checked_neg(self) -> Result<Self, Arithmetic> {
        let numerator = self.numerator.checked_neg().ok_or(Arithmetic::Overflow)?;
        Self::new(numerator, self.denominator)
    }
}

macro_rules! binary_operation {
    ($operation:ident, $method:ident, $assign_operation:ident, $assign_method:ident, $checked:ident) => {
        impl<T: SignedPrimitive> $operation for Ratio<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                match Ratio::$checked(self, rhs) {
                    Ok(value) => value,
                    Err(error) => panic!(
                        "attempt to {} {} and {} failed: {}",
                        stringify!($method), self, rhs, error,
                    ),
                }
            }
        }

        impl<'a, T: SignedPrimitive> $operation<&'a Ratio<T>> for Ratio<T> {
            type Output = Self;

            fn $method(self, rhs: &'a Ratio<T>) -> Self::Output {
                $operation::$method(self, *rhs)
            }
        }

        impl<'a, T: SignedPrimitive> $operation<Ratio<T>> for &'a Ratio<T> {
            type Output = Ratio<T>;

            fn $method(self, rhs: Ratio<T>) -> Self::Output {
                $operation::$method(*self, rhs)
            }
        }

        impl<'a, 'b, T: SignedPrimitive> $operation<&'b Ratio<T>> for &'a Ratio<T> {
            type Output = Ratio<T>;

            fn $method(self, rhs: &'b Ratio<T>) -> Self::Output {
                $operation::$method(*self, *rhs)
            }
        }

        impl<T: SignedPrimitive> $assign_operation for Ratio<T> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = $operation::$method(*self, rhs);
            }
        }

        impl<'a, T: SignedPrimitive> $assign_operation<&'a Ratio<T>> for Ratio<T> {
            fn $assign_method(&mut self, rhs: &'a Ratio<T>) {
                *self = $operation::$method(*self, *rhs);
            }
        }
    }
}

binary_operation!(Add, add, AddAssign, add_assign, checked_add);
binary_operation!(Sub, sub, SubAssign, sub_assign, checked_sub);
binary_operation!(Mul, mul, MulAssign, mul_assign, checked_mul);
binary_operation!(Div, div, DivAssign, div_assign, checked_div);

impl<T: SignedPrimitive> Neg for Ratio<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match Ratio::checked_neg(self) {
            Ok(value) => value,
            Err(error) => panic!("attempt to negate {} failed: {}", self, error),
        }
    }
}

impl<'a, T: SignedPrimitive> Neg for &'a Ratio<T> {
    type Output = Ratio<T>;

    fn neg(self) -> Self::Output {
        Neg::neg(*self)
    }
}

impl<T: SignedPrimitive> Sum for Ratio<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, T: SignedPrimitive> Sum<&'a Ratio<T>> for Ratio<T> {
    fn sum<I: Iterator<Item = &'a Ratio<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<T: SignedPrimitive> Product for Ratio<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<'a, T: SignedPrimitive> Product<&'a Ratio<T>> for Ratio<T> {
    fn product<I: Iterator<Item = &'a Ratio<T>>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

macro_rules! checked_operation {
    ($operation:ident, $method:ident) => {
        impl<T: SignedPrimitive> $operation for Ratio<T> {
            fn $method(&self, v: &Self) -> Option<Self> {
                Ratio::$method(*self, *v).ok()
            }
        }
    }
}

checked_operation!(CheckedAdd, checked_add);
checked_operation!(CheckedSub, checked_sub);
checked_operation!(CheckedMul, checked_mul);
checked_operation!(CheckedDiv, checked_div);

impl<T: SignedPrimitive> CheckedNeg for Ratio<T> {
    fn checked_neg(&self) -> Option<Self> {
        Ratio::checked_neg(*self).ok()
    }
}
