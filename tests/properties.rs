//! Property-based tests of the algebraic laws of rational numbers.
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use num::Zero;
use proptest::prelude::*;

use relp_rational::{Arithmetic, Rational32, Rational64};

/// Values small enough that sums and products of a few of them don't overflow.
fn small() -> impl Strategy<Value = Rational64> {
    (-10_000_i64..=10_000, 1_i64..=10_000, any::<bool>())
        .prop_map(|(numerator, denominator, negative)| {
            let denominator = if negative { -denominator } else { denominator };
            Rational64::new(numerator, denominator).unwrap()
        })
}

/// Values small enough to raise to a power below ten.
fn tiny() -> impl Strategy<Value = Rational64> {
    (-100_i64..=100, 1_i64..=100)
        .prop_map(|(numerator, denominator)| Rational64::new(numerator, denominator).unwrap())
}

fn nonzero_i64() -> impl Strategy<Value = i64> {
    any::<i64>().prop_filter("denominator can't be zero", |value| *value != 0)
}

fn hash_of(value: &Rational64) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn normalized(numerator in any::<i64>(), denominator in nonzero_i64()) {
        match Rational64::new(numerator, denominator) {
            Ok(value) => {
                prop_assert!(value.denominator() > 0);
                prop_assert_eq!(gcd(value.numerator().unsigned_abs(), value.denominator().unsigned_abs()), 1);
                prop_assert_eq!(
                    i128::from(value.numerator()) * i128::from(denominator),
                    i128::from(numerator) * i128::from(value.denominator()),
                );
            },
            Err(error) => {
                prop_assert_eq!(error, Arithmetic::Overflow);
                prop_assert!(numerator == i64::MIN || denominator == i64::MIN);
            },
        }
    }

    #[test]
    fn zero_denominator(numerator in any::<i32>()) {
        prop_assert_eq!(Rational32::new(numerator, 0), Err(Arithmetic::DivisionByZero));
    }

    #[test]
    fn order_matches_cross_multiplication(
        a in any::<i64>(), b in 1..=i64::MAX,
        c in any::<i64>(), d in 1..=i64::MAX,
    ) {
        let left = Rational64::new(a, b).unwrap();
        let right = Rational64::new(c, d).unwrap();

        let expected = (i128::from(a) * i128::from(d)).cmp(&(i128::from(c) * i128::from(b)));
        prop_assert_eq!(left.cmp(&right), expected);
        prop_assert_eq!(left == right, expected.is_eq());
    }

    #[test]
    fn equal_values_hash_equally(value in small(), factor in 1_i64..=1000) {
        let scaled = Rational64::new(value.numerator() * factor, value.denominator() * factor).unwrap();
        prop_assert_eq!(scaled, value);
        prop_assert_eq!(hash_of(&scaled), hash_of(&value));
    }

    #[test]
    fn addition_commutes(a in small(), b in small()) {
        prop_assert_eq!(a.checked_add(b), b.checked_add(a));
    }

    #[test]
    fn multiplication_commutes(a in small(), b in small()) {
        prop_assert_eq!(a.checked_mul(b), b.checked_mul(a));
    }

    #[test]
    fn addition_associates(a in small(), b in small(), c in small()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn distributes(a in small(), b in small(), c in small()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn subtraction_adds_negation(a in small(), b in small()) {
        prop_assert_eq!(a.checked_sub(b), a.checked_add(-b));
    }

    #[test]
    fn additive_inverse(a in small()) {
        prop_assert_eq!(a + (-a), Rational64::new(0, 1).unwrap());
        prop_assert!((a - a).is_zero());
    }

    #[test]
    fn division_multiplies_by_reciprocal(a in small(), b in small()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(a.checked_div(b), a.checked_mul(b.recip().unwrap()));
        prop_assert_eq!((a / b) * b, a);
    }

    #[test]
    fn power_laws(a in tiny(), k in -3_i32..=3, l in -3_i32..=3) {
        prop_assume!(!a.is_zero());
        prop_assert_eq!(a.pow(k).unwrap() * a.pow(l).unwrap(), a.pow(k + l).unwrap());
        prop_assert_eq!(a.pow(-k), a.pow(k).unwrap().recip());
    }

    #[test]
    fn text_round_trip(numerator in any::<i64>(), denominator in 1..=i64::MAX) {
        let value = Rational64::new(numerator, denominator).unwrap();
        prop_assert_eq!(value.to_string().parse::<Rational64>().unwrap(), value);
    }
}
