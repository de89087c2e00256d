//! Shorthands for writing down rational numbers.

/// Shorthand for creating a rational number in tests.
///
/// Panics when the denominator is zero.
#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        $crate::Rational32::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational32::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a rational number in tests.
///
/// Panics when the denominator is zero.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::Rational64::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational64::new($numer, $denom).unwrap()
    };
}
