//! # Exact rational numbers
//!
//! Numerator and denominator pairs of fixed size that are always kept in lowest terms, with the
//! sign carried by the numerator. Arithmetic is exact; results that don't fit the integer type are
//! reported as errors instead of wrapping around.
//!
//! ```
//! use relp_rational::Rational32;
//!
//! let half = Rational32::new(2, 4)?;
//! let third = Rational32::new(1, 3)?;
//! assert_eq!(half.checked_add(third)?, Rational32::new(5, 6)?);
//! assert_eq!(half.to_string(), "1/2");
//! # Ok::<(), relp_rational::Arithmetic>(())
//! ```
#![warn(missing_docs)]

pub use data::number_types::integer::SignedPrimitive;
pub use data::number_types::rational::{Decimal, Ratio, Rational128, Rational16, Rational32, Rational64, Rational8};
pub use io::error::{Arithmetic, Parse};

pub mod data;
pub mod io;
