//! # Reading rational numbers from text
//!
//! Accepted forms are fractions (`"-3/4"`), integers (`"12"`) and finite decimals (`"-1.25"`).
//! The fraction form is what `Display` writes, so values survive a round trip through text.
use std::convert::TryFrom;
use std::str::FromStr;

use crate::data::number_types::integer::SignedPrimitive;
use crate::data::number_types::rational::Ratio;
use crate::io::error::Parse as ParseError;

impl<T: SignedPrimitive> FromStr for Ratio<T> {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::new("Can't read a rational number from empty text"));
        }

        if let Some(index) = text.find('/') {
            let numerator = parse_integer(&text[..index], "numerator")?;
            let denominator = parse_integer(&text[(index + 1)..], "denominator")?;

            Ratio::new(numerator, denominator)
                .map_err(|error| ParseError::wrap_other(
                    error,
                    format!("Fraction \"{}\" can't be represented", text),
                ))
        } else if text.contains('.') {
            let raw = Raw::try_from(text)?;
            raw.into_ratio()
                .map_err(|error| error.wrap(format!("Failed to read decimal \"{}\"", text)))
        } else {
            parse_integer(text, "integer").map(Ratio::from_integer)
        }
    }
}

fn parse_integer<T: SignedPrimitive>(text: &str, number_part: &str) -> Result<T, ParseError> {
    let text = text.trim();
    text.parse().map_err(|error| ParseError::wrap_other(
        error,
        format!("Failed to parse {} \"{}\"", number_part, text),
    ))
}

/// Decimal number split into its digits and the position of the decimal point.
#[derive(Debug, Eq, PartialEq)]
struct Raw<'a> {
    negative: bool,
    integer_part: &'a str,
    /// Digits after the decimal point, without trailing zeros.
    decimal_part: &'a str,
}

impl<'a> TryFrom<&'a str> for Raw<'a> {
    type Error = ParseError;

    fn try_from(text: &'a str) -> Result<Self, Self::Error> {
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (integer_part, decimal_part) = match unsigned.find('.') {
            Some(index) => (&unsigned[..index], &unsigned[(index + 1)..]),
            None => (unsigned, ""),
        };

        if integer_part.is_empty() && decimal_part.is_empty() {
            return Err(ParseError::new(format!("Decimal \"{}\" has no digits", text)));
        }
        let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if !is_digits(integer_part) || !is_digits(decimal_part) {
            return Err(ParseError::new(format!("Decimal \"{}\" contains a character that is not a digit", text)));
        }

        Ok(Self {
            negative,
            integer_part,
            decimal_part: decimal_part.trim_end_matches('0'),
        })
    }
}

impl<'a> Raw<'a> {
    /// Value `±(integer_part decimal_part) / 10^len(decimal_part)`.
    fn into_ratio<T: SignedPrimitive>(self) -> Result<Ratio<T>, ParseError> {
        let Raw { negative, integer_part, decimal_part } = self;

        let sign = if negative { "-" } else { "" };
        let digits = format!("{}{}{}", sign, integer_part, decimal_part);
        let numerator = if integer_part.is_empty() && decimal_part.is_empty() {
            // Only zeros after the decimal point, as in ".000"
            T::zero()
        } else {
            parse_integer(&digits, "digits")?
        };

        let power_of_ten = format!("1{}", "0".repeat(decimal_part.len()));
        let denominator = parse_integer(&power_of_ten, "power of ten")?;

        Ratio::new(numerator, denominator)
            .map_err(|error| ParseError::wrap_other(error, "Decimal can't be represented"))
    }
}
