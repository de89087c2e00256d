//! # Errors
//!
//! Failing arithmetic and failing to read a number from text.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// An arithmetic operation without a result that can be represented.
///
/// Returned by the constructor of rational numbers and all checked operations on them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Arithmetic {
    /// A denominator would be zero.
    ///
    /// Happens when constructing with a zero denominator, taking the reciprocal of zero, dividing
    /// by zero or raising zero to a negative power.
    DivisionByZero,
    /// The numerator or denominator of the (reduced) result, or an intermediate product, does not
    /// fit the integer type.
    Overflow,
}

impl Display for Arithmetic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Arithmetic::DivisionByZero => f.write_str("division by zero"),
            Arithmetic::Overflow => f.write_str("arithmetic overflow"),
        }
    }
}

impl Error for Arithmetic {}

/// A number could not be read from text.
///
/// Carries a description and possibly the error that caused it.
#[derive(Debug)]
pub struct Parse {
    description: String,
    source: Option<Source>,
}

/// Cause of a parse error.
#[derive(Debug)]
enum Source {
    Parse(Box<Parse>),
    Other(Box<dyn Error + Send + Sync>),
}

impl Parse {
    /// Create a new error without a cause.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None }
    }

    /// Add context to an existing parse error.
    pub fn wrap(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            source: Some(Source::Parse(Box::new(self))),
        }
    }

    /// Wrap another error type, like an integer parsing error, in a parse error.
    pub fn wrap_other(source: impl Error + Send + Sync + 'static, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            source: Some(Source::Other(Box::new(source))),
        }
    }

    /// Description of what went wrong at this level, without the cause.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)?;
        match &self.source {
            Some(Source::Parse(parse)) => write!(f, ": {}", parse),
            Some(Source::Other(other)) => write!(f, ": {}", other),
            None => Ok(()),
        }
    }
}

impl Error for Parse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(Source::Parse(parse)) => Some(&**parse),
            Some(Source::Other(other)) => Some(&**other),
            None => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::error::Error;

    use crate::io::error::{Arithmetic, Parse};

    #[test]
    fn display() {
        assert_eq!(Arithmetic::DivisionByZero.to_string(), "division by zero");
        assert_eq!(Arithmetic::Overflow.to_string(), "arithmetic overflow");

        let error = Parse::wrap_other(Arithmetic::DivisionByZero, "Value \"1/0\" has a zero denominator");
        assert_eq!(error.to_string(), "Value \"1/0\" has a zero denominator: division by zero");

        let error = Parse::new("Empty value").wrap("Could not read rational");
        assert_eq!(error.to_string(), "Could not read rational: Empty value");
        assert_eq!(error.description(), "Could not read rational");
    }

    #[test]
    fn source() {
        let error = Parse::wrap_other(Arithmetic::Overflow, "Too large");
        let source = error.source().and_then(|source| source.downcast_ref::<Arithmetic>());
        assert_eq!(source, Some(&Arithmetic::Overflow));

        assert!(Parse::new("No cause").source().is_none());
    }
}
