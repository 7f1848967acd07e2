//! The record stored alongside every key.
//!
//! A [`Payload`] is opaque to the tree: nothing in [`crate::tree`] ever looks inside it. It
//! exists so callers have something concrete to hang off a key, and so rebalancing has a
//! well-defined "zeroed" record to attach when it drops the original data.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::payload::Payload;
//!
//! let payload: Payload = "7 x 2.5".parse().unwrap();
//! assert_eq!(payload, Payload::new(7, 'x', 2.5));
//! assert_eq!(payload.to_string(), "7 x 2.5");
//!
//! // The default payload is the zeroed record.
//! assert_eq!(Payload::default(), Payload::new(0, '\0', 0.0));
//! ```

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

/// A fixed composite of an integer, a character and a floating point value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Payload {
    /// The integer field.
    pub number: i32,
    /// The character field.
    pub letter: char,
    /// The floating point field.
    pub real: f32,
}

impl Payload {
    /// Construct a `Payload` from its three fields.
    pub fn new(number: i32, letter: char, real: f32) -> Self {
        Self {
            number,
            letter,
            real,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.number, self.letter, self.real)
    }
}

/// Why a piece of text couldn't be read as a [`Payload`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParsePayloadError {
    /// The text didn't split into exactly three whitespace separated fields.
    #[error("expected 3 fields (integer, character, float) but found {0}")]
    FieldCount(usize),
    /// The first field wasn't an integer.
    #[error("invalid integer field: {0}")]
    Number(#[from] ParseIntError),
    /// The second field wasn't a single character.
    #[error("invalid character field: {0:?}")]
    Letter(String),
    /// The third field wasn't a float.
    #[error("invalid float field: {0}")]
    Real(#[from] ParseFloatError),
}

impl FromStr for Payload {
    type Err = ParsePayloadError;

    /// Parses `"<integer> <character> <float>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [number, letter, real] = fields[..] else {
            return Err(ParsePayloadError::FieldCount(fields.len()));
        };

        let mut chars = letter.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(ParsePayloadError::Letter(letter.to_string())),
        };

        Ok(Self {
            number: number.parse()?,
            letter,
            real: real.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("1 a 0.5".parse(), Ok(Payload::new(1, 'a', 0.5)));
        assert_eq!("  -3   Z  1e2 ".parse(), Ok(Payload::new(-3, 'Z', 100.0)));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert_eq!(
            "1 a".parse::<Payload>(),
            Err(ParsePayloadError::FieldCount(2))
        );
        assert_eq!("".parse::<Payload>(), Err(ParsePayloadError::FieldCount(0)));
        assert_eq!(
            "1 a 2.0 extra".parse::<Payload>(),
            Err(ParsePayloadError::FieldCount(4))
        );
    }

    #[test]
    fn test_parse_bad_fields() {
        assert!(matches!(
            "x a 0.5".parse::<Payload>(),
            Err(ParsePayloadError::Number(_))
        ));
        assert_eq!(
            "1 ab 0.5".parse::<Payload>(),
            Err(ParsePayloadError::Letter("ab".to_string()))
        );
        assert!(matches!(
            "1 a half".parse::<Payload>(),
            Err(ParsePayloadError::Real(_))
        ));
    }

    #[test]
    fn test_default_is_zeroed() {
        let payload = Payload::default();
        assert_eq!(payload.number, 0);
        assert_eq!(payload.letter, '\0');
        assert_eq!(payload.real, 0.0);
    }
}
