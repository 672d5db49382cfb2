//! Airline code and airline types.

use std::fmt;

/// Error returned when parsing an invalid airline code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airline code: {reason}")]
pub struct InvalidAirlineCode {
    reason: &'static str,
}

/// A valid airline designator.
///
/// Route data carries either 2-character IATA designators (e.g. "BA",
/// "U2") or 3-character ICAO designators (e.g. "BAW") when no IATA code
/// is assigned, so both lengths are accepted. Characters are uppercase
/// ASCII letters or digits.
///
/// # Examples
///
/// ```
/// use flight_server::domain::AirlineCode;
///
/// let ba = AirlineCode::parse("BA").unwrap();
/// assert_eq!(ba.as_str(), "BA");
///
/// let baw = AirlineCode::parse("BAW").unwrap();
/// assert_eq!(baw.as_str(), "BAW");
///
/// assert!(AirlineCode::parse("ba").is_err());
/// assert!(AirlineCode::parse("B").is_err());
/// assert!(AirlineCode::parse("BAWX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirlineCode {
    bytes: [u8; 3],
    len: u8,
}

impl AirlineCode {
    /// Parse an airline code from a string.
    ///
    /// The input must be 2 or 3 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidAirlineCode> {
        let input = s.as_bytes();

        if !(2..=3).contains(&input.len()) {
            return Err(InvalidAirlineCode {
                reason: "must be 2 or 3 characters",
            });
        }

        for &b in input {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidAirlineCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        let mut bytes = [0u8; 3];
        bytes[..input.len()].copy_from_slice(input);

        Ok(AirlineCode {
            bytes,
            len: input.len() as u8,
        })
    }

    /// Parse after trimming whitespace and uppercasing.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidAirlineCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirlineCode({})", self.as_str())
    }
}

impl fmt::Display for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An airline from the carrier table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airline {
    pub code: AirlineCode,
    pub name: String,
    /// Only active carriers participate in the route network.
    pub active: bool,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_airline_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z0-9]{2,3}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_airline_string()) {
            let code = AirlineCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any valid code can be parsed
        #[test]
        fn valid_always_parses(s in valid_airline_string()) {
            prop_assert!(AirlineCode::parse(&s).is_ok());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{2,3}") {
            prop_assert!(AirlineCode::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z0-9]{0,1}|[A-Z0-9]{4,10}") {
            prop_assert!(AirlineCode::parse(&s).is_err());
        }
    }
}
