//! Airport code and airport types.

use std::fmt;

use crate::geo::GeoPoint;

/// Error returned when parsing an invalid IATA airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIata {
    reason: &'static str,
}

/// A valid 3-character IATA airport code.
///
/// IATA location codes are 3 uppercase ASCII characters; a handful of
/// regional fields use digits (e.g. some US strips), so alphanumerics are
/// accepted. Any `IataCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_server::domain::IataCode;
///
/// let lhr = IataCode::parse("LHR").unwrap();
/// assert_eq!(lhr.as_str(), "LHR");
///
/// // Lowercase is rejected
/// assert!(IataCode::parse("lhr").is_err());
///
/// // Wrong length is rejected
/// assert!(IataCode::parse("LH").is_err());
/// assert!(IataCode::parse("LHRX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IataCode([u8; 3]);

impl IataCode {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidIata {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(IataCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse after trimming whitespace and uppercasing.
    ///
    /// Convenience for user-supplied input ("lhr " → `LHR`).
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidIata> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IataCode({})", self.as_str())
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated airport: code, descriptive attributes, and position.
///
/// Rows missing the code, city, or name never become `Airport` values;
/// the dataset index enforces that before construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub code: IataCode,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    /// The airport's position on the globe.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Human-readable label used in search results and dropdowns:
    /// `"City, Country (IATA) - Name"`.
    pub fn label(&self) -> String {
        format!(
            "{}, {} ({}) - {}",
            self.city, self.country, self.code, self.name
        )
    }
}
