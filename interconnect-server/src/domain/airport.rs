//! Airport code types.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A 3-letter IATA airport code.
///
/// Upstream sources and callers do not agree on casing, so two codes compare
/// equal (and hash identically) when they match ignoring ASCII case. The
/// original spelling is kept and is what `as_str` and `Display` return.
///
/// # Examples
///
/// ```
/// use interconnect_server::domain::AirportCode;
///
/// let dub = AirportCode::parse("DUB").unwrap();
/// let lower = AirportCode::parse("dub").unwrap();
/// assert_eq!(dub, lower);
/// assert_eq!(lower.as_str(), "dub");
///
/// assert!(AirportCode::parse("DU").is_err());
/// assert!(AirportCode::parse("D1B").is_err());
/// ```
#[derive(Clone, Copy)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code: exactly 3 ASCII letters, any case.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(InvalidAirportCode {
                reason: "must be ASCII letters",
            });
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as originally spelled.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Returns the upper-case form used on the wire.
    pub fn canonical(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }

    fn folded(&self) -> [u8; 3] {
        [
            self.0[0].to_ascii_uppercase(),
            self.0[1].to_ascii_uppercase(),
            self.0[2].to_ascii_uppercase(),
        ]
    }
}

impl PartialEq for AirportCode {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for AirportCode {}

impl Hash for AirportCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl PartialOrd for AirportCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AirportCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(&other.folded())
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 3 ASCII letters parse and keep their spelling
        #[test]
        fn roundtrip(s in "[A-Za-z]{3}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Codes differing only in case are equal
        #[test]
        fn case_insensitive(s in "[A-Za-z]{3}") {
            let upper = AirportCode::parse(&s.to_ascii_uppercase()).unwrap();
            let lower = AirportCode::parse(&s.to_ascii_lowercase()).unwrap();
            prop_assert_eq!(upper, lower);
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }
    }
}
