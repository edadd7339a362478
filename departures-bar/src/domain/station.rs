//! Station code types.

use std::fmt;

/// Error returned when a configured station code is not a CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code {code:?}: {reason}")]
pub struct InvalidCrs {
    code: String,
    reason: &'static str,
}

/// A 3-letter CRS (Computer Reservation System) station code.
///
/// Huxley accepts codes in either case, so parsing is case-insensitive and
/// the stored code is always uppercase.
///
/// # Examples
///
/// ```
/// use departures_bar::domain::Crs;
///
/// let pad = Crs::parse("pad").unwrap();
/// assert_eq!(pad.as_str(), "PAD");
///
/// assert!(Crs::parse("PA").is_err());
/// assert!(Crs::parse("P4D").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code, normalising to uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCrs {
                code: s.to_string(),
                reason: "must be exactly 3 letters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(InvalidCrs {
                code: s.to_string(),
                reason: "must contain only the letters A-Z",
            });
        }

        Ok(Crs([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uppercase() {
        assert_eq!(Crs::parse("KGX").unwrap().as_str(), "KGX");
        assert_eq!(Crs::parse("RDG").unwrap().as_str(), "RDG");
    }

    #[test]
    fn lowercase_is_normalised() {
        assert_eq!(Crs::parse("kgx").unwrap(), Crs::parse("KGX").unwrap());
        assert_eq!(Crs::parse("Pad").unwrap().as_str(), "PAD");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(Crs::parse(" EUS\n").unwrap().as_str(), "EUS");
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Crs::parse("").is_err());
        assert!(Crs::parse("KG").is_err());
        assert!(Crs::parse("KGXX").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Crs::parse("K1X").is_err());
        assert!(Crs::parse("K-X").is_err());
        assert!(Crs::parse("KÖX").is_err());
    }

    #[test]
    fn error_names_the_code() {
        let err = Crs::parse("K1X").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station code \"K1X\": must contain only the letters A-Z"
        );
    }

    #[test]
    fn display_and_debug() {
        let crs = Crs::parse("bri").unwrap();
        assert_eq!(format!("{crs}"), "BRI");
        assert_eq!(format!("{crs:?}"), "Crs(BRI)");
    }
}
