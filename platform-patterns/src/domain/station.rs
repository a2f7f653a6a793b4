//! Station identifier and record types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A valid 12-digit VBB station identifier.
///
/// Station ids are always 12 ASCII digits (e.g. `900000100003` for
/// Alexanderplatz). This type guarantees that any `StationId` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use platform_patterns::domain::StationId;
///
/// let alex = StationId::parse("900000100003").unwrap();
/// assert_eq!(alex.as_str(), "900000100003");
///
/// // Wrong length is rejected
/// assert!(StationId::parse("90000010000").is_err());
///
/// // Non-digits are rejected
/// assert!(StationId::parse("90000010000x").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId([u8; 12]);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be exactly 12 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let bytes = s.as_bytes();

        if bytes.len() != 12 {
            return Err(InvalidStationId {
                reason: "must be exactly 12 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidStationId {
                reason: "must be ASCII digits 0-9",
            });
        }

        let mut id = [0u8; 12];
        id.copy_from_slice(bytes);
        Ok(StationId(id))
    }

    /// Returns true if `s` looks like a station id rather than a search query.
    pub fn is_id(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.as_str())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StationId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A resolved station: the only two fields an entry records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
