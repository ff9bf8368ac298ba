// Timestamp handling for the Formdesk API
//
// The service does not use RFC 3339; every timestamp on the wire is a
// string in the fixed layout "2015-09-18 16:21:39 +0000 UTC". The layout
// is an interoperability requirement and must be preserved exactly.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// strftime layout of timestamps on the wire
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z UTC";

/// A date-time value carried in the service's fixed textual layout.
///
/// Wraps a `chrono::DateTime<Utc>`; the custom serde implementations only
/// change the textual representation. Sub-second precision is not
/// representable in the layout and is dropped on serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// The current time
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let parsed = DateTime::parse_from_str(&text, TIMESTAMP_FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid timestamp {text:?}: {e}")))?;
        Ok(Self(parsed.with_timezone(&Utc)))
    }
}
