//! Wire date-time representation.
//!
//! Serialized as `YYYY-MM-DDTHH:MM:SS.mmmZ`. Any RFC 3339 value is accepted on
//! input and normalized to UTC. The zero value is `0001-01-01T00:00:00.000Z`;
//! `null` and `""` both read as zero.

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Output layout for wire date-times.
pub const LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

static ZERO: LazyLock<chrono::DateTime<Utc>> = LazyLock::new(|| {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date")
        .and_utc()
});

/// A date-time as carried in API payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<Utc>);

impl DateTime {
    pub fn new(value: chrono::DateTime<Utc>) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(*ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == *ZERO
    }

    pub fn inner(&self) -> chrono::DateTime<Utc> {
        self.0
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(LAYOUT))
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
    type Value = DateTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339 date-time string or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DateTime::zero())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DateTime::zero())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Ok(DateTime::zero());
        }
        chrono::DateTime::parse_from_rfc3339(v)
            .map(|t| DateTime(t.with_timezone(&Utc)))
            .map_err(|e| E::custom(format!("invalid date-time '{v}': {e}")))
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(DateTimeVisitor)
    }
}
