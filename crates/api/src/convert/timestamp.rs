//! Domain timestamp <-> wire date-time.
//!
//! An unset domain time is `None`. It maps to the wire zero value and back.
//! A set time at the wire zero instant is the same zero and also comes back
//! as `None`. Set times must lie in years 1..=9999.

use chrono::Datelike;
use preheat_core::error::{CoreError, CoreResult};
use preheat_core::types::Timestamp;

use crate::payload::DateTime;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

fn check_range(value: Timestamp) -> CoreResult<Timestamp> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&value.year()) {
        return Err(CoreError::TimestampOutOfRange(format!(
            "{value} is outside years {MIN_YEAR}..={MAX_YEAR}"
        )));
    }
    Ok(value)
}

pub fn to_wire(value: Option<Timestamp>) -> CoreResult<DateTime> {
    match value {
        None => Ok(DateTime::zero()),
        Some(t) => check_range(t).map(DateTime::new),
    }
}

pub fn to_domain(value: DateTime) -> CoreResult<Option<Timestamp>> {
    if value.is_zero() {
        return Ok(None);
    }
    check_range(value.inner()).map(Some)
}
