//! Time utilities: timezone parsing and rendering an instant as local date/time.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AppError::Config(format!("Unknown timezone '{}'", name)))
}

/// Date and wall-clock time of `instant` in `tz`, both derived from the same
/// instant. Sub-second precision is dropped.
pub fn local_stamp(instant: DateTime<Utc>, tz: Tz) -> (NaiveDate, NaiveTime) {
    let local = instant.with_timezone(&tz).naive_local();
    let time = local.time().with_nanosecond(0).unwrap_or(local.time());
    (local.date(), time)
}
