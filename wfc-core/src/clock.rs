use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};

use crate::error::{Result, WfcError};

/// Local wall clock, falling back to UTC when the offset can't be determined.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// `YYYYMMDD`, used for the chunk output directory.
pub fn date_stamp(date: Date) -> Result<String> {
    date.format(format_description!("[year][month][day]"))
        .map_err(|e| WfcError::Format(format!("date stamp: {e}")))
}

/// `HHMMSS`, used in the report file name.
pub fn time_stamp(t: Time) -> Result<String> {
    t.format(format_description!("[hour][minute][second]"))
        .map_err(|e| WfcError::Format(format!("time stamp: {e}")))
}
