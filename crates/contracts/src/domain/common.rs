use chrono::{NaiveDate, NaiveDateTime};

/// Calendar date for the built-in record stores.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    ymd(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}
