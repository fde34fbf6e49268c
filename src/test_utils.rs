//! Shared fixtures for unit tests.

use crate::{ComparatorOptions, DateComparator, DateInput, DatePart, DateUsage, DateValue};
use chrono::{NaiveDate, TimeZone, Utc};

pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .try_init();
}

pub fn comparator(parts: Vec<DatePart>, usage: DateUsage) -> DateComparator {
    DateComparator::new(
        None,
        ComparatorOptions::default().with_date_sensitivity(parts).with_date_usage(usage),
    )
}

/// A date built from local wall-clock time
pub fn local_date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateValue {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("invalid fixture date");
    let value = DateValue::from_local(naive);
    assert!(value.is_valid(), "fixture date {naive} does not exist in the local time zone");
    value
}

/// A date built from UTC wall-clock time
pub fn utc_date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateValue {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("invalid fixture date")
        .into()
}

pub fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateInput {
    local_date(year, month, day, hour, minute).into()
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateInput {
    utc_date(year, month, day, hour, minute).into()
}

/// Valid dates covering every weekday, a negative year, a five-digit year
/// and both sides of the epoch
pub fn assorted_dates() -> Vec<DateInput> {
    let mut dates: Vec<DateInput> = (22..=28).map(|day| utc(2020, 3, day, 12, 0)).collect();
    dates.extend([
        utc(-44, 3, 15, 12, 0),
        utc(0, 1, 1, 0, 0),
        utc(12_000, 6, 1, 12, 0),
        utc(1969, 12, 31, 23, 59),
        local(2026, 3, 23, 11, 0),
    ]);
    dates
}
