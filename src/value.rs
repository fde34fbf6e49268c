use crate::consts::{
    ABSENT_TEXT, ARRAY_TEXT_SEPARATOR, INVALID_DATE_TEXT, LOCAL_DATE_TEXT_PREFIX,
    MAX_TIMESTAMP_MILLIS, MILLIS_PER_SECOND, NANOS_PER_MILLI, NULL_TEXT, OBJECT_TEXT,
};
use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc};
use std::borrow::Cow;
use std::fmt;

/// A date/time value that either resolves to a real instant or is invalid.
///
/// Valid values have millisecond precision, lie within
/// [`MAX_TIMESTAMP_MILLIS`] of the Unix epoch and are representable by chrono.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateValue(Option<DateTime<Utc>>);

impl DateValue {
    /// A date that does not represent any instant
    pub const fn invalid() -> Self {
        Self(None)
    }

    /// Creates a date from milliseconds since the Unix epoch.
    /// Out-of-range timestamps yield an invalid date.
    pub fn from_timestamp_millis(millis: i64) -> Self {
        if !(-MAX_TIMESTAMP_MILLIS..=MAX_TIMESTAMP_MILLIS).contains(&millis) {
            return Self::invalid();
        }
        Self(DateTime::from_timestamp_millis(millis))
    }

    /// Interprets a wall-clock date/time in the local time zone.
    ///
    /// A wall-clock time skipped by a DST transition yields an invalid date;
    /// one repeated by a transition resolves to its earlier instant.
    pub fn from_local(naive: NaiveDateTime) -> Self {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map_or_else(Self::invalid, Self::from)
    }

    /// Returns true if this value resolves to an instant
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Milliseconds since the Unix epoch, if valid
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.map(|dt| dt.timestamp_millis())
    }

    /// The UTC view of this value
    pub const fn utc(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// The local-time-zone view of this value
    pub fn local(&self) -> Option<DateTime<Local>> {
        self.0.map(|dt| dt.with_timezone(&Local))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateValue {
    fn from(dt: DateTime<Tz>) -> Self {
        // truncates to millisecond precision
        Self::from_timestamp_millis(dt.timestamp_millis())
    }
}

/// Renders `Local YYYY-MM-DDTHH:MM:SS.mmm±hh:mm` in local time, or `Invalid Date`.
///
/// The leading token keeps every valid date between `Invalid Date` and
/// `null` in text order, whatever the date.
impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(dt) = self.local() else {
            return f.write_str(INVALID_DATE_TEXT);
        };

        write!(f, "{LOCAL_DATE_TEXT_PREFIX} ")?;
        let year = dt.year();
        if year < 0 {
            write!(f, "-{:04}", year.unsigned_abs())?;
        } else {
            write!(f, "{year:04}")?;
        }

        let millis = (dt.nanosecond() / NANOS_PER_MILLI) % MILLIS_PER_SECOND;
        let offset = dt.offset().local_minus_utc();
        let sign = if offset < 0 { '-' } else { '+' };
        let offset = offset.unsigned_abs();
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}.{millis:03}{sign}{:02}:{:02}",
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            offset / 3600,
            (offset % 3600) / 60
        )
    }
}

/// Anything that can be handed to a comparator.
///
/// Only [`DateInput::Date`] with a valid [`DateValue`] takes part in
/// component-wise comparison; every other input is ordered by its canonical
/// text (see [`DateInput::text`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DateInput {
    /// No value supplied
    #[default]
    Absent,
    /// An explicit null
    Null,
    /// A date value, valid or not
    Date(DateValue),
    /// Any other value, carried as its canonical text
    Other(String),
}

impl DateInput {
    /// Returns the instant if this input is a valid date
    pub const fn valid_date(&self) -> Option<&DateValue> {
        match self {
            Self::Date(value) if value.is_valid() => Some(value),
            _ => None,
        }
    }

    /// Canonical text used to order inputs that are not both valid dates
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Absent => Cow::Borrowed(ABSENT_TEXT),
            Self::Null => Cow::Borrowed(NULL_TEXT),
            Self::Date(value) => Cow::Owned(value.to_string()),
            Self::Other(text) => Cow::Borrowed(text),
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl From<DateValue> for DateInput {
    fn from(value: DateValue) -> Self {
        Self::Date(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Date(dt.into())
    }
}

/// `None` is an absent input.
impl<T: Into<Self>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Other(text)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Other(text.to_owned())
    }
}

impl From<bool> for DateInput {
    fn from(value: bool) -> Self {
        Self::Other(value.to_string())
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Other(value.to_string())
    }
}

impl From<f64> for DateInput {
    fn from(value: f64) -> Self {
        Self::Other(number_text(value))
    }
}

impl From<&serde_json::Value> for DateInput {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            other => Self::Other(json_text(other)),
        }
    }
}

impl From<serde_json::Value> for DateInput {
    fn from(value: serde_json::Value) -> Self {
        Self::from(&value)
    }
}

fn number_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        let text = if value.is_sign_negative() { "-Infinity" } else { "Infinity" };
        text.to_owned()
    } else if value == 0.0 {
        // no negative zero in text form
        "0".to_owned()
    } else {
        value.to_string()
    }
}

fn json_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(|i| i.to_string())
            .or_else(|| n.as_f64().map(number_text))
            .unwrap_or_else(|| n.to_string()),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(json_text).collect();
            parts.join(&ARRAY_TEXT_SEPARATOR.to_string())
        }
        serde_json::Value::Object(_) => OBJECT_TEXT.to_owned(),
    }
}
