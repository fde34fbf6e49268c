use crate::consts::{MILLIS_PER_SECOND, NANOS_PER_MILLI, NOON_HOUR};
use crate::options::ConfigError;
use crate::prelude::*;
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One addressable component of a calendar/time value.
///
/// The set carries no order of its own; a comparator is configured with an
/// ordered sequence of parts, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatePart {
    /// Sign of the year: -1, 0 or 1
    #[display(fmt = "era")]
    Era,
    /// Full year, may be zero or negative
    #[display(fmt = "year")]
    Year,
    /// Zero-based month (0 = January)
    #[display(fmt = "month")]
    Month,
    /// Zero-based day of the week (0 = Sunday)
    #[display(fmt = "weekday")]
    Weekday,
    /// Day of the month
    #[display(fmt = "day")]
    Day,
    /// 0 before noon, 1 from noon on
    #[display(fmt = "dayPeriod")]
    DayPeriod,
    /// Hour in 24-hour form
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    /// Sub-second component in milliseconds
    #[display(fmt = "fractionalSecond")]
    FractionalSecond,
}

impl DatePart {
    /// Every recognized part, in declaration order
    pub const ALL: [Self; 10] = [
        Self::Era,
        Self::Year,
        Self::Month,
        Self::Weekday,
        Self::Day,
        Self::DayPeriod,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::FractionalSecond,
    ];

    /// Returns the tag used in textual configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Era => "era",
            Self::Year => "year",
            Self::Month => "month",
            Self::Weekday => "weekday",
            Self::Day => "day",
            Self::DayPeriod => "dayPeriod",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::FractionalSecond => "fractionalSecond",
        }
    }

    /// Extracts this part from an already zone-resolved date/time as a number.
    pub fn extract<T>(self, dt: &T) -> i64
    where
        T: Datelike + Timelike,
    {
        match self {
            Self::Era => i64::from(dt.year().signum()),
            Self::Year => i64::from(dt.year()),
            Self::Month => i64::from(dt.month0()),
            Self::Weekday => i64::from(dt.weekday().num_days_from_sunday()),
            Self::Day => i64::from(dt.day()),
            Self::DayPeriod => i64::from(dt.hour() >= NOON_HOUR),
            Self::Hour => i64::from(dt.hour()),
            Self::Minute => i64::from(dt.minute()),
            Self::Second => i64::from(dt.second()),
            // leap seconds report nanoseconds past 1e9, fold them back
            Self::FractionalSecond => {
                i64::from((dt.nanosecond() / NANOS_PER_MILLI) % MILLIS_PER_SECOND)
            }
        }
    }
}

impl FromStr for DatePart {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|part| part.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownDatePart(s.to_owned()))
    }
}

/// Which view of a date the comparator reads components from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUsage {
    /// The host's local time zone
    #[default]
    #[display(fmt = "local")]
    Local,
    /// Coordinated Universal Time
    #[display(fmt = "utc")]
    Utc,
}

impl DateUsage {
    /// Returns the tag used in textual configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Utc => "utc",
        }
    }
}

impl FromStr for DateUsage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "utc" => Ok(Self::Utc),
            other => Err(ConfigError::UnknownDateUsage(other.to_owned())),
        }
    }
}
