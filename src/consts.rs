use crate::types::DatePart;

/// Parts compared when no `dateSensitivity` is configured, most significant first
pub const DEFAULT_DATE_SENSITIVITY: [DatePart; 7] = [
    DatePart::Year,
    DatePart::Month,
    DatePart::Day,
    DatePart::Hour,
    DatePart::Minute,
    DatePart::Second,
    DatePart::FractionalSecond,
];

/// First hour of the afternoon day period
pub const NOON_HOUR: u32 = 12;

/// Nanoseconds per millisecond
pub(crate) const NANOS_PER_MILLI: u32 = 1_000_000;
/// Milliseconds per second, also the leap-second wrap for sub-second values
pub(crate) const MILLIS_PER_SECOND: u32 = 1_000;

/// Largest distance from the Unix epoch, in milliseconds, a valid date may have
/// (100 000 000 days either side). chrono's own range is narrower still.
pub const MAX_TIMESTAMP_MILLIS: i64 = 8_640_000_000_000_000;

/// Canonical text of an absent input
pub const ABSENT_TEXT: &str = "undefined";
/// Canonical text of a null input
pub const NULL_TEXT: &str = "null";
/// Canonical text of a date that does not resolve to an instant
pub const INVALID_DATE_TEXT: &str = "Invalid Date";
/// Canonical text of any structured (object-like) value
pub const OBJECT_TEXT: &str = "[object Object]";

/// Leading token of a valid date's canonical text; sorts after
/// [`INVALID_DATE_TEXT`] and before [`NULL_TEXT`]
pub const LOCAL_DATE_TEXT_PREFIX: &str = "Local";

/// Separator used when an array value is flattened to text
pub const ARRAY_TEXT_SEPARATOR: char = ',';
