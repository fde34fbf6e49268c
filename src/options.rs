use crate::consts::DEFAULT_DATE_SENSITIVITY;
use crate::types::{DatePart, DateUsage};
use serde::{Deserialize, Serialize};

/// JSON key of the ordered part list
pub const DATE_SENSITIVITY_KEY: &str = "dateSensitivity";
/// JSON key of the local/UTC selector
pub const DATE_USAGE_KEY: &str = "dateUsage";

/// Error type for comparator construction.
///
/// Variants fall into two classes: type errors (a value of the wrong shape)
/// and range errors (a value of the right shape but not a recognized tag).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Options were supplied but are not an object.
    #[error("Comparator options must be an object, found {0}")]
    NotAnObject(String),

    /// `dateSensitivity` is not a sequence.
    #[error("Invalid option: dateSensitivity must be an array, found {0}")]
    SensitivityNotSequence(String),

    /// `dateSensitivity` contains an unrecognized part.
    #[error("Invalid option: {0} is not a valid date part")]
    UnknownDatePart(String),

    /// `dateUsage` is neither `local` nor `utc`.
    #[error("Invalid option: {0} is not a valid date usage (expected local or utc)")]
    UnknownDateUsage(String),
}

impl ConfigError {
    /// True for errors about the shape of a value
    pub const fn is_type_error(&self) -> bool {
        matches!(self, Self::NotAnObject(_) | Self::SensitivityNotSequence(_))
    }

    /// True for errors about an unrecognized tag
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::UnknownDatePart(_) | Self::UnknownDateUsage(_))
    }
}

/// Options accepted by a comparator; unset fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparatorOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_sensitivity: Option<Vec<DatePart>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_usage: Option<DateUsage>,
}

impl ComparatorOptions {
    /// Sets the parts to compare, most significant first
    pub fn with_date_sensitivity(mut self, parts: impl IntoIterator<Item = DatePart>) -> Self {
        self.date_sensitivity = Some(parts.into_iter().collect());
        self
    }

    /// Sets whether parts are read in local time or UTC
    pub fn with_date_usage(mut self, usage: DateUsage) -> Self {
        self.date_usage = Some(usage);
        self
    }

    /// Validates untyped options, reporting the first problem found.
    ///
    /// `null` means "no options". Keys other than `dateSensitivity` and
    /// `dateUsage` are ignored.
    ///
    /// # Errors
    /// Returns a type error if `value` is not an object or `dateSensitivity`
    /// is not an array, and a range error for the first unrecognized part or
    /// an unrecognized usage.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        let map = match value {
            serde_json::Value::Null => return Ok(Self::default()),
            serde_json::Value::Object(map) => map,
            other => return Err(ConfigError::NotAnObject(json_kind(other).to_owned())),
        };

        let date_sensitivity = map
            .get(DATE_SENSITIVITY_KEY)
            .map(|raw| {
                let items = raw
                    .as_array()
                    .ok_or_else(|| ConfigError::SensitivityNotSequence(json_kind(raw).to_owned()))?;
                items.iter().map(parse_tag::<DatePart>).collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let date_usage = map.get(DATE_USAGE_KEY).map(parse_tag::<DateUsage>).transpose()?;

        Ok(Self {
            date_sensitivity,
            date_usage,
        })
    }

    /// Applies defaults to every unset field.
    pub fn resolve(self) -> ResolvedOptions {
        ResolvedOptions {
            date_sensitivity: self
                .date_sensitivity
                .unwrap_or_else(|| DEFAULT_DATE_SENSITIVITY.to_vec()),
            date_usage: self.date_usage.unwrap_or_default(),
        }
    }
}

/// The configuration a comparator actually uses, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub date_sensitivity: Vec<DatePart>,
    pub date_usage: DateUsage,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        ComparatorOptions::default().resolve()
    }
}

/// Parses a tag given as a JSON value. Non-strings are rendered as text and
/// rejected by the tag parser, so they surface as range errors.
fn parse_tag<T>(raw: &serde_json::Value) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ConfigError>,
{
    match raw {
        serde_json::Value::String(tag) => tag.parse(),
        other => other.to_string().parse(),
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let resolved = ComparatorOptions::default().resolve();
        assert_eq!(resolved.date_sensitivity, DEFAULT_DATE_SENSITIVITY.to_vec());
        assert_eq!(resolved.date_usage, DateUsage::Local);
        assert_eq!(resolved, ResolvedOptions::default());
    }

    #[test]
    fn test_builder() {
        let resolved = ComparatorOptions::default()
            .with_date_sensitivity([DatePart::Hour, DatePart::Hour])
            .with_date_usage(DateUsage::Utc)
            .resolve();
        assert_eq!(resolved.date_sensitivity, vec![DatePart::Hour, DatePart::Hour]);
        assert_eq!(resolved.date_usage, DateUsage::Utc);
    }

    #[test]
    fn test_from_json_cases() {
        struct TestCase {
            input:       serde_json::Value,
            expected:    Result<ComparatorOptions, ConfigError>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       json!(null),
                expected:    Ok(ComparatorOptions::default()),
                description: "null options",
            },
            TestCase {
                input:       json!({}),
                expected:    Ok(ComparatorOptions::default()),
                description: "empty object",
            },
            TestCase {
                input:       json!({"dateSensitivity": ["year", "dayPeriod"], "dateUsage": "utc"}),
                expected:    Ok(ComparatorOptions::default()
                    .with_date_sensitivity([DatePart::Year, DatePart::DayPeriod])
                    .with_date_usage(DateUsage::Utc)),
                description: "fully specified",
            },
            TestCase {
                input:       json!({"dateSensitivity": [], "ignored": 3}),
                expected:    Ok(ComparatorOptions::default().with_date_sensitivity(Vec::new())),
                description: "empty sensitivity and unknown key",
            },
            TestCase {
                input:       json!("year"),
                expected:    Err(ConfigError::NotAnObject("string".to_owned())),
                description: "options not an object",
            },
            TestCase {
                input:       json!({"dateSensitivity": "year"}),
                expected:    Err(ConfigError::SensitivityNotSequence("string".to_owned())),
                description: "single part instead of a list",
            },
            TestCase {
                input:       json!({"dateSensitivity": null}),
                expected:    Err(ConfigError::SensitivityNotSequence("null".to_owned())),
                description: "null sensitivity",
            },
            TestCase {
                input:       json!({"dateSensitivity": ["year", "decade", "century"]}),
                expected:    Err(ConfigError::UnknownDatePart("decade".to_owned())),
                description: "first unknown part is reported",
            },
            TestCase {
                input:       json!({"dateSensitivity": [1]}),
                expected:    Err(ConfigError::UnknownDatePart("1".to_owned())),
                description: "non-string part",
            },
            TestCase {
                input:       json!({"dateUsage": "gmt"}),
                expected:    Err(ConfigError::UnknownDateUsage("gmt".to_owned())),
                description: "unknown usage",
            },
        ];

        for case in cases {
            assert_eq!(
                ComparatorOptions::from_json(&case.input),
                case.expected,
                "case: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_error_classes() {
        assert!(ConfigError::NotAnObject("number".to_owned()).is_type_error());
        assert!(ConfigError::SensitivityNotSequence("string".to_owned()).is_type_error());
        assert!(ConfigError::UnknownDatePart("decade".to_owned()).is_range_error());
        assert!(ConfigError::UnknownDateUsage("gmt".to_owned()).is_range_error());
        assert!(!ConfigError::UnknownDateUsage("gmt".to_owned()).is_type_error());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::UnknownDatePart("decade".to_owned());
        assert_eq!(err.to_string(), "Invalid option: decade is not a valid date part");
    }

    #[test]
    fn test_serde_camel_case() {
        let options = ComparatorOptions::default().with_date_usage(DateUsage::Utc);
        let json = serde_json::to_string(&options).expect("serialize options");
        assert_eq!(json, r#"{"dateUsage":"utc"}"#);

        let parsed: ComparatorOptions =
            serde_json::from_str(r#"{"dateSensitivity":["hour","minute"]}"#)
                .expect("deserialize options");
        assert_eq!(parsed.date_sensitivity, Some(vec![DatePart::Hour, DatePart::Minute]));
        assert_eq!(parsed.date_usage, None);
    }
}
