//! Collator-style comparison of dates by a configurable list of calendar parts.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use date_sensitivity::{ComparatorOptions, DateComparator, DateInput, DatePart, DateUsage};
//!
//! let options = ComparatorOptions::default()
//!     .with_date_sensitivity([DatePart::Year, DatePart::Month, DatePart::Day])
//!     .with_date_usage(DateUsage::Utc);
//! let comparator = DateComparator::new(None, options);
//!
//! let morning = DateInput::from(Utc.with_ymd_and_hms(2020, 3, 23, 9, 0, 0).unwrap());
//! let evening = DateInput::from(Utc.with_ymd_and_hms(2020, 3, 23, 17, 0, 0).unwrap());
//! assert_eq!(comparator.compare(&morning, &evening), 0);
//! ```

mod consts;
mod options;
mod prelude;
mod types;
mod value;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use options::{
    ComparatorOptions, ConfigError, DATE_SENSITIVITY_KEY, DATE_USAGE_KEY, ResolvedOptions,
};
pub use types::{DatePart, DateUsage};
pub use value::{DateInput, DateValue};

use chrono::{Datelike, Timelike};
use std::cmp::Ordering;

/// Orders date inputs by an ordered list of [`DatePart`]s read from either the
/// local or the UTC view of each date.
///
/// Two valid dates compare part by part, most significant first, and the first
/// differing part decides. If either side is not a valid date (an invalid
/// date, null, absent or any other value) both sides are ordered by their
/// canonical text instead, so comparison never fails.
///
/// The configuration is fixed at construction. A comparator can only be
/// obtained through its constructors:
///
/// ```compile_fail
/// use date_sensitivity::{DateComparator, ResolvedOptions};
///
/// let comparator = DateComparator { options: ResolvedOptions::default() };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DateComparator {
    options: ResolvedOptions,
}

impl DateComparator {
    /// Creates a comparator, applying defaults to unset options.
    ///
    /// The locale hint exists for symmetry with text collators and is never
    /// inspected.
    pub fn new(_locale: Option<&str>, options: ComparatorOptions) -> Self {
        let options = options.resolve();
        log::debug!(
            "Created date comparator comparing [{}] in {} time",
            options
                .date_sensitivity
                .iter()
                .map(|part| part.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            options.date_usage
        );
        Self { options }
    }

    /// Creates a comparator from untyped options such as
    /// `{"dateSensitivity": ["year", "month"], "dateUsage": "utc"}`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if `dateSensitivity` is not an array, names an
    /// unknown part, or `dateUsage` is not `local` or `utc`.
    pub fn from_json(
        locale: Option<&str>,
        options: &serde_json::Value,
    ) -> Result<Self, ConfigError> {
        let options = ComparatorOptions::from_json(options).inspect_err(|error| {
            log::debug!("Rejected date comparator options: {error}");
        })?;
        Ok(Self::new(locale, options))
    }

    /// The configuration in effect
    pub const fn resolved_options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Compares two inputs, returning -1, 0 or 1.
    pub fn compare(&self, left: &DateInput, right: &DateInput) -> i32 {
        compare_inputs(&self.options, left, right) as i32
    }

    /// Compares two inputs as an [`Ordering`].
    pub fn ordering(&self, left: &DateInput, right: &DateInput) -> Ordering {
        compare_inputs(&self.options, left, right)
    }

    /// Returns [`compare`](Self::compare) as a standalone function that owns
    /// a copy of this comparator's configuration.
    pub fn compare_fn(
        &self,
    ) -> impl Fn(&DateInput, &DateInput) -> i32 + Clone + Send + Sync + 'static {
        let options = self.options.clone();
        move |left: &DateInput, right: &DateInput| {
            compare_inputs(&options, left, right) as i32
        }
    }

    /// Returns [`ordering`](Self::ordering) as a standalone function, suitable
    /// for [`slice::sort_by`].
    pub fn ordering_fn(
        &self,
    ) -> impl Fn(&DateInput, &DateInput) -> Ordering + Clone + Send + Sync + 'static {
        let options = self.options.clone();
        move |left: &DateInput, right: &DateInput| compare_inputs(&options, left, right)
    }

    /// Sorts `values` in ascending order. The sort is stable.
    pub fn sort(&self, values: &mut [DateInput]) {
        values.sort_by(|left, right| self.ordering(left, right));
    }
}

impl From<ComparatorOptions> for DateComparator {
    fn from(options: ComparatorOptions) -> Self {
        Self::new(None, options)
    }
}

fn compare_inputs(options: &ResolvedOptions, left: &DateInput, right: &DateInput) -> Ordering {
    let parts = options.date_sensitivity.as_slice();
    let by_parts = match (left.valid_date(), right.valid_date()) {
        (Some(l), Some(r)) => match options.date_usage {
            DateUsage::Local => l.local().zip(r.local()).map(|(l, r)| compare_parts(parts, &l, &r)),
            DateUsage::Utc => l.utc().zip(r.utc()).map(|(l, r)| compare_parts(parts, &l, &r)),
        },
        _ => None,
    };

    by_parts.unwrap_or_else(|| {
        let (left, right) = (left.text(), right.text());
        log::trace!("Comparing non-date inputs by text: {left:?} vs {right:?}");
        left.cmp(&right)
    })
}

/// Lexicographic comparison over `parts`; stops at the first differing part.
fn compare_parts<T>(parts: &[DatePart], left: &T, right: &T) -> Ordering
where
    T: Datelike + Timelike,
{
    parts
        .iter()
        .map(|part| part.extract(left).cmp(&part.extract(right)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
