//! The `year/month/day` text form of a date, as shown in a date picker's text field.
//!
//! ```
//! use jalali_calendar::{CalendarDate, text};
//!
//! let date = text::parse_date("1402/1/1").unwrap();
//! assert_eq!(date, CalendarDate::new(1402, 1, 1).unwrap());
//! assert_eq!(text::format_date(date), "1402/1/1");
//!
//! assert_eq!(text::parse_date("1402/1"), None);
//! ```

use std::num::ParseIntError;

use chrono::NaiveDate;

use crate::{CalendarDate, CalendarError, delocalize_digits, localize_digits, persian_month_name};

/// Separator between year, month and day.
pub const SEPARATOR: char = '/';

/// Why a piece of text isn't a date.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseDateError {
    /// Expected exactly three `/`-separated parts.
    #[error("expected year/month/day, found {0} part(s)")]
    SegmentCount(usize),

    /// One of the parts is not a number.
    #[error("not a number: {0}")]
    Number(#[from] ParseIntError),

    /// The numbers don't form a (supported) Persian date.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// `year/month/day`, without zero-padding.
pub fn format_date(date: CalendarDate) -> String {
    date.to_string()
}

/// The Persian `year/month/day` of a Gregorian date, or `None` if it is out of range.
pub fn format_gregorian(date: NaiveDate) -> Option<String> {
    CalendarDate::from_gregorian(date).ok().map(format_date)
}

/// Parse `year/month/day`.
///
/// Persian and Arabic-Indic digits are accepted, and whitespace around each part is ignored.
///
/// # Errors
/// See [`ParseDateError`].
pub fn parse_date_strict(text: &str) -> Result<CalendarDate, ParseDateError> {
    let text = delocalize_digits(text);
    let parts: Vec<&str> = text.split(SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseDateError::SegmentCount(parts.len()));
    };
    Ok(CalendarDate::new(year.parse()?, month.parse()?, day.parse()?)?)
}

/// Parse `year/month/day`, treating anything malformed as "no value".
pub fn parse_date(text: &str) -> Option<CalendarDate> {
    match parse_date_strict(text) {
        Ok(date) => Some(date),
        Err(err) => {
            log::debug!("Ignoring date text {text:?}: {err}");
            None
        }
    }
}

/// Parse `year/month/day` into a Gregorian date.
pub fn parse_gregorian(text: &str) -> Option<NaiveDate> {
    parse_date(text).map(CalendarDate::to_gregorian)
}

/// `day month-name` in Persian, e.g. `۱ فروردین`.
pub fn format_title(date: CalendarDate) -> String {
    let month = persian_month_name(date.month()).unwrap_or_default();
    localize_digits(&format!("{} {month}", date.day()))
}

impl std::str::FromStr for CalendarDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date_strict(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ParseDateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_date_strict(&s)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        format_date(date)
    }
}
