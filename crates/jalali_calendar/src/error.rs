use chrono::NaiveDate;

/// Something went wrong converting between Gregorian and Persian dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The Gregorian date lies outside [`crate::min_supported_date`]`..=`[`crate::max_supported_date`].
    #[error("{0} is outside the supported range of the Persian calendar")]
    OutOfRange(NaiveDate),

    /// The Persian fields are well-formed, but the date lies outside the supported range.
    #[error("{year}/{month}/{day} is outside the supported range of the Persian calendar")]
    OutOfRangePersian { year: i32, month: u8, day: u8 },

    /// The fields don't form a Persian date, e.g. month 13 or Esfand 30 in a common year.
    #[error("{year}/{month}/{day} is not a valid Persian date")]
    InvalidDate { year: i32, month: u8, day: u8 },
}

pub(crate) type Result<T, E = CalendarError> = std::result::Result<T, E>;
