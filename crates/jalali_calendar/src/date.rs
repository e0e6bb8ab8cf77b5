use chrono::{Datelike as _, NaiveDate, Weekday};

use crate::error::{CalendarError, Result};
use crate::{days_in_month, is_leap_year};

/// `1/1/1` in the Persian calendar is 622-03-21 in the proleptic Gregorian calendar.
const EPOCH_DAYS_FROM_CE: i32 = 226_895;

/// 9999-12-31, which is `9378/10/10`.
const MAX_DAYS_FROM_CE: i32 = 3_652_059;

/// The last Persian year that is (partially) supported.
pub const MAX_YEAR: i32 = 9378;

/// Days in a full 33-year intercalation cycle.
const DAYS_PER_CYCLE: i64 = 33 * 365 + 8;

/// The earliest Gregorian date that has a Persian counterpart: `1/1/1`.
pub fn min_supported_date() -> NaiveDate {
    NaiveDate::from_num_days_from_ce_opt(EPOCH_DAYS_FROM_CE).unwrap_or(NaiveDate::MIN)
}

/// The latest supported Gregorian date: 9999-12-31.
pub fn max_supported_date() -> NaiveDate {
    NaiveDate::from_num_days_from_ce_opt(MAX_DAYS_FROM_CE).unwrap_or(NaiveDate::MAX)
}

/// Is this Gregorian date inside the supported range?
#[inline]
pub fn is_supported(date: NaiveDate) -> bool {
    (EPOCH_DAYS_FROM_CE..=MAX_DAYS_FROM_CE).contains(&date.num_days_from_ce())
}

/// Move the date into the supported range.
pub fn clamp_to_supported(date: NaiveDate) -> NaiveDate {
    date.clamp(min_supported_date(), max_supported_date())
}

/// Days from `1/1/1` to the first day of `year`.
fn days_before_year(year: i32) -> i32 {
    365 * (year - 1) + (8 * year + 21).div_euclid(33)
}

/// Days from the first of the year to the first of `month`.
fn days_before_month(month: u8) -> i32 {
    let month = i32::from(month);
    if month <= 7 {
        31 * (month - 1)
    } else {
        30 * (month - 1) + 6
    }
}

/// A date in the Persian (solar Hijri) calendar.
///
/// Always valid and always inside the supported range, so converting it
/// back to Gregorian cannot fail.
///
/// Ordered chronologically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "String", into = "String")
)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// `1/1/1`, the first representable date.
    pub const MIN: Self = Self {
        year: 1,
        month: 1,
        day: 1,
    };

    /// `9378/10/10`, which is 9999-12-31.
    pub const MAX: Self = Self {
        year: MAX_YEAR,
        month: 10,
        day: 10,
    };

    /// ```
    /// # use jalali_calendar::{CalendarDate, CalendarError};
    /// assert!(CalendarDate::new(1403, 12, 30).is_ok()); // leap year
    /// assert!(matches!(CalendarDate::new(1402, 12, 30), Err(CalendarError::InvalidDate { .. })));
    /// assert!(matches!(CalendarDate::new(0, 12, 1), Err(CalendarError::OutOfRangePersian { .. })));
    /// ```
    ///
    /// # Errors
    /// [`CalendarError::InvalidDate`] if `month` or `day` is out of bounds,
    /// [`CalendarError::OutOfRangePersian`] if the date lies outside the supported range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        let date = Self { year, month, day };
        if date < Self::MIN || Self::MAX < date {
            return Err(CalendarError::OutOfRangePersian { year, month, day });
        }
        Ok(date)
    }

    /// The Persian date of a Gregorian date.
    ///
    /// # Errors
    /// [`CalendarError::OutOfRange`] if the date is before `1/1/1` or after 9999-12-31.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self> {
        if !is_supported(date) {
            return Err(CalendarError::OutOfRange(date));
        }
        Ok(Self::from_days_since_epoch(
            date.num_days_from_ce() - EPOCH_DAYS_FROM_CE,
        ))
    }

    /// Like [`Self::from_gregorian`], but dates outside the supported range
    /// become [`Self::MIN`] or [`Self::MAX`].
    pub fn from_gregorian_clamped(date: NaiveDate) -> Self {
        if date < min_supported_date() {
            Self::MIN
        } else if max_supported_date() < date {
            Self::MAX
        } else {
            Self::from_days_since_epoch(date.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
        }
    }

    fn from_days_since_epoch(days: i32) -> Self {
        // Estimate from the cycle length, then correct.
        let mut year = 1 + ((33 * i64::from(days) + 3).div_euclid(DAYS_PER_CYCLE)) as i32;
        while days_before_year(year) > days {
            year -= 1;
        }
        while days_before_year(year + 1) <= days {
            year += 1;
        }

        let day_of_year = days - days_before_year(year) + 1;
        let (month, day) = if day_of_year <= 186 {
            let month = (day_of_year - 1) / 31 + 1;
            (month, day_of_year - 31 * (month - 1))
        } else {
            let since_mehr = day_of_year - 187;
            (7 + since_mehr / 30, since_mehr % 30 + 1)
        };

        Self {
            year,
            month: month as u8,
            day: day as u8,
        }
    }

    fn days_since_epoch(self) -> i32 {
        days_before_year(self.year) + days_before_month(self.month) + i32::from(self.day) - 1
    }

    /// The Gregorian date of this Persian date.
    pub fn to_gregorian(self) -> NaiveDate {
        // In range by construction.
        NaiveDate::from_num_days_from_ce_opt(EPOCH_DAYS_FROM_CE + self.days_since_epoch())
            .unwrap_or(NaiveDate::MIN)
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    /// `1..=12`
    #[inline]
    pub fn month(self) -> u8 {
        self.month
    }

    /// `1..=31`
    #[inline]
    pub fn day(self) -> u8 {
        self.day
    }

    /// 1-based day of the Persian year, `1..=366`.
    pub fn day_of_year(self) -> u16 {
        (days_before_month(self.month) + i32::from(self.day)) as u16
    }

    pub fn weekday(self) -> Weekday {
        self.to_gregorian().weekday()
    }

    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    pub fn days_in_month(self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// The first day of this date's month.
    pub fn first_of_month(self) -> Self {
        Self { day: 1, ..self }
    }

    /// The last day of this date's month, clamped to [`Self::MAX`].
    pub fn last_of_month(self) -> Self {
        Self {
            day: self.days_in_month(),
            ..self
        }
        .min(Self::MAX)
    }

    /// The first day of this date's year.
    pub fn first_of_year(self) -> Self {
        Self {
            month: 1,
            day: 1,
            ..self
        }
    }

    /// Week of the Persian year, where the week containing Farvardin 1st is week 1.
    ///
    /// `first_day_of_week` decides where one week ends and the next starts.
    pub fn week_of_year(self, first_day_of_week: Weekday) -> u32 {
        let day_of_year = u32::from(self.day_of_year()) - 1;
        let weekday = self.weekday().num_days_from_sunday();
        let first_day = first_day_of_week.num_days_from_sunday();
        // Weekday of Farvardin 1st, relative to the first day of the week:
        let offset = (weekday + 14 - day_of_year % 7 - first_day) % 7;
        (day_of_year + offset) / 7 + 1
    }
}

impl std::fmt::Display for CalendarDate {
    /// `year/month/day` without zero-padding, e.g. `1402/1/1`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

impl From<CalendarDate> for NaiveDate {
    #[inline]
    fn from(date: CalendarDate) -> Self {
        date.to_gregorian()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    #[inline]
    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::from_gregorian(date)
    }
}

/// The Gregorian date of a Persian date.
///
/// ```
/// # use chrono::NaiveDate;
/// assert_eq!(
///     jalali_calendar::to_gregorian(1348, 10, 11),
///     Ok(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
/// );
/// assert!(jalali_calendar::to_gregorian(9378, 10, 11).is_err());
/// ```
///
/// # Errors
/// See [`CalendarDate::new`].
pub fn to_gregorian(year: i32, month: u8, day: u8) -> Result<NaiveDate> {
    CalendarDate::new(year, month, day).map(CalendarDate::to_gregorian)
}
