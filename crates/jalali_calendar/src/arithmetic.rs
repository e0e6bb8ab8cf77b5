use chrono::{Datelike as _, Days, NaiveDate, Weekday};

use crate::error::{CalendarError, Result};
use crate::{CalendarDate, clamp_to_supported, max_supported_date, min_supported_date};

/// Is this a leap year, i.e. does Esfand have 30 days?
///
/// Uses the 33-year arithmetic rule, which matches the astronomical calendar
/// for all of the 20th and 21st centuries.
///
/// ```
/// # use jalali_calendar::is_leap_year;
/// assert!(is_leap_year(1399));
/// assert!(!is_leap_year(1402));
/// assert!(is_leap_year(1403));
/// ```
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (25 * i64::from(year) + 11).rem_euclid(33) < 8
}

/// Number of days in the given month of the given year.
///
/// Returns `0` for months outside of `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// 365 or 366.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Move a Gregorian date by a number of days, saturating at the ends of [`NaiveDate`].
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    } else {
        date.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    }
}

/// The Gregorian date of the first day of the Persian month containing `date`.
///
/// Dates outside the supported range are clamped first.
///
/// ```
/// # use chrono::NaiveDate;
/// let mid_farvardin = NaiveDate::from_ymd_opt(2023, 4, 5).unwrap();
/// let nowruz = NaiveDate::from_ymd_opt(2023, 3, 21).unwrap();
/// assert_eq!(jalali_calendar::first_of_month(mid_farvardin), nowruz);
/// ```
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    CalendarDate::from_gregorian_clamped(date)
        .first_of_month()
        .to_gregorian()
}

/// The Gregorian date of the last day of the Persian month containing `date`.
///
/// Dates outside the supported range are clamped first.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    CalendarDate::from_gregorian_clamped(date)
        .last_of_month()
        .to_gregorian()
}

/// Add whole Persian months to a Gregorian date.
///
/// The day of month is kept, but clamped down if the target month is shorter.
///
/// # Errors
/// [`CalendarError::OutOfRange`] if `date` itself is unsupported,
/// [`CalendarError::OutOfRangePersian`] if the result would be.
pub fn checked_add_months(date: NaiveDate, months: i32) -> Result<NaiveDate> {
    let start = CalendarDate::from_gregorian(date)?;
    let index = i64::from(start.year()) * 12 + i64::from(start.month()) - 1 + i64::from(months);
    let year = i32::try_from(index.div_euclid(12)).unwrap_or(if months < 0 {
        i32::MIN
    } else {
        i32::MAX
    });
    let month = (index.rem_euclid(12) + 1) as u8;
    let day = start.day().min(days_in_month(year, month));
    CalendarDate::new(year, month, day).map(CalendarDate::to_gregorian)
}

/// Add whole Persian years to a Gregorian date.
///
/// Esfand 30th becomes Esfand 29th when the target year isn't a leap year.
///
/// # Errors
/// Same as [`checked_add_months`].
pub fn checked_add_years(date: NaiveDate, years: i32) -> Result<NaiveDate> {
    checked_add_months(date, years.saturating_mul(12))
}

/// Like [`checked_add_months`], but clamps to the supported range instead of failing.
///
/// ```
/// # use chrono::NaiveDate;
/// # use jalali_calendar::{add_months, min_supported_date};
/// let end_of_farvardin = NaiveDate::from_ymd_opt(2023, 4, 20).unwrap(); // 1402/1/31
/// let end_of_ordibehesht = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap(); // 1402/2/31
/// let end_of_mehr = NaiveDate::from_ymd_opt(2023, 10, 22).unwrap(); // 1402/7/30
/// assert_eq!(add_months(end_of_farvardin, 1), end_of_ordibehesht);
/// assert_eq!(add_months(end_of_farvardin, 6), end_of_mehr);
/// assert_eq!(add_months(end_of_farvardin, -1_000_000), min_supported_date());
/// ```
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let date = clamp_to_supported(date);
    checked_add_months(date, months).unwrap_or_else(|_err| saturate(months))
}

/// Like [`checked_add_years`], but clamps to the supported range instead of failing.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let date = clamp_to_supported(date);
    checked_add_years(date, years).unwrap_or_else(|_err| saturate(years))
}

fn saturate(direction: i32) -> NaiveDate {
    if direction < 0 {
        min_supported_date()
    } else {
        max_supported_date()
    }
}

/// The first `first_day_of_week` on or before `date`.
///
/// ```
/// # use chrono::{NaiveDate, Weekday};
/// # use jalali_calendar::start_of_week;
/// let tuesday = NaiveDate::from_ymd_opt(2023, 3, 21).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2023, 3, 18).unwrap();
/// assert_eq!(start_of_week(tuesday, Weekday::Sat), saturday);
/// assert_eq!(start_of_week(tuesday, Weekday::Tue), tuesday);
/// ```
pub fn start_of_week(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
    let diff = (7 + date.weekday().num_days_from_sunday()
        - first_day_of_week.num_days_from_sunday())
        % 7;
    shift_days(date, -i64::from(diff))
}

/// Week of the Persian year of a Gregorian date.
///
/// The week containing Farvardin 1st is week 1, no matter how many of its days
/// fall into the previous year.
///
/// # Errors
/// [`CalendarError::OutOfRange`] if `date` is unsupported.
pub fn week_of_year(date: NaiveDate, first_day_of_week: Weekday) -> Result<u32> {
    Ok(CalendarDate::from_gregorian(date)?.week_of_year(first_day_of_week))
}

/// Is `error` caused by running off the supported range?
pub fn is_out_of_range(error: &CalendarError) -> bool {
    matches!(
        error,
        CalendarError::OutOfRange(_) | CalendarError::OutOfRangePersian { .. }
    )
}
