//! What the renderer needs to know about each cell of the year, month and day views.
//!
//! All of these are produced by pure queries on [`crate::DatePicker`].

use chrono::NaiveDate;

/// A day in the day grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,

    /// Day of the Persian month, in Persian digits.
    pub label: String,

    /// Can't be picked.
    pub disabled: bool,

    /// This is the picked value.
    pub selected: bool,

    pub today: bool,

    /// Belongs to the previous or next month. Usually rendered blank.
    pub outside_month: bool,

    /// Friday, other than today. Usually rendered in red.
    pub holiday: bool,

    /// Extra space-separated classes from [`crate::DatePickerConfig::date_classes`].
    pub classes: String,
}

/// A month in the month view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthCell {
    /// Gregorian date of the first day of the Persian month.
    pub month_start: NaiveDate,

    /// Persian month name.
    pub name: &'static str,

    /// Same month as the displayed one, and not disabled.
    pub selected: bool,

    pub disabled: bool,
}

/// A year in the year list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearCell {
    /// Persian year.
    pub year: i32,

    /// The year in Persian digits.
    pub label: String,

    /// The displayed year.
    pub selected: bool,

    /// Element id to scroll to, see [`crate::PickerHooks::scroll_to_year`].
    pub scroll_id: String,
}

/// One row of the day grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Week {
    /// Week of the Persian year, or empty if the row doesn't belong to the month.
    pub number: String,

    /// Seven consecutive days, starting at the configured first day of the week.
    pub days: [NaiveDate; 7],
}
