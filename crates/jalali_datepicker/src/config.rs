use std::time::Duration;

use chrono::{NaiveDate, Weekday};

use crate::{FixedParts, ViewMode};

type DatePredicate = Box<dyn Fn(NaiveDate) -> bool>;
type DateClasses = Box<dyn Fn(NaiveDate) -> String>;

/// How a [`crate::DatePicker`] behaves.
///
/// ```
/// # use chrono::{NaiveDate, Weekday, Datelike as _};
/// # use jalali_datepicker::{DatePickerConfig, ViewMode};
/// let config = DatePickerConfig::default()
///     .open_to(ViewMode::Month)
///     .first_day_of_week(Weekday::Sun)
///     .auto_close(true)
///     .disabled_dates(|date| date.weekday() == Weekday::Fri);
/// assert!(config.is_date_disabled(NaiveDate::from_ymd_opt(2023, 3, 24).unwrap()));
/// ```
pub struct DatePickerConfig {
    /// The earliest selectable date.
    pub min_date: Option<NaiveDate>,

    /// The latest selectable date.
    pub max_date: Option<NaiveDate>,

    /// The view to show when the picker opens.
    ///
    /// Default: [`ViewMode::Date`].
    pub open_to: ViewMode,

    /// Default: Saturday.
    pub first_day_of_week: Weekday,

    /// How long to wait after a day is picked before closing the picker,
    /// so the user gets to see the selection.
    ///
    /// Default: 100 ms.
    pub closing_delay: Duration,

    /// Number of months shown side by side.
    ///
    /// Default: `1`.
    pub display_months: u32,

    /// Close the picker after a day is picked.
    pub auto_close: bool,

    /// The text field can be typed into, so its text seeds the displayed month on open.
    pub editable: bool,

    /// Show week numbers in front of each week.
    pub show_week_numbers: bool,

    /// The month to show on open, even when a value is picked.
    pub start_month: Option<NaiveDate>,

    /// Parts of the date the user can't change.
    pub fixed: FixedParts,

    is_date_disabled: Option<DatePredicate>,
    additional_date_classes: Option<DateClasses>,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            min_date: None,
            max_date: None,
            open_to: ViewMode::Date,
            first_day_of_week: Weekday::Sat,
            closing_delay: Duration::from_millis(100),
            display_months: 1,
            auto_close: false,
            editable: false,
            show_week_numbers: false,
            start_month: None,
            fixed: FixedParts::default(),
            is_date_disabled: None,
            additional_date_classes: None,
        }
    }
}

impl std::fmt::Debug for DatePickerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            min_date,
            max_date,
            open_to,
            first_day_of_week,
            closing_delay,
            display_months,
            auto_close,
            editable,
            show_week_numbers,
            start_month,
            fixed,
            is_date_disabled,
            additional_date_classes,
        } = self;
        f.debug_struct("DatePickerConfig")
            .field("min_date", min_date)
            .field("max_date", max_date)
            .field("open_to", open_to)
            .field("first_day_of_week", first_day_of_week)
            .field("closing_delay", closing_delay)
            .field("display_months", display_months)
            .field("auto_close", auto_close)
            .field("editable", editable)
            .field("show_week_numbers", show_week_numbers)
            .field("start_month", start_month)
            .field("fixed", fixed)
            .field("is_date_disabled", &is_date_disabled.is_some())
            .field("additional_date_classes", &additional_date_classes.is_some())
            .finish()
    }
}

impl DatePickerConfig {
    #[inline]
    pub fn min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    #[inline]
    pub fn max_date(mut self, max_date: NaiveDate) -> Self {
        self.max_date = Some(max_date);
        self
    }

    #[inline]
    pub fn open_to(mut self, open_to: ViewMode) -> Self {
        self.open_to = open_to;
        self
    }

    #[inline]
    pub fn first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    #[inline]
    pub fn closing_delay(mut self, closing_delay: Duration) -> Self {
        self.closing_delay = closing_delay;
        self
    }

    /// Show this many months side by side. At least one.
    #[inline]
    pub fn display_months(mut self, display_months: u32) -> Self {
        self.display_months = display_months.max(1);
        self
    }

    #[inline]
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    #[inline]
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    #[inline]
    pub fn show_week_numbers(mut self, show_week_numbers: bool) -> Self {
        self.show_week_numbers = show_week_numbers;
        self
    }

    #[inline]
    pub fn start_month(mut self, start_month: NaiveDate) -> Self {
        self.start_month = Some(start_month);
        self
    }

    /// Don't let the user pick another Persian year.
    #[inline]
    pub fn fix_year(mut self, year: i32) -> Self {
        self.fixed.year = Some(year);
        self
    }

    /// Don't let the user pick another Persian month (`1..=12`).
    #[inline]
    pub fn fix_month(mut self, month: u8) -> Self {
        self.fixed.month = Some(month);
        self
    }

    /// Don't let the user pick another day of the month.
    #[inline]
    pub fn fix_day(mut self, day: u8) -> Self {
        self.fixed.day = Some(day);
        self
    }

    /// Dates for which `is_disabled` returns `true` can't be picked.
    pub fn disabled_dates(mut self, is_disabled: impl Fn(NaiveDate) -> bool + 'static) -> Self {
        self.is_date_disabled = Some(Box::new(is_disabled));
        self
    }

    /// Extra space-separated style classes for a day cell.
    pub fn date_classes(mut self, classes: impl Fn(NaiveDate) -> String + 'static) -> Self {
        self.additional_date_classes = Some(Box::new(classes));
        self
    }

    /// Is the date outside `min_date..=max_date`, or rejected by [`Self::disabled_dates`]?
    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        self.min_date.is_some_and(|min| date < min)
            || self.max_date.is_some_and(|max| max < date)
            || self.is_date_disabled.as_ref().is_some_and(|f| f(date))
    }

    /// Classes from [`Self::date_classes`], or an empty string.
    pub fn additional_date_classes(&self, date: NaiveDate) -> String {
        self.additional_date_classes
            .as_ref()
            .map(|f| f(date))
            .unwrap_or_default()
    }
}
