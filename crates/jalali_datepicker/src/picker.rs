use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::{Datelike as _, NaiveDate, Weekday};

use jalali_calendar::{self as calendar, CalendarDate, text};

use crate::error::{PickerError, Result};
use crate::{
    ClosingTimer, DatePickerConfig, DayCell, MonthCell, PickerHooks, ViewMode, Week, YearCell,
};

/// A month grid never needs more rows than this.
pub const MAX_WEEKS_PER_MONTH: usize = 6;

/// The part of a [`DatePicker`] that changes as the user interacts with it.
///
/// Store it between frames (e.g. in egui's memory) if you rebuild the picker every frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DatePickerState {
    /// Gregorian date of the first day of the displayed Persian month.
    ///
    /// `None` means the month of today.
    pub picker_month: Option<NaiveDate>,

    pub current_view: ViewMode,

    /// The picked date.
    pub value: Option<NaiveDate>,

    /// Contents of the text field. May not be a valid date while the user is typing.
    pub text: String,

    /// Scroll the year list to the displayed year after the next render.
    pub scroll_to_year_pending: bool,

    pub is_open: bool,
}

/// The logic of a Persian calendar date picker, with no rendering.
///
/// Feed it user interactions (`on_*` methods, navigation), ask it what to draw
/// (`*_cell`, [`Self::weeks`], labels) and it calls back into your [`PickerHooks`].
///
/// ```
/// # use chrono::NaiveDate;
/// # use jalali_datepicker::{DatePicker, DatePickerConfig, ViewMode};
/// let today = NaiveDate::from_ymd_opt(2023, 3, 21).unwrap(); // 1402/1/1
/// let mut picker = DatePicker::with_today("birthday", DatePickerConfig::default(), today);
///
/// picker.open();
/// assert_eq!(picker.current_view(), ViewMode::Date);
/// assert_eq!(picker.month_name(0), "فروردین");
///
/// picker.on_day_clicked(today, 0.0);
/// assert_eq!(picker.text(), "1402/1/1");
/// ```
pub struct DatePicker<H: PickerHooks = ()> {
    /// Unique among pickers, used to derive element ids.
    id: String,
    config: DatePickerConfig,
    state: DatePickerState,
    closing_timer: ClosingTimer,
    today: NaiveDate,
    hooks: H,
}

impl<H: PickerHooks> std::fmt::Debug for DatePicker<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePicker")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("closing_timer", &self.closing_timer)
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}

impl DatePicker {
    /// `id` must be unique among the pickers on screen.
    pub fn new(id: impl Into<String>, config: DatePickerConfig) -> Self {
        Self::with_today(id, config, chrono::Local::now().date_naive())
    }

    /// Like [`Self::new`], but with a fixed idea of what today is.
    pub fn with_today(id: impl Into<String>, config: DatePickerConfig, today: NaiveDate) -> Self {
        let closing_timer = ClosingTimer::new(config.closing_delay);
        let state = DatePickerState {
            current_view: config.open_to,
            ..Default::default()
        };
        Self {
            id: id.into(),
            config,
            state,
            closing_timer,
            today,
            hooks: (),
        }
    }
}

impl<H: PickerHooks> DatePicker<H> {
    /// Replace the hooks.
    pub fn with_hooks<H2: PickerHooks>(self, hooks: H2) -> DatePicker<H2> {
        let Self {
            id,
            config,
            state,
            closing_timer,
            today,
            hooks: _,
        } = self;
        DatePicker {
            id,
            config,
            state,
            closing_timer,
            today,
            hooks,
        }
    }

    /// Restore state saved from an earlier [`Self::state`].
    #[inline]
    pub fn with_state(mut self, state: DatePickerState) -> Self {
        self.state = state;
        self
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn config(&self) -> &DatePickerConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &DatePickerState {
        &self.state
    }

    #[inline]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    #[inline]
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    #[inline]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Call this when the date changes, e.g. at midnight.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    // ------------------------------------------------------------------------
    // Lifecycle

    /// The picker popup was opened.
    ///
    /// Picks the month to display and the initial view, and cancels any pending close.
    pub fn open(&mut self) {
        self.state.is_open = true;
        self.closing_timer.cancel();

        if self.config.editable
            && let Some(date) = text::parse_date(&self.state.text)
        {
            self.set_anchor(date.first_of_month().to_gregorian());
        }
        if self.state.picker_month.is_none() {
            self.set_anchor(self.calendar_start_of_month());
        }

        let view = self.initial_view();
        self.set_view(view);
        if view == ViewMode::Year {
            self.state.scroll_to_year_pending = true;
        }

        log::trace!("Date picker {:?} opened at {view:?}", self.id);
        self.hooks.on_open();
    }

    /// Close the picker now. Does nothing if it is already closed.
    pub fn close(&mut self) {
        self.closing_timer.cancel();
        if self.state.is_open {
            self.state.is_open = false;
            log::trace!("Date picker {:?} closed", self.id);
            self.hooks.on_close();
        }
    }

    /// Call every frame with the current time in seconds.
    ///
    /// Returns `true` if the picker closed itself.
    pub fn update(&mut self, now: f64) -> bool {
        if self.closing_timer.poll(now) && self.state.is_open {
            self.close();
            true
        } else {
            false
        }
    }

    /// How long until [`Self::update`] will close the picker, if a close is pending.
    pub fn time_until_close(&self, now: f64) -> Option<Duration> {
        self.closing_timer.time_until_close(now)
    }

    /// Call after the picker has been rendered.
    ///
    /// Carries out a pending request to scroll the year list.
    pub fn after_render(&mut self) {
        if std::mem::take(&mut self.state.scroll_to_year_pending) {
            let id = self.year_scroll_id(self.displayed_year());
            self.hooks.scroll_to_year(&id);
        }
    }

    // ------------------------------------------------------------------------
    // Views

    #[inline]
    pub fn current_view(&self) -> ViewMode {
        self.state.current_view
    }

    /// The view the picker opens at, taking fixed date parts into account.
    pub fn initial_view(&self) -> ViewMode {
        self.config.fixed.initial_view(self.config.open_to)
    }

    /// The view to move to after the user picks something in the current one.
    pub fn next_view(&self) -> Option<ViewMode> {
        self.config.fixed.next_view(self.state.current_view)
    }

    fn set_view(&mut self, view: ViewMode) {
        if self.state.current_view != view {
            log::trace!(
                "Date picker {:?}: {:?} -> {view:?}",
                self.id,
                self.state.current_view
            );
            self.state.current_view = view;
            self.hooks.on_view_changed(view);
        }
    }

    fn advance_view(&mut self) {
        if let Some(view) = self.next_view() {
            self.set_view(view);
        }
    }

    // ------------------------------------------------------------------------
    // Displayed month and value

    /// Gregorian date of the first day of the displayed Persian month, if set.
    #[inline]
    pub fn picker_month(&self) -> Option<NaiveDate> {
        self.state.picker_month
    }

    /// Display the Persian month containing `date`, or the month of today for `None`.
    ///
    /// # Errors
    /// [`PickerError::Calendar`] if `date` is outside the supported range.
    pub fn set_picker_month(&mut self, date: Option<NaiveDate>) -> Result<()> {
        match date {
            Some(date) => {
                let month = CalendarDate::from_gregorian(date)?.first_of_month();
                self.set_anchor(month.to_gregorian());
            }
            None => {
                if self.state.picker_month.take().is_some() {
                    self.hooks.on_anchor_changed(None);
                }
            }
        }
        Ok(())
    }

    fn set_anchor(&mut self, month_start: NaiveDate) {
        let month_start = calendar::first_of_month(month_start);
        if self.state.picker_month != Some(month_start) {
            log::trace!(
                "Date picker {:?} shows {}",
                self.id,
                CalendarDate::from_gregorian_clamped(month_start)
            );
            self.state.picker_month = Some(month_start);
            self.hooks.on_anchor_changed(Some(month_start));
        }
    }

    /// The month to show on open when nothing else decides it.
    ///
    /// A configured `start_month` beats the picked value, which beats today.
    fn calendar_start_of_month(&self) -> NaiveDate {
        let date = self
            .config
            .start_month
            .or(self.state.value)
            .unwrap_or(self.today);
        calendar::first_of_month(date)
    }

    #[inline]
    pub fn value(&self) -> Option<NaiveDate> {
        self.state.value
    }

    /// Set the picked date. Also updates [`Self::text`].
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.state.text = value
            .and_then(text::format_gregorian)
            .unwrap_or_default();
        self.store_value(value);
    }

    fn store_value(&mut self, value: Option<NaiveDate>) {
        if self.state.value != value {
            self.state.value = value;
            self.hooks.on_value_changed(value);
        }
    }

    /// The text field contents, normally `year/month/day` of [`Self::value`].
    #[inline]
    pub fn text(&self) -> &str {
        &self.state.text
    }

    /// The user typed into the text field.
    ///
    /// Text that isn't a valid date clears the value.
    pub fn set_text(&mut self, text: &str) {
        self.state.text = text.to_owned();
        self.store_value(text::parse_gregorian(text));
    }

    /// `day month-name` of the value in Persian, or empty.
    pub fn title(&self) -> String {
        self.state
            .value
            .and_then(|value| CalendarDate::from_gregorian(value).ok())
            .map(text::format_title)
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------------
    // Interactions

    /// The user picked a year in the year list.
    ///
    /// # Errors
    /// [`PickerError::Calendar`] if the year is outside the supported range.
    pub fn on_year_selected(&mut self, year: i32) -> Result<()> {
        let first_of_year = calendar::to_gregorian(year, 1, 1)?;
        self.set_anchor(first_of_year);
        self.advance_view();
        Ok(())
    }

    /// The user picked a month in the month view.
    pub fn on_month_selected(&mut self, month_start: NaiveDate) {
        self.set_anchor(month_start);
        self.advance_view();
    }

    /// The user clicked the header of the month at `offset`.
    pub fn on_month_clicked(&mut self, offset: i32) {
        self.set_view(ViewMode::Month);
        self.set_anchor(self.month_start(offset));
    }

    /// The user clicked the year in the header.
    pub fn on_year_label_clicked(&mut self) {
        if self.config.fixed.year.is_none() {
            self.set_view(ViewMode::Year);
            self.state.scroll_to_year_pending = true;
        }
    }

    /// The user clicked a day in the grid.
    ///
    /// * `now`: current time in seconds, for the closing delay.
    ///
    /// Returns `false` if the day is disabled.
    pub fn on_day_clicked(&mut self, date: NaiveDate, now: f64) -> bool {
        if self.is_day_disabled(date) {
            return false;
        }
        self.set_value(Some(date));
        if self.config.auto_close {
            self.closing_timer.schedule(now);
        }
        true
    }

    // ------------------------------------------------------------------------
    // Navigation

    fn is_at_first_month(&self) -> bool {
        let month = self.persian(self.month_start(0));
        month.year() == 1 && month.month() == 1
    }

    pub fn previous_month(&mut self) {
        if !self.is_at_first_month() {
            self.set_anchor(calendar::add_months(self.month_start(0), -1));
        }
    }

    pub fn next_month(&mut self) {
        self.set_anchor(calendar::shift_days(self.month_end(0), 1));
    }

    pub fn previous_year(&mut self) {
        if !self.is_at_first_month() {
            self.set_anchor(calendar::add_years(self.month_start(0), -1));
        }
    }

    pub fn next_year(&mut self) {
        self.set_anchor(calendar::add_years(self.month_start(0), 1));
    }

    // ------------------------------------------------------------------------
    // Month grid

    /// Offsets of the months shown side by side: `0..display_months`.
    pub fn month_offsets(&self) -> std::ops::Range<i32> {
        0..i32::try_from(self.config.display_months).unwrap_or(i32::MAX)
    }

    /// Gregorian date of the first day of the Persian month `offset` months after the displayed one.
    pub fn month_start(&self, offset: i32) -> NaiveDate {
        let anchor = calendar::first_of_month(self.state.picker_month.unwrap_or(self.today));
        // Past the last supported month `add_months` saturates mid-month.
        calendar::first_of_month(calendar::add_months(anchor, offset))
    }

    /// Gregorian date of the last day of the Persian month `offset` months after the displayed one.
    pub fn month_end(&self, offset: i32) -> NaiveDate {
        calendar::last_of_month(self.month_start(offset))
    }

    fn week_start(&self, offset: i32, index: usize) -> Result<NaiveDate> {
        if MAX_WEEKS_PER_MONTH <= index {
            return Err(PickerError::InvalidWeekIndex(index));
        }
        let days = 7 * index as i64;
        Ok(calendar::start_of_week(
            calendar::shift_days(self.month_start(offset), days),
            self.config.first_day_of_week,
        ))
    }

    /// Row `index` of the grid of the month at `offset`.
    ///
    /// # Errors
    /// [`PickerError::InvalidWeekIndex`] unless `index` is in `0..6`.
    pub fn week(&self, offset: i32, index: usize) -> Result<[NaiveDate; 7]> {
        let first = self.week_start(offset, index)?;
        Ok(std::array::from_fn(|day| {
            calendar::shift_days(first, day as i64)
        }))
    }

    /// Week of the Persian year for row `index`, blank if the row lies outside the month.
    ///
    /// # Errors
    /// [`PickerError::InvalidWeekIndex`] unless `index` is in `0..6`.
    pub fn week_number(&self, offset: i32, index: usize) -> Result<String> {
        let month_first = self.month_start(offset);
        let month = self.persian(month_first);

        let mut week_first = self.week_start(offset, index)?;
        if month.month() == 1 && index == 0 {
            // The row starting in Esfand still counts as week 1.
            week_first = month_first;
        }

        let in_month = |date: NaiveDate| {
            CalendarDate::from_gregorian(date)
                .is_ok_and(|date| (date.year(), date.month()) == (month.year(), month.month()))
        };
        if !calendar::is_supported(week_first)
            || (!in_month(week_first) && !in_month(calendar::shift_days(week_first, 6)))
        {
            return Ok(String::new());
        }

        let number = calendar::week_of_year(week_first, self.config.first_day_of_week)?;
        Ok(number.to_string())
    }

    /// All rows of the grid of the month at `offset`. Between two and six of them.
    ///
    /// # Errors
    /// Only if a row can't be numbered, which the supported range rules out.
    pub fn weeks(&self, offset: i32) -> Result<Vec<Week>> {
        let month_end = self.month_end(offset);
        let mut weeks = Vec::with_capacity(MAX_WEEKS_PER_MONTH);
        for index in 0..MAX_WEEKS_PER_MONTH {
            let days = self.week(offset, index)?;
            if index > 0 && month_end < days[0] {
                break;
            }
            weeks.push(Week {
                number: self.week_number(offset, index)?,
                days,
            });
        }
        Ok(weeks)
    }

    /// Weekday column headers, starting at the configured first day of the week.
    pub fn abbreviated_day_names(&self) -> [&'static str; 7] {
        let mut names = calendar::PERSIAN_WEEKDAY_ABBREVIATIONS;
        names.rotate_left(calendar::persian_weekday_index(
            self.config.first_day_of_week,
        ));
        names
    }

    /// Persian name of the month at `offset`.
    pub fn month_name(&self, offset: i32) -> &'static str {
        self.month_label(self.month_start(offset))
    }

    /// Persian name of the month containing `date`.
    pub fn month_label(&self, date: NaiveDate) -> &'static str {
        calendar::persian_month_name(self.persian(date).month()).unwrap_or_default()
    }

    /// The displayed Persian year.
    pub fn displayed_year(&self) -> i32 {
        self.persian(self.month_start(0)).year()
    }

    /// The displayed year in Persian digits.
    pub fn year_label(&self) -> String {
        calendar::to_persian_string(self.displayed_year())
    }

    pub fn is_day_disabled(&self, date: NaiveDate) -> bool {
        !calendar::is_supported(date) || self.config.is_date_disabled(date)
    }

    /// Can the month starting at `month_start` be picked in the month view?
    ///
    /// With a fixed day, that day of the month must exist and be enabled.
    pub fn is_month_disabled(&self, month_start: NaiveDate) -> bool {
        let month = CalendarDate::from_gregorian_clamped(month_start).first_of_month();
        match self.config.fixed.day {
            None => {
                let first = month.to_gregorian();
                let last = month.last_of_month().to_gregorian();
                self.config.min_date.is_some_and(|min| last < min)
                    || self.config.max_date.is_some_and(|max| max < first)
            }
            Some(day) => {
                if month.days_in_month() < day {
                    return true;
                }
                match calendar::to_gregorian(month.year(), month.month(), day) {
                    Ok(date) => self.config.is_date_disabled(date),
                    Err(_) => true,
                }
            }
        }
    }

    /// A cell in the day grid of the month at `offset`.
    pub fn day_cell(&self, offset: i32, date: NaiveDate) -> DayCell {
        let month = self.persian(self.month_start(offset));
        let today = date == self.today;
        let (label, outside_month) = match CalendarDate::from_gregorian(date) {
            Ok(day) => (
                calendar::to_persian_string(day.day()),
                (day.year(), day.month()) != (month.year(), month.month()),
            ),
            // Before 1/1/1 or after 9999-12-31.
            Err(_) => (String::new(), true),
        };
        DayCell {
            date,
            label,
            disabled: self.is_day_disabled(date),
            selected: self.state.value == Some(date),
            today,
            outside_month,
            holiday: date.weekday() == Weekday::Fri && !today,
            classes: self.config.additional_date_classes(date),
        }
    }

    // ------------------------------------------------------------------------
    // Month view

    /// First days of the months of the displayed Persian year.
    ///
    /// Twelve of them, except in the last supported year.
    pub fn all_months(&self) -> Vec<NaiveDate> {
        let year = self.displayed_year();
        (1..=12)
            .filter_map(|month| calendar::to_gregorian(year, month, 1).ok())
            .collect()
    }

    pub fn month_cell(&self, month_start: NaiveDate) -> MonthCell {
        let month_start = calendar::first_of_month(month_start);
        let disabled = self.is_month_disabled(month_start);
        let displayed = self.persian(self.month_start(0)).month();
        MonthCell {
            month_start,
            name: self.month_label(month_start),
            selected: self.persian(month_start).month() == displayed && !disabled,
            disabled,
        }
    }

    // ------------------------------------------------------------------------
    // Year view

    /// The first year in the year list.
    pub fn min_year(&self) -> i32 {
        self.config
            .min_date
            .map(|min| CalendarDate::from_gregorian_clamped(min).year())
            .unwrap_or_else(|| self.persian(self.today).year().saturating_sub(100))
            .clamp(1, calendar::MAX_YEAR)
    }

    /// The last year in the year list.
    pub fn max_year(&self) -> i32 {
        self.config
            .max_date
            .map(|max| CalendarDate::from_gregorian_clamped(max).year())
            .unwrap_or_else(|| self.persian(self.today).year().saturating_add(100))
            .clamp(1, calendar::MAX_YEAR)
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.min_year()..=self.max_year()
    }

    pub fn year_cell(&self, year: i32) -> YearCell {
        YearCell {
            year,
            label: calendar::to_persian_string(year),
            selected: year == self.displayed_year(),
            scroll_id: self.year_scroll_id(year),
        }
    }

    /// Element id of a year in the year list, unique among pickers.
    pub fn year_scroll_id(&self, year: i32) -> String {
        format!("{}{year}", self.id)
    }

    // ------------------------------------------------------------------------

    /// Dates derived from the anchor are always supported.
    fn persian(&self, date: NaiveDate) -> CalendarDate {
        CalendarDate::from_gregorian(date).unwrap_or_else(|err| {
            log::warn!("Date picker {:?}: {err}", self.id);
            CalendarDate::from_gregorian_clamped(date)
        })
    }
}
