use chrono::NaiveDate;

use crate::ViewMode;

/// Callbacks from a [`crate::DatePicker`] to whatever hosts it.
///
/// All methods have empty default implementations, so implement only what you need.
/// `()` is the "no hooks" implementation.
///
/// The picker calls these synchronously and never waits for any work they start.
#[expect(unused_variables)]
pub trait PickerHooks {
    /// The picker was opened and has settled on its initial view.
    fn on_open(&mut self) {}

    /// The picker wants to close (e.g. after a day was picked with `auto_close`).
    fn on_close(&mut self) {}

    /// The displayed month changed.
    ///
    /// `picker_month` is the first day of the new month, in Gregorian.
    fn on_anchor_changed(&mut self, picker_month: Option<NaiveDate>) {}

    /// The user moved between the year, month and day views.
    fn on_view_changed(&mut self, view: ViewMode) {}

    /// A day was picked, or the value was set from text.
    fn on_value_changed(&mut self, value: Option<NaiveDate>) {}

    /// Scroll the year list so the element with this id is visible.
    ///
    /// The id is [`crate::DatePicker::year_scroll_id`] of the displayed year.
    fn scroll_to_year(&mut self, element_id: &str) {}
}

impl PickerHooks for () {}
