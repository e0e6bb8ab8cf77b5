/// Which calendar view the picker shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ViewMode {
    /// A scrollable list of years.
    Year,

    /// The twelve months of the displayed year.
    Month,

    /// The day grid of the displayed month(s).
    #[default]
    Date,
}

/// Parts of the date that the user can't change.
///
/// A fixed month or day removes the corresponding view from the
/// Year → Month → Date sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct FixedParts {
    /// Stops the user from opening the year list.
    pub year: Option<i32>,

    /// Skips the month view.
    pub month: Option<u8>,

    /// Skips the day view.
    pub day: Option<u8>,
}

impl FixedParts {
    /// The view to open with when asked to open at `open_to`.
    ///
    /// A fixed day makes the day grid pointless, so we open at the
    /// month list instead, or at the year list if the month is fixed too.
    pub fn initial_view(&self, open_to: ViewMode) -> ViewMode {
        match (open_to, self.month, self.day) {
            (ViewMode::Date, Some(_), Some(_)) => ViewMode::Year,
            (ViewMode::Date, None, Some(_)) => ViewMode::Month,
            _ => open_to,
        }
    }

    /// The view that follows `current` after the user picks a year or month.
    ///
    /// `None` means there is nothing left to pick.
    ///
    /// ```
    /// # use jalali_datepicker::{FixedParts, ViewMode};
    /// let free = FixedParts::default();
    /// assert_eq!(free.next_view(ViewMode::Year), Some(ViewMode::Month));
    /// assert_eq!(free.next_view(ViewMode::Date), None);
    ///
    /// let fixed_month = FixedParts { month: Some(5), ..Default::default() };
    /// assert_eq!(fixed_month.next_view(ViewMode::Year), Some(ViewMode::Date));
    /// ```
    pub fn next_view(&self, current: ViewMode) -> Option<ViewMode> {
        match current {
            ViewMode::Year if self.month.is_none() => Some(ViewMode::Month),
            ViewMode::Year | ViewMode::Month if self.day.is_none() => Some(ViewMode::Date),
            ViewMode::Year | ViewMode::Month | ViewMode::Date => None,
        }
    }
}
