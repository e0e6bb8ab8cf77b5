use jalali_calendar::CalendarError;

/// Errors from [`crate::DatePicker`] queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// A month grid has at most six weeks.
    #[error("week index must be between 0 and 5, got {0}")]
    InvalidWeekIndex(usize),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

pub(crate) type Result<T, E = PickerError> = std::result::Result<T, E>;
