//! The state machine behind a Jalali (Persian calendar) date picker.
//!
//! This crate knows nothing about rendering. Your UI code asks a [`DatePicker`]
//! what to draw and tells it what the user did:
//!
//! ```
//! use chrono::NaiveDate;
//! use jalali_datepicker::{DatePicker, DatePickerConfig, ViewMode};
//!
//! let config = DatePickerConfig::default().auto_close(true);
//! let today = NaiveDate::from_ymd_opt(2023, 3, 21).unwrap();
//! let mut picker = DatePicker::with_today("due_date", config, today);
//!
//! picker.open();
//! for offset in picker.month_offsets() {
//!     for week in picker.weeks(offset).unwrap() {
//!         for day in week.days {
//!             let cell = picker.day_cell(offset, day);
//!             // draw `cell.label`, grayed out if `cell.disabled`…
//!         }
//!     }
//! }
//!
//! // The user clicks Nowruz:
//! picker.on_day_clicked(today, 10.0);
//! assert_eq!(picker.value(), Some(today));
//!
//! // A moment later the picker closes itself:
//! assert!(!picker.update(10.05));
//! assert!(picker.update(10.1));
//! assert!(!picker.is_open());
//! ```
//!
//! The user can switch between a year list, a month view and the day grid ([`ViewMode`]).
//! Fixing parts of the date with [`DatePickerConfig::fix_month`] etc. skips views.
//!
//! Implement [`PickerHooks`] to hear about changes, e.g. to scroll the year list.
//!
//! Calendar math lives in [`jalali_calendar`].
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod cells;
mod closing_timer;
mod config;
mod error;
mod hooks;
mod picker;
mod view;

pub use jalali_calendar;

pub use self::{
    cells::{DayCell, MonthCell, Week, YearCell},
    closing_timer::ClosingTimer,
    config::DatePickerConfig,
    error::PickerError,
    hooks::PickerHooks,
    picker::{DatePicker, DatePickerState, MAX_WEEKS_PER_MONTH},
    view::{FixedParts, ViewMode},
};
