//! Solar Hijri (Jalali, Persian) calendar math for date pickers.
//!
//! The host works with Gregorian [`chrono::NaiveDate`]s. This crate converts them
//! to and from [`CalendarDate`] and does all arithmetic in Persian month/year space:
//!
//! ```
//! use chrono::NaiveDate;
//! use jalali_calendar::CalendarDate;
//!
//! let nowruz = CalendarDate::new(1402, 1, 1).unwrap();
//! assert_eq!(nowruz.to_gregorian(), NaiveDate::from_ymd_opt(2023, 3, 21).unwrap());
//! assert_eq!(nowruz.to_string(), "1402/1/1");
//! ```
//!
//! Leap years follow the fixed 33-year arithmetic rule, see [`is_leap_year`].
//! The calendar is proleptic: no historical reform is modeled.
//!
//! ## Conventions
//! Months are numbered `1..=12` (Farvardin is `1`) and days `1..=31`.
//! Years start at `1`; earlier dates are not representable.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod arithmetic;
mod date;
mod digits;
mod error;
mod names;
pub mod text;

pub use arithmetic::*;
pub use date::*;
pub use digits::*;
pub use error::*;
pub use names::*;
