use chrono::Weekday;

/// Persian names of the solar months, Farvardin first.
pub const PERSIAN_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// One-letter Persian weekday labels, starting with Saturday (شنبه).
pub const PERSIAN_WEEKDAY_ABBREVIATIONS: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Persian month name for `1..=12`.
pub fn persian_month_name(month: u8) -> Option<&'static str> {
    PERSIAN_MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

/// Index into [`PERSIAN_WEEKDAY_ABBREVIATIONS`]: Saturday is `0`, Friday is `6`.
#[inline]
pub fn persian_weekday_index(weekday: Weekday) -> usize {
    ((weekday.num_days_from_sunday() + 1) % 7) as usize
}

/// ```
/// # use chrono::Weekday;
/// assert_eq!(jalali_calendar::persian_weekday_abbreviation(Weekday::Fri), "ج");
/// ```
pub fn persian_weekday_abbreviation(weekday: Weekday) -> &'static str {
    PERSIAN_WEEKDAY_ABBREVIATIONS[persian_weekday_index(weekday)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lookup() {
        assert_eq!(persian_month_name(1), Some("فروردین"));
        assert_eq!(persian_month_name(12), Some("اسفند"));
        assert_eq!(persian_month_name(0), None);
        assert_eq!(persian_month_name(13), None);
    }

    #[test]
    fn weekday_lookup() {
        assert_eq!(persian_weekday_index(Weekday::Sat), 0);
        assert_eq!(persian_weekday_index(Weekday::Sun), 1);
        assert_eq!(persian_weekday_index(Weekday::Fri), 6);
        assert_eq!(persian_weekday_abbreviation(Weekday::Sat), "ش");
    }
}
