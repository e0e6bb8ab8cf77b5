//! Conversion between Western digits and Persian (Extended Arabic-Indic) digits.

const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// The value of a decimal digit in any of the three scripts we care about.
fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        '\u{0660}'..='\u{0669}' => Some(c as u32 - ARABIC_INDIC_ZERO),
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - PERSIAN_ZERO),
        _ => None,
    }
}

fn persian_digit(value: u32) -> char {
    char::from_u32(PERSIAN_ZERO + value).unwrap_or('?')
}

/// Replace ASCII and Arabic-Indic digits with Persian digits (`۰` - `۹`).
///
/// Everything else is left untouched.
///
/// ```
/// # use jalali_calendar::localize_digits;
/// assert_eq!(localize_digits("1402/1/1"), "۱۴۰۲/۱/۱");
/// assert_eq!(localize_digits("\u{0661}\u{0662}"), "۱۲");
/// assert_eq!(localize_digits("week 3"), "week ۳");
/// ```
pub fn localize_digits(text: &str) -> String {
    text.chars()
        .map(|c| digit_value(c).map_or(c, persian_digit))
        .collect()
}

/// Replace Persian and Arabic-Indic digits with ASCII digits.
///
/// Everything else is left untouched.
///
/// ```
/// # use jalali_calendar::delocalize_digits;
/// assert_eq!(delocalize_digits("۱۴۰۲/۱/۱"), "1402/1/1");
/// assert_eq!(delocalize_digits("\u{0661}\u{0662}"), "12");
/// ```
pub fn delocalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' | '\u{06F0}'..='\u{06F9}' => {
                digit_value(c).and_then(|v| char::from_digit(v, 10)).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Render any value for Persian display.
///
/// Digits become Persian digits, `.` becomes `/` (so `1402.1.1` reads as a date),
/// and the Arabic letters yeh (`ي`) and kaf (`ك`) become their Persian forms (`ی`, `ک`).
///
/// ```
/// # use jalali_calendar::to_persian_string;
/// assert_eq!(to_persian_string(1402), "۱۴۰۲");
/// assert_eq!(to_persian_string("1402.1.1"), "۱۴۰۲/۱/۱");
/// assert_eq!(to_persian_string("كيف"), "کیف");
/// ```
pub fn to_persian_string(value: impl std::fmt::Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c {
            '0'..='9' => persian_digit(c as u32 - '0' as u32),
            '.' => '/',
            'ي' => 'ی',
            'ك' => 'ک',
            _ => c,
        })
        .collect()
}
