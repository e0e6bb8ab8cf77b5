use chrono::{NaiveDate, Weekday};
use jalali_datepicker::{
    DatePicker, DatePickerConfig, PickerError, PickerHooks, ViewMode,
    jalali_calendar::{self as calendar, add_months},
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Open,
    Close,
    Anchor(Option<NaiveDate>),
    View(ViewMode),
    Value(Option<NaiveDate>),
    Scroll(String),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl PickerHooks for Recorder {
    fn on_open(&mut self) {
        self.events.push(Event::Open);
    }

    fn on_close(&mut self) {
        self.events.push(Event::Close);
    }

    fn on_anchor_changed(&mut self, picker_month: Option<NaiveDate>) {
        self.events.push(Event::Anchor(picker_month));
    }

    fn on_view_changed(&mut self, view: ViewMode) {
        self.events.push(Event::View(view));
    }

    fn on_value_changed(&mut self, value: Option<NaiveDate>) {
        self.events.push(Event::Value(value));
    }

    fn scroll_to_year(&mut self, element_id: &str) {
        self.events.push(Event::Scroll(element_id.to_owned()));
    }
}

fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn persian(year: i32, month: u8, day: u8) -> NaiveDate {
    calendar::to_gregorian(year, month, day).unwrap()
}

/// Today is 1402/1/1.
fn picker(config: DatePickerConfig) -> DatePicker<Recorder> {
    init_logging();
    DatePicker::with_today("picker", config, ymd(2023, 3, 21)).with_hooks(Recorder::default())
}

#[test]
fn nowruz_grid_starts_on_saturday() {
    let mut picker = picker(DatePickerConfig::default());
    picker.open();
    assert_eq!(picker.picker_month(), Some(ymd(2023, 3, 21)));

    let week = picker.week(0, 0).unwrap();
    let expected: Vec<NaiveDate> = (18..=24).map(|day| ymd(2023, 3, day)).collect();
    similar_asserts::assert_eq!(week.to_vec(), expected);
}

#[test]
fn invalid_week_index_is_an_error() {
    let picker = picker(DatePickerConfig::default());
    assert_eq!(picker.week(0, 6), Err(PickerError::InvalidWeekIndex(6)));
    assert_eq!(
        PickerError::InvalidWeekIndex(6).to_string(),
        "week index must be between 0 and 5, got 6"
    );
}

#[test]
fn fixed_day_beyond_month_length_disables_month() {
    let picker = picker(
        DatePickerConfig::default()
            .fix_day(31)
            .min_date(ymd(1900, 1, 1))
            .max_date(ymd(2100, 1, 1)),
    );
    for month in 7..=12 {
        assert!(
            picker.is_month_disabled(persian(1402, month, 1)),
            "month {month} has fewer than 31 days"
        );
    }
    for month in 1..=6 {
        assert!(!picker.is_month_disabled(persian(1402, month, 1)), "month {month}");
    }
}

#[test]
fn fixed_month_and_day_open_at_year_list() {
    let mut picker = picker(
        DatePickerConfig::default()
            .open_to(ViewMode::Date)
            .fix_month(5)
            .fix_day(7),
    );
    assert_eq!(picker.initial_view(), ViewMode::Year);

    picker.open();
    assert_eq!(picker.current_view(), ViewMode::Year);

    similar_asserts::assert_eq!(
        picker.hooks_mut().take(),
        vec![
            Event::Anchor(Some(persian(1402, 1, 1))),
            Event::View(ViewMode::Year),
            Event::Open,
        ]
    );

    picker.after_render();
    assert_eq!(
        picker.hooks_mut().take(),
        vec![Event::Scroll("picker1402".to_owned())]
    );

    picker.after_render();
    assert!(picker.hooks().events.is_empty(), "scroll request is consumed");

    picker.on_year_selected(1390).unwrap();
    assert_eq!(picker.current_view(), ViewMode::Year, "nothing left to pick");
    assert_eq!(picker.picker_month(), Some(persian(1390, 1, 1)));
}

#[test]
fn year_month_day_sequence() {
    let mut picker = picker(DatePickerConfig::default().open_to(ViewMode::Year));
    picker.open();
    picker.hooks_mut().take();

    picker.on_year_selected(1399).unwrap();
    assert_eq!(picker.current_view(), ViewMode::Month);

    picker.on_month_selected(persian(1399, 12, 14));
    assert_eq!(picker.current_view(), ViewMode::Date);
    assert_eq!(picker.picker_month(), Some(persian(1399, 12, 1)));

    similar_asserts::assert_eq!(
        picker.hooks_mut().take(),
        vec![
            Event::Anchor(Some(persian(1399, 1, 1))),
            Event::View(ViewMode::Month),
            Event::Anchor(Some(persian(1399, 12, 1))),
            Event::View(ViewMode::Date),
        ]
    );

    assert!(matches!(
        picker.on_year_selected(0),
        Err(PickerError::Calendar(_))
    ));
}

#[test]
fn fixed_month_skips_month_view() {
    let mut picker = picker(
        DatePickerConfig::default()
            .open_to(ViewMode::Year)
            .fix_month(3),
    );
    picker.open();
    picker.on_year_selected(1400).unwrap();
    assert_eq!(picker.current_view(), ViewMode::Date);
}

#[test]
fn year_label_respects_fixed_year() {
    let mut picker = picker(DatePickerConfig::default());
    picker.open();
    picker.on_year_label_clicked();
    assert_eq!(picker.current_view(), ViewMode::Year);
    assert!(picker.state().scroll_to_year_pending);

    let mut fixed = self::picker(DatePickerConfig::default().fix_year(1402));
    fixed.open();
    fixed.on_year_label_clicked();
    assert_eq!(fixed.current_view(), ViewMode::Date);
    assert!(!fixed.state().scroll_to_year_pending);
}

#[test]
fn month_header_click_opens_month_view() {
    let mut picker = picker(DatePickerConfig::default().display_months(3));
    picker.open();
    assert_eq!(picker.month_offsets(), 0..3);
    assert_eq!(picker.month_name(2), "خرداد");

    picker.on_month_clicked(2);
    assert_eq!(picker.current_view(), ViewMode::Month);
    assert_eq!(picker.picker_month(), Some(persian(1402, 3, 1)));
}

#[test]
fn previous_month_at_calendar_start_is_a_no_op() {
    let mut picker = picker(DatePickerConfig::default());
    picker.set_picker_month(Some(persian(1, 1, 1))).unwrap();
    picker.hooks_mut().take();

    picker.previous_month();
    assert_eq!(picker.picker_month(), Some(persian(1, 1, 1)));
    assert!(picker.hooks().events.is_empty(), "no anchor change");
}

#[test]
fn next_month_matches_add_months() {
    let start = persian(1399, 11, 1);
    let mut picker = picker(DatePickerConfig::default());
    picker.set_picker_month(Some(start)).unwrap();
    for n in 1..=40 {
        picker.next_month();
        assert_eq!(picker.picker_month(), Some(add_months(start, n)), "after {n} months");
    }
}

#[test]
fn editable_text_decides_the_month_on_open() {
    let mut picker = picker(DatePickerConfig::default().editable(true));
    picker.set_text("۱۴۰۳/۷/۱۵");
    assert_eq!(picker.value(), Some(persian(1403, 7, 15)));

    picker.open();
    assert_eq!(picker.picker_month(), Some(persian(1403, 7, 1)));
    assert_eq!(picker.displayed_year(), 1403);
}

#[test]
fn start_month_is_used_without_value() {
    let mut picker = picker(DatePickerConfig::default().start_month(persian(1380, 4, 20)));
    picker.open();
    assert_eq!(picker.picker_month(), Some(persian(1380, 4, 1)));
}

#[test]
fn start_month_wins_over_value() {
    let mut picker = picker(DatePickerConfig::default().start_month(persian(1380, 4, 20)));
    picker.set_value(Some(persian(1399, 9, 3)));
    picker.open();
    assert_eq!(picker.picker_month(), Some(persian(1380, 4, 1)));
    assert_eq!(picker.value(), Some(persian(1399, 9, 3)));

    let mut picker = self::picker(DatePickerConfig::default());
    picker.set_value(Some(persian(1399, 9, 3)));
    picker.open();
    assert_eq!(picker.picker_month(), Some(persian(1399, 9, 1)));
}

#[test]
fn auto_close_after_delay() {
    let mut picker = picker(DatePickerConfig::default().auto_close(true));
    picker.open();
    picker.hooks_mut().take();

    assert!(picker.on_day_clicked(ymd(2023, 3, 22), 5.0));
    assert_eq!(picker.text(), "1402/1/2");
    assert!(picker.time_until_close(5.0).is_some());
    assert!(!picker.update(5.05));

    // A second click before the picker closed pushes the close back.
    assert!(picker.on_day_clicked(ymd(2023, 3, 23), 5.06));
    assert!(!picker.update(5.12));
    assert!(picker.update(5.2));
    assert!(!picker.is_open());
    assert!(!picker.update(6.0), "closes only once");

    similar_asserts::assert_eq!(
        picker.hooks_mut().take(),
        vec![
            Event::Value(Some(ymd(2023, 3, 22))),
            Event::Value(Some(ymd(2023, 3, 23))),
            Event::Close,
        ]
    );
}

#[test]
fn no_auto_close_by_default() {
    let mut picker = picker(DatePickerConfig::default());
    picker.open();
    picker.on_day_clicked(ymd(2023, 3, 22), 0.0);
    assert_eq!(picker.time_until_close(0.0), None);
    assert!(!picker.update(100.0));
    assert!(picker.is_open());
}

#[test]
fn reopening_cancels_pending_close() {
    let mut picker = picker(DatePickerConfig::default().auto_close(true));
    picker.open();
    picker.on_day_clicked(ymd(2023, 3, 22), 0.0);
    picker.close();
    picker.open();
    assert!(!picker.update(1.0));
    assert!(picker.is_open());
}

#[test]
fn week_numbers_with_sunday_start() {
    let mut picker = picker(
        DatePickerConfig::default()
            .first_day_of_week(Weekday::Sun)
            .show_week_numbers(true),
    );
    picker.open();
    assert_eq!(picker.abbreviated_day_names()[0], "ی");

    let weeks = picker.weeks(0).unwrap();
    assert_eq!(weeks[0].days[0], ymd(2023, 3, 19));
    assert_eq!(weeks[0].number, "1");
    assert_eq!(weeks[1].days[0], ymd(2023, 3, 26));
    assert_eq!(weeks[1].number, "2");
}

#[cfg(feature = "serde")]
#[test]
fn state_survives_serialization() {
    let mut picker = picker(DatePickerConfig::default());
    picker.open();
    picker.on_day_clicked(ymd(2023, 3, 22), 0.0);
    picker.on_year_label_clicked();

    let json = serde_json::to_string(picker.state()).unwrap();
    let state: jalali_datepicker::DatePickerState = serde_json::from_str(&json).unwrap();
    similar_asserts::assert_eq!(&state, picker.state());

    let restored = DatePicker::with_today("picker", DatePickerConfig::default(), ymd(2023, 3, 21))
        .with_state(state);
    assert_eq!(restored.current_view(), ViewMode::Year);
    assert_eq!(restored.value(), Some(ymd(2023, 3, 22)));
}
