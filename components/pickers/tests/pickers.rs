//! Pickers mounted on an in-memory record.

use serde_json::json;
use temporal_picker_components::{
    DayOfMonthPicker, MonthPicker, MonthRangePicker, Settings, TemporalPicker, WeekPicker,
    WeekdayPicker, YearPicker,
};
use temporal_picker_core::{Direction, MemoryChannel, PickerValue};
use time::Month;

#[test]
fn year_picker_rejects_years_outside_range() {
    let record = MemoryChannel::new(json!(null));
    let mut picker = YearPicker::new("founded").range(2000, 2010).mount(record.clone());
    assert!(!picker.toggle(1999));
    assert!(picker.toggle("2005"));
    assert_eq!(record.get(), json!(2005));
}

#[test]
fn month_picker_disables_month_of_every_year() {
    let record = MemoryChannel::new(json!([]));
    let mut picker = MonthPicker::new("billing")
        .multiple()
        .present_year(2024)
        .disabled_options([8])
        .mount(record.clone());

    assert!(picker.is_month_disabled(8));
    assert!(!picker.select_month(8));
    picker.navigate(Direction::Next);
    assert!(picker.is_month_disabled(8));
    assert!(picker.select_month(2));
    assert_eq!(record.get(), json!(["2025-02"]));
}

#[test]
fn month_range_picker_writes_both_fields() {
    let record = MemoryChannel::new(json!({"lease_start": null, "lease_end": null}));
    let mut picker = MonthRangePicker::new("lease")
        .min_date("2024-01")
        .max_date("2024-12")
        .present_year(2024)
        .mount(record.clone());

    picker.select_month(9);
    assert!(picker.hover_month(4));
    assert!(picker.is_month_in_range(6));
    picker.select_month(4);
    assert_eq!(record.get(), json!({"lease_start": "2024-04", "lease_end": "2024-09"}));
    assert_eq!(picker.display_text(), "2024-04 → 2024-09");
}

#[test]
fn weekday_integers_sort_numerically() {
    let record = MemoryChannel::new(json!(null));
    let mut picker = WeekdayPicker::new("open_on").as_integer().mount(record.clone());
    picker.toggle(6);
    picker.toggle("2");
    assert_eq!(record.get(), json!([2, 6]));
    assert_eq!(picker.display_text(), "Tuesday, Saturday");
}

#[test]
fn weekday_select_all_skips_disabled() {
    let record = MemoryChannel::new(json!([]));
    let mut picker = WeekdayPicker::new("open_on")
        .disabled_options(["sunday", "saturday"])
        .mount(record.clone());
    assert!(picker.select_all());
    assert_eq!(
        record.get(),
        json!(["monday", "tuesday", "wednesday", "thursday", "friday"])
    );
}

#[test]
fn day_of_month_picker_scenario() {
    let record = MemoryChannel::new(json!(null));
    let mut picker = DayOfMonthPicker::new("payday")
        .disabled_options([13])
        .mount(record.clone());
    picker.toggle(13);
    assert!(!picker.is_selected(13));
    picker.toggle(14);
    assert!(picker.is_selected(14));
    assert_eq!(picker.display_text(), "14");
}

#[test]
fn week_calendar_is_built_on_first_open() {
    let record = MemoryChannel::new(json!("2024-W10"));
    let mut session = WeekPicker::new("sprint")
        .year_range(2023, 2025)
        .mount_session(record);
    assert!(session.calendar().is_none());

    assert!(session.open());
    let calendar = session.calendar().expect("calendar after open");
    assert_eq!((calendar.year(), calendar.month()), (2024, Month::March));
    assert!(calendar.rows().iter().any(|row| row.value() == "2024-W10"));

    session.next_month();
    session.close();
    assert!(session.open());
    let calendar = session.calendar().expect("calendar kept after close");
    assert_eq!(calendar.month(), Month::April);
}

#[test]
fn week_numbers_outside_bounds_are_blocked() {
    let record = MemoryChannel::new(json!(null));
    let mut session = WeekPicker::new("sprint")
        .year_range(2023, 2025)
        .mount_session(record.clone());
    session.open();

    assert!(!session.click_week_number(2026, 1));
    assert_eq!(record.get(), json!(null));

    assert!(session.click_week_number(2025, 3));
    assert_eq!(record.get(), json!("2025-W03"));
    assert!(!session.machine().state().is_open());
}

#[test]
fn disabled_week_picker_never_builds_calendar() {
    let mut session = WeekPicker::new("sprint")
        .disabled(true)
        .mount_session(MemoryChannel::new(json!(null)));
    assert!(!session.open());
    assert!(session.calendar().is_none());
}

#[test]
fn settings_from_file_apply_to_pickers() {
    let path = std::env::temp_dir().join(format!("temporal-picker-{}.toml", std::process::id()));
    std::fs::write(&path, "locale = \"zh_CN\"\nweekday_format = \"integer\"\n").unwrap();
    let settings = Settings::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let picker = WeekdayPicker::new("open_on").settings(settings);
    assert_eq!(picker.placeholder(), "请选择星期");
    let record = MemoryChannel::new(json!(null));
    let mut machine = picker.mount(record.clone());
    machine.toggle(1);
    assert_eq!(record.get(), json!([1]));
    assert_eq!(machine.display_text(), "星期一");
}

#[test]
fn external_state_is_sanitized_per_picker() {
    let record = MemoryChannel::new(json!(["2019-05", "2024-05", "nonsense"]));
    let picker = MonthPicker::new("billing")
        .multiple()
        .min_date("2020-01")
        .present_year(2024)
        .mount(record);
    assert_eq!(
        picker.value(),
        &PickerValue::Multiple(vec!["2024-05".into()])
    );
}
