//! Behaviour of the picker state machine across modes.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{Value, json};
use temporal_picker_core::{
    ChangeHandler, Direction, MemoryChannel, PickerConfig, PickerKind, PickerOption,
    PickerStateMachine, PickerValue, Scalar, SelectionMode, StateChannel, Subscription, SyncError,
};

fn days(mode: SelectionMode) -> PickerConfig {
    PickerConfig::builder(PickerKind::DayOfMonth)
        .mode(mode)
        .options((1..=31).map(|day| PickerOption::new(day, day.to_string())))
        .disabled_values([13])
        .build()
}

fn months(mode: SelectionMode) -> PickerConfig {
    PickerConfig::builder(PickerKind::Month)
        .mode(mode)
        .min_date("2023-01")
        .max_date("2025-12")
        .present_year(2024)
        .build()
}

fn mount(config: PickerConfig, initial: Value) -> (PickerStateMachine<MemoryChannel>, MemoryChannel) {
    let channel = MemoryChannel::new(initial);
    (PickerStateMachine::mount(config, channel.clone()), channel)
}

/// Accepts nothing and remembers how often it was asked.
#[derive(Default)]
struct FailingChannel {
    writes: RefCell<usize>,
}

impl StateChannel for FailingChannel {
    fn read(&self) -> Result<Value, SyncError> {
        Err(SyncError::Unreadable("offline".into()))
    }

    fn write(&self, _value: Value) -> Result<(), SyncError> {
        *self.writes.borrow_mut() += 1;
        Err(SyncError::Rejected("offline".into()))
    }

    fn subscribe(&self, _handler: ChangeHandler) -> Subscription {
        Subscription::none()
    }
}

#[test]
fn disabled_day_is_never_selected() {
    let (mut picker, _) = mount(days(SelectionMode::Single), json!(null));
    assert!(!picker.toggle(13));
    assert!(!picker.is_selected(13));

    assert!(picker.toggle(14));
    assert!(picker.is_selected(14));
    assert_eq!(picker.display_text(), "14");
}

#[test]
fn disabled_day_is_never_selected_in_multiple_mode() {
    let (mut picker, channel) = mount(days(SelectionMode::Multiple), json!([12]));
    assert!(!picker.toggle(13));
    assert!(!picker.is_selected(13));
    assert_eq!(channel.get(), json!([12]));
}

#[test]
fn disabled_month_never_enters_a_range() {
    let config = PickerConfig::builder(PickerKind::Month)
        .range_selection()
        .min_date("2023-01")
        .max_date("2025-12")
        .present_year(2024)
        .disabled_values([6])
        .build();
    let (mut picker, channel) = mount(config, json!(null));

    assert!(!picker.select_in_range_mode("2024-06"));
    assert!(!picker.select_month(6));
    assert!(picker.select_month(2));
    assert!(!picker.select_month(6));
    assert!(!picker.is_month_selected(6));
    assert_eq!(channel.get(), json!({"start": "2024-02", "end": null}));
}

#[test]
fn single_toggle_twice_clears() {
    let (mut picker, channel) = mount(days(SelectionMode::Single), json!(3));
    picker.toggle(9);
    picker.toggle(9);
    assert_eq!(picker.value(), &PickerValue::Single(None));
    assert_eq!(picker.display_text(), "");
    assert_eq!(channel.get(), json!(null));
}

#[test]
fn single_toggle_compares_canonical_form() {
    let (mut picker, _) = mount(days(SelectionMode::Single), json!(7));
    assert!(picker.is_selected("7"));
    picker.toggle("7");
    assert_eq!(picker.value(), &PickerValue::Single(None));
}

#[test]
fn single_toggle_closes_dropdown() {
    let (mut picker, _) = mount(days(SelectionMode::Single), json!(null));
    picker.open();
    picker.toggle(2);
    assert!(!picker.state().is_open());
}

#[test]
fn multiple_toggle_keeps_numbers_sorted() {
    let (mut picker, channel) = mount(days(SelectionMode::Multiple), json!([]));
    for day in [20, 3, 11] {
        picker.toggle(day);
    }
    assert_eq!(channel.get(), json!([3, 11, 20]));

    picker.toggle(3);
    assert!(!picker.is_selected(3));
    assert_eq!(channel.get(), json!([11, 20]));
    assert_eq!(picker.display_text(), "11, 20");
}

#[test]
fn multiple_text_keeps_insertion_order() {
    let config = PickerConfig::builder(PickerKind::Weekday)
        .multiple()
        .options([
            PickerOption::new("monday", "Monday"),
            PickerOption::new("tuesday", "Tuesday"),
            PickerOption::new("friday", "Friday"),
        ])
        .build();
    let (mut picker, channel) = mount(config, json!(null));
    picker.toggle("friday");
    picker.toggle("monday");
    assert_eq!(channel.get(), json!(["friday", "monday"]));
    assert_eq!(picker.display_text(), "Friday, Monday");
}

#[test]
fn candidates_outside_domain_are_ignored() {
    let (mut picker, channel) = mount(days(SelectionMode::Multiple), json!([]));
    assert!(!picker.toggle(32));
    assert!(!picker.toggle("soon"));
    assert_eq!(channel.get(), json!([]));
}

#[test]
fn select_all_skips_disabled() {
    let (mut picker, _) = mount(days(SelectionMode::Multiple), json!([]));
    assert!(picker.select_all());
    let PickerValue::Multiple(values) = picker.value() else {
        panic!("multiple picker lost its shape");
    };
    assert_eq!(values.len(), 30);
    assert!(!values.contains(&Scalar::Int(13)));

    assert!(picker.deselect_all());
    assert_eq!(picker.value(), &PickerValue::Multiple(Vec::new()));
}

#[test]
fn select_all_is_multiple_only() {
    let (mut picker, _) = mount(days(SelectionMode::Single), json!(null));
    assert!(!picker.select_all());
    assert!(!picker.deselect_all());
}

#[test]
fn range_normalizes_click_order() {
    let (mut picker, channel) = mount(months(SelectionMode::Range), json!(null));
    picker.select_in_range_mode("2024-08");
    picker.select_in_range_mode("2024-03");
    assert_eq!(channel.get(), json!({"start": "2024-03", "end": "2024-08"}));
    assert_eq!(picker.display_text(), "2024-03 → 2024-08");

    picker.select_in_range_mode("2024-05");
    assert_eq!(channel.get(), json!({"start": "2024-05", "end": null}));
    assert_eq!(picker.display_text(), "2024-05");
}

#[test]
fn range_closes_only_when_complete() {
    let (mut picker, _) = mount(months(SelectionMode::Range), json!(null));
    picker.open();
    picker.select_in_range_mode("2024-02");
    assert!(picker.state().is_open());
    picker.select_in_range_mode("2024-04");
    assert!(!picker.state().is_open());
}

#[test]
fn clicking_the_pending_start_again_selects_one_month() {
    let (mut picker, channel) = mount(months(SelectionMode::Range), json!(null));
    picker.open();
    assert!(picker.select_in_range_mode("2024-05"));
    assert!(picker.select_in_range_mode("2024-05"));
    assert_eq!(channel.get(), json!({"start": "2024-05", "end": "2024-05"}));
    assert!(!picker.state().is_open());
    assert_eq!(picker.display_text(), "2024-05 → 2024-05");
}

#[test]
fn range_rejects_out_of_bound_start() {
    let (mut picker, channel) = mount(months(SelectionMode::Range), json!(null));
    assert!(!picker.select_in_range_mode("2022-06"));
    assert_eq!(picker.value(), &PickerValue::empty(SelectionMode::Range));
    assert_eq!(channel.get(), json!(null));
}

#[test]
fn range_interior_is_exclusive() {
    let (picker, _) = mount(
        months(SelectionMode::Range),
        json!({"start": "2024-02", "end": "2024-06"}),
    );
    assert!(!picker.is_in_range("2024-02"));
    assert!(!picker.is_in_range("2024-06"));
    assert!(picker.is_in_range("2024-04"));
    assert!(picker.is_selected("2024-06"));
}

#[test]
fn hover_preview_only_while_pending() {
    let (mut picker, _) = mount(months(SelectionMode::Range), json!(null));
    assert!(!picker.hover_month(5));

    picker.select_month(7);
    assert!(picker.hover_month(3));
    assert!(picker.is_month_in_range(5));
    assert!(!picker.is_month_in_range(3));

    picker.select_month(9);
    assert_eq!(picker.state().hover_preview(), None);
    assert!(!picker.hover_month(11));
    assert!(picker.is_month_in_range(8));
}

#[test]
fn external_pending_range_resets_hover() {
    let (mut picker, channel) = mount(months(SelectionMode::Range), json!(null));
    picker.select_month(7);
    assert!(picker.hover_month(3));

    channel.set(json!({"start": "2024-10", "end": null}));
    assert!(picker.sync_external());
    assert_eq!(picker.state().hover_preview(), None);
    assert!(picker.is_selected("2024-10"));
}

#[test]
fn nonexistent_iso_weeks_are_ignored() {
    let weeks = || {
        PickerConfig::builder(PickerKind::Week)
            .year_range(2020, 2030)
            .present_year(2024)
            .build()
    };
    let (mut picker, channel) = mount(weeks(), json!(null));
    assert!(!picker.toggle("2024-W53"));
    assert_eq!(channel.get(), json!(null));
    assert!(picker.toggle("2020-W53"));

    let (picker, _) = mount(weeks(), json!("2023-W53"));
    assert_eq!(picker.value(), &PickerValue::Single(None));
}

#[test]
fn navigation_stops_at_year_bounds() {
    let (mut picker, _) = mount(months(SelectionMode::Single), json!(null));
    assert_eq!(picker.state().view_year(), 2024);
    assert!(picker.navigate(Direction::Next));
    for _ in 0..5 {
        picker.navigate(Direction::Next);
    }
    assert_eq!(picker.state().view_year(), 2025);
    for _ in 0..5 {
        picker.navigate(Direction::Previous);
    }
    assert_eq!(picker.state().view_year(), 2023);
    assert!(!picker.navigate(Direction::Previous));
}

#[test]
fn single_value_moves_cursor_to_its_year() {
    let (picker, _) = mount(months(SelectionMode::Single), json!("2023-11"));
    assert_eq!(picker.state().view_year(), 2023);
    assert!(picker.is_month_selected(11));
}

#[test]
fn select_month_replaces_in_single_mode() {
    let (mut picker, channel) = mount(months(SelectionMode::Single), json!("2024-03"));
    picker.select_month(3);
    assert_eq!(channel.get(), json!("2024-03"));
    picker.select_month(4);
    assert_eq!(channel.get(), json!("2024-04"));
}

#[test]
fn disabled_picker_ignores_intents() {
    let config = PickerConfig::builder(PickerKind::Year)
        .disabled(true)
        .options([PickerOption::new(2024, "2024")])
        .build();
    let (mut picker, channel) = mount(config, json!(null));
    assert!(!picker.toggle(2024));
    assert!(!picker.clear());
    assert!(!picker.open());
    assert_eq!(channel.get(), json!(null));
}

#[test]
fn read_only_picker_can_open_but_not_change() {
    let config = PickerConfig::builder(PickerKind::Year)
        .read_only(true)
        .options([PickerOption::new(2024, "2024")])
        .build();
    let (mut picker, _) = mount(config, json!(2024));
    assert!(picker.open());
    assert!(!picker.toggle(2024));
    assert!(picker.is_selected(2024));
}

#[test]
fn clear_empties_and_closes() {
    let (mut picker, channel) = mount(days(SelectionMode::Multiple), json!([1, 2]));
    picker.open();
    assert!(picker.clear());
    assert!(!picker.state().is_open());
    assert_eq!(channel.get(), json!([]));
}

#[test]
fn external_changes_replace_local_value() {
    let (mut picker, channel) = mount(days(SelectionMode::Multiple), json!([1]));
    channel.set(json!([4, 2]));
    channel.set(json!([5]));
    assert!(picker.sync_external());
    assert_eq!(picker.value(), &PickerValue::Multiple(vec![Scalar::Int(5)]));
    assert!(!picker.sync_external());
}

#[test]
fn own_writes_are_not_reapplied() {
    let (mut picker, _) = mount(days(SelectionMode::Multiple), json!([]));
    picker.toggle(8);
    assert!(!picker.sync_external());
    assert!(picker.is_selected(8));
}

#[test]
fn external_disabled_members_are_dropped() {
    let (picker, _) = mount(days(SelectionMode::Multiple), json!([13, 12, 12]));
    assert_eq!(picker.value(), &PickerValue::Multiple(vec![Scalar::Int(12)]));
}

#[test]
fn failed_writes_keep_local_state() {
    let config = months(SelectionMode::Range);
    let channel = Rc::new(FailingChannel::default());
    let mut picker = PickerStateMachine::mount(config, Rc::clone(&channel));
    picker.open();

    assert!(picker.select_in_range_mode("2024-01"));
    assert!(picker.select_in_range_mode("2024-02"));
    assert!(!picker.state().is_open());
    assert_eq!(picker.display_text(), "2024-01 → 2024-02");
    assert_eq!(*channel.writes.borrow(), 2);
}

#[test]
fn written_value_round_trips() {
    let cases = [
        (days(SelectionMode::Single), vec![Scalar::Int(4)]),
        (days(SelectionMode::Multiple), vec![Scalar::Int(9), Scalar::Int(2)]),
        (months(SelectionMode::Range), vec![Scalar::from("2025-02"), Scalar::from("2023-07")]),
    ];
    for (config, clicks) in cases {
        let (mut picker, channel) = mount(config.clone(), json!(null));
        for click in clicks {
            picker.toggle(click);
        }
        let (replayed, _) = mount(config, channel.get());
        assert_eq!(replayed.value(), picker.value());
    }
}

#[test]
fn custom_range_keys_on_the_wire() {
    let config = PickerConfig::builder(PickerKind::Month)
        .range_selection()
        .range_keys("from", "until")
        .build();
    let (mut picker, channel) = mount(config, json!({"from": "2024-04", "until": null}));
    assert!(picker.is_selected("2024-04"));
    picker.select_in_range_mode("2024-06");
    assert_eq!(channel.get(), json!({"from": "2024-04", "until": "2024-06"}));
}
