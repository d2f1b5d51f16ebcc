use nami::{Signal, binding};
use serde_json::json;
use temporal_picker::prelude::*;
use temporal_picker::{
    Host, HostError, LifecycleSignal, Registration, RegistrationStatus, TemporalPickerPlugin,
};

#[test]
fn picker_seeds_from_the_bound_field() {
    let field = binding(json!(["wednesday", "monday", "someday"]));
    let picker = WeekdayPicker::new("open_days").mount(BindingChannel::new(&field));

    assert!(picker.is_selected("monday"));
    assert!(picker.is_selected("wednesday"));
    assert!(!picker.is_selected("someday"));
}

#[test]
fn form_edits_flow_into_the_picker() {
    let field = binding(json!(null));
    let mut picker = WeekPicker::new("sprint")
        .year_range(2020, 2030)
        .mount(BindingChannel::new(&field));

    field.set(json!("2024-W07"));
    field.set(json!("2024-W09"));
    assert!(picker.sync_external());
    assert!(picker.is_selected("2024-W09"));
    assert!(!picker.is_selected("2024-W07"));
    assert!(!picker.sync_external());
}

#[test]
fn picker_writes_are_not_applied_twice() {
    let field = binding(json!([]));
    let mut picker = DayOfMonthPicker::new("billing_days")
        .multiple()
        .mount(BindingChannel::new(&field));

    picker.toggle(15);
    picker.toggle(1);
    assert_eq!(field.get(), json!([1, 15]));
    assert!(!picker.sync_external());
}

#[test]
fn week_session_writes_through_the_binding() {
    let field = binding(json!(null));
    let mut session = WeekPicker::new("sprint")
        .year_range(2024, 2024)
        .present_year(2024)
        .mount_session(BindingChannel::new(&field));

    session.open();
    assert!(session.click_week_number(2024, 12));
    assert_eq!(field.get(), json!("2024-W12"));
    assert!(!session.click_week_number(2025, 1));
    assert_eq!(field.get(), json!("2024-W12"));
}

struct Editor {
    booted: bool,
    plugins: Vec<String>,
}

impl Host for Editor {
    fn is_ready(&self) -> bool {
        self.booted
    }

    fn register(&mut self, plugin: &TemporalPickerPlugin) -> Result<(), HostError> {
        self.plugins.push(plugin.id().to_owned());
        Ok(())
    }
}

#[test]
fn registration_waits_for_the_host() {
    let mut editor = Editor {
        booted: false,
        plugins: Vec::new(),
    };
    let mut registration = Registration::new(TemporalPickerPlugin::new());

    assert_eq!(
        registration.on_signal(&mut editor, LifecycleSignal::ScriptLoaded),
        Ok(RegistrationStatus::Pending)
    );
    editor.booted = true;
    assert_eq!(
        registration.on_signal(&mut editor, LifecycleSignal::DocumentReady),
        Ok(RegistrationStatus::Registered)
    );
    assert_eq!(editor.plugins, ["temporal-picker"]);
}
