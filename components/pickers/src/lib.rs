//! # Temporal Picker Components
//!
//! Ready-made pickers for the temporal domains: each one gathers its field
//! options, produces a [`PickerConfig`] and mounts a
//! [`PickerStateMachine`] on an external state channel.
//!
//! ```
//! use serde_json::json;
//! use temporal_picker_components::{TemporalPicker, WeekdayPicker};
//! use temporal_picker_core::MemoryChannel;
//!
//! let record = MemoryChannel::new(json!(null));
//! let mut picker = WeekdayPicker::new("open_on").short_labels(true).mount(record.clone());
//!
//! picker.toggle("friday");
//! picker.toggle("monday");
//! assert_eq!(record.get(), json!(["friday", "monday"]));
//! assert_eq!(picker.display_text(), "Fri, Mon");
//! ```
//!
//! | Picker | Values | Default mode |
//! |--------|--------|--------------|
//! | [`YearPicker`] | `2024` | single |
//! | [`MonthPicker`] | `"2024-03"` | single |
//! | [`MonthRangePicker`] | `{"<name>_start": "2024-03", "<name>_end": "2024-09"}` | range |
//! | [`WeekPicker`] | `"2024-W10"` | single |
//! | [`WeekdayPicker`] | `"monday"` or `1` | multiple |
//! | [`DayOfMonthPicker`] | `15` | single |

#[macro_use]
mod field;

pub mod calendar;
mod day_of_month;
mod month;
mod month_range;
mod settings;
mod week;
mod weekday;
mod year;

pub use day_of_month::DayOfMonthPicker;
pub use field::Field;
pub use month::MonthPicker;
pub use month_range::MonthRangePicker;
pub use settings::{Formats, Settings, SettingsError, WeekdayFormat, YearRange};
pub use week::{WeekCalendar, WeekPicker, WeekPickerSession};
pub use weekday::WeekdayPicker;
pub use year::YearPicker;

use temporal_picker_core::{PickerConfig, PickerKind, PickerOption, PickerStateMachine, StateChannel};

/// A configured picker of one temporal domain.
pub trait TemporalPicker {
    /// Temporal domain of the picker.
    fn kind(&self) -> PickerKind;

    /// Configuration for the state machine.
    fn config(&self) -> PickerConfig;

    /// Options shown in the dropdown.
    fn options(&self) -> Vec<PickerOption>;

    /// Trigger text while nothing is selected.
    fn placeholder(&self) -> &'static str;

    /// Mounts a state machine seeded from and writing to `channel`.
    fn mount<C: StateChannel>(&self, channel: C) -> PickerStateMachine<C> {
        PickerStateMachine::mount(self.config(), channel)
    }
}
