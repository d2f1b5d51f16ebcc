#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod binding;
pub mod logging;
pub mod plugin;

#[doc(inline)]
pub use binding::BindingChannel;
#[doc(inline)]
pub use plugin::{
    Host, HostError, LifecycleSignal, PLUGIN_ID, Registration, RegistrationError,
    RegistrationStatus, TemporalPickerPlugin,
};

pub use temporal_picker_components as components;
pub use temporal_picker_core as picker_core;
pub use temporal_picker_locale as locale;

#[doc(inline)]
pub use temporal_picker_components::{
    DayOfMonthPicker, MonthPicker, MonthRangePicker, Settings, SettingsError, TemporalPicker,
    WeekPicker, WeekPickerSession, WeekdayPicker, YearPicker,
};
#[doc(inline)]
pub use temporal_picker_core::{
    Direction, MemoryChannel, PickerConfig, PickerKind, PickerStateMachine, PickerValue, Scalar,
    SelectionMode, StateChannel,
};
#[doc(inline)]
pub use temporal_picker_locale::Locale;

pub mod prelude {
    //! Commonly used types, importable in one line.
    //!
    //! ```
    //! use temporal_picker::prelude::*;
    //!
    //! let picker = MonthPicker::new("billing").multiple();
    //! assert_eq!(picker.kind(), PickerKind::Month);
    //! ```
    pub use super::{
        BindingChannel, DayOfMonthPicker, Direction, MemoryChannel, MonthPicker, MonthRangePicker,
        PickerKind, PickerStateMachine, PickerValue, Scalar, SelectionMode, StateChannel,
        TemporalPicker, WeekPicker, WeekdayPicker, YearPicker,
    };
}
