//! Weekday picker.

use temporal_picker_core::{PickerConfig, PickerKind, PickerOption, Scalar, SelectionMode, ValueKind};
use temporal_picker_locale::WEEKDAY_KEYS;

use crate::{Field, TemporalPicker, WeekdayFormat};

/// Picks days of the week. Multiple by default.
#[derive(Debug, Clone)]
pub struct WeekdayPicker {
    field: Field,
    value_format: Option<WeekdayFormat>,
    short_labels: bool,
}

field_builders!(WeekdayPicker);

impl WeekdayPicker {
    /// Creates a multiple-weekday picker stored under `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name, SelectionMode::Multiple),
            value_format: None,
            short_labels: false,
        }
    }

    /// Storage format of the values.
    #[must_use]
    pub const fn value_format(mut self, format: WeekdayFormat) -> Self {
        self.value_format = Some(format);
        self
    }

    /// Stores `1` (Monday) to `7` (Sunday).
    #[must_use]
    pub const fn as_integer(self) -> Self {
        self.value_format(WeekdayFormat::Integer)
    }

    /// Stores `monday` to `sunday`.
    #[must_use]
    pub const fn as_string(self) -> Self {
        self.value_format(WeekdayFormat::String)
    }

    /// Uses abbreviated day names.
    #[must_use]
    pub const fn short_labels(mut self, short: bool) -> Self {
        self.short_labels = short;
        self
    }

    /// Resolved storage format.
    #[must_use]
    pub fn resolved_value_format(&self) -> WeekdayFormat {
        self.value_format
            .unwrap_or(self.field.settings.weekday_format)
    }
}

impl TemporalPicker for WeekdayPicker {
    fn kind(&self) -> PickerKind {
        PickerKind::Weekday
    }

    fn config(&self) -> PickerConfig {
        let (value_kind, format) = match self.resolved_value_format() {
            WeekdayFormat::String => (ValueKind::Text, "string"),
            WeekdayFormat::Integer => (ValueKind::Integer, "integer"),
        };
        self.field
            .builder(PickerKind::Weekday, format)
            .value_kind(value_kind)
            .options(self.options())
            .build()
    }

    /// Monday to Sunday, or Sunday to Saturday when weeks start on Sunday.
    fn options(&self) -> Vec<PickerOption> {
        let labels = self.field.labels();
        let names = if self.short_labels {
            &labels.weekdays_short
        } else {
            &labels.weekdays
        };
        let integer = self.resolved_value_format() == WeekdayFormat::Integer;

        let mut options: Vec<PickerOption> = WEEKDAY_KEYS
            .iter()
            .zip(names)
            .zip(1_i64..)
            .map(|((key, label), number)| {
                let value = if integer {
                    Scalar::Int(number)
                } else {
                    Scalar::from(*key)
                };
                PickerOption::new(value, *label)
            })
            .collect();
        if self.field.first_day_of_week() == 0 {
            options.rotate_right(1);
        }
        options
    }

    fn placeholder(&self) -> &'static str {
        self.field.labels().placeholders.weekday
    }
}
