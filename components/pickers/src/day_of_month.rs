//! Day-of-month picker.

use temporal_picker_core::{PickerConfig, PickerKind, PickerOption, SelectionMode};

use crate::{Field, TemporalPicker};

/// Picks days 1 to 31 from a seven-column grid.
#[derive(Debug, Clone)]
pub struct DayOfMonthPicker {
    field: Field,
    min_day: i64,
    max_day: i64,
    show_calendar_grid: bool,
}

field_builders!(DayOfMonthPicker);

impl DayOfMonthPicker {
    /// Creates a single-day picker stored under `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name, SelectionMode::Single),
            min_day: 1,
            max_day: 31,
            show_calendar_grid: true,
        }
    }

    /// Both ends of the offered days.
    #[must_use]
    pub const fn day_range(mut self, min: i64, max: i64) -> Self {
        self.min_day = min;
        self.max_day = max;
        self
    }

    /// First offered day.
    #[must_use]
    pub const fn min_day(mut self, day: i64) -> Self {
        self.min_day = day;
        self
    }

    /// Last offered day.
    #[must_use]
    pub const fn max_day(mut self, day: i64) -> Self {
        self.max_day = day;
        self
    }

    /// Lays the days out as a calendar grid instead of a list.
    #[must_use]
    pub const fn show_calendar_grid(mut self, show: bool) -> Self {
        self.show_calendar_grid = show;
        self
    }

    /// See [`Self::show_calendar_grid`].
    #[must_use]
    pub const fn shows_calendar_grid(&self) -> bool {
        self.show_calendar_grid
    }

    /// First offered day, at least 1.
    #[must_use]
    pub const fn resolved_min_day(&self) -> i64 {
        if self.min_day < 1 { 1 } else { self.min_day }
    }

    /// Last offered day, at most 31.
    #[must_use]
    pub const fn resolved_max_day(&self) -> i64 {
        if self.max_day > 31 { 31 } else { self.max_day }
    }
}

impl TemporalPicker for DayOfMonthPicker {
    fn kind(&self) -> PickerKind {
        PickerKind::DayOfMonth
    }

    fn config(&self) -> PickerConfig {
        self.field
            .builder(PickerKind::DayOfMonth, "d")
            .options(self.options())
            .min_day(self.resolved_min_day())
            .max_day(self.resolved_max_day())
            .build()
    }

    fn options(&self) -> Vec<PickerOption> {
        (self.resolved_min_day()..=self.resolved_max_day())
            .map(|day| PickerOption::new(day, day.to_string()))
            .collect()
    }

    fn placeholder(&self) -> &'static str {
        self.field.labels().placeholders.day_of_month
    }
}
