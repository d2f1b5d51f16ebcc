//! Year picker.

use temporal_picker_core::{PickerConfig, PickerKind, PickerOption, SelectionMode};

use crate::{Field, TemporalPicker};

/// Picks one or more years out of an inclusive range.
///
/// The range defaults to the package [`Settings`](crate::Settings), 1900 to
/// 2100 unless configured otherwise.
#[derive(Debug, Clone)]
pub struct YearPicker {
    field: Field,
    min_year: Option<i32>,
    max_year: Option<i32>,
}

field_builders!(YearPicker);

impl YearPicker {
    /// Creates a single-year picker stored under `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name, SelectionMode::Single),
            min_year: None,
            max_year: None,
        }
    }

    /// Both ends of the offered range.
    #[must_use]
    pub const fn range(mut self, min: i32, max: i32) -> Self {
        self.min_year = Some(min);
        self.max_year = Some(max);
        self
    }

    /// First offered year.
    #[must_use]
    pub const fn min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    /// Last offered year.
    #[must_use]
    pub const fn max_year(mut self, year: i32) -> Self {
        self.max_year = Some(year);
        self
    }

    /// Resolved first year.
    #[must_use]
    pub fn resolved_min_year(&self) -> i32 {
        self.min_year.unwrap_or(self.field.settings.year_range.min)
    }

    /// Resolved last year.
    #[must_use]
    pub fn resolved_max_year(&self) -> i32 {
        self.max_year.unwrap_or(self.field.settings.year_range.max)
    }
}

impl TemporalPicker for YearPicker {
    fn kind(&self) -> PickerKind {
        PickerKind::Year
    }

    fn config(&self) -> PickerConfig {
        let format = self.field.settings.formats.year.clone();
        self.field
            .builder(PickerKind::Year, &format)
            .options(self.options())
            .year_range(self.resolved_min_year(), self.resolved_max_year())
            .build()
    }

    fn options(&self) -> Vec<PickerOption> {
        (self.resolved_min_year()..=self.resolved_max_year())
            .map(|year| PickerOption::new(year, year.to_string()))
            .collect()
    }

    fn placeholder(&self) -> &'static str {
        self.field.labels().placeholders.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    #[test]
    fn defaults_come_from_settings() {
        let picker = YearPicker::new("founded");
        let options = picker.options();
        assert_eq!(options.len(), 201);
        assert_eq!(options[0].label, "1900");

        let mut settings = Settings::default();
        settings.year_range.min = 2000;
        let picker = YearPicker::new("founded").settings(settings).max_year(2010);
        assert_eq!(picker.options().len(), 11);
    }

    #[test]
    fn config_carries_bounds_and_options() {
        let config = YearPicker::new("founded").range(2020, 2025).multiple().config();
        assert_eq!(config.mode, SelectionMode::Multiple);
        assert_eq!(config.bounds.min_year, Some(2020));
        assert_eq!(config.bounds.max_year, Some(2025));
        assert_eq!(config.options().len(), 6);
        assert_eq!(config.format.as_deref(), Some("Y"));
    }

    #[test]
    fn inverted_range_offers_nothing() {
        let picker = YearPicker::new("founded").range(2030, 2020);
        assert!(picker.options().is_empty());
        assert_eq!(picker.config().diagnostics().len(), 1);
    }
}
