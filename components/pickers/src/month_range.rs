//! Month-range picker.

use temporal_picker_core::{PickerConfig, PickerKind, PickerOption, SelectionMode};

use crate::month::{month_cells, month_config, year_range};
use crate::{Field, TemporalPicker};

/// Picks a start and an end month with two clicks.
///
/// The two ends are stored under their own field names, `<name>_start` and
/// `<name>_end` unless [`Self::fields`] says otherwise, and those names are
/// the object keys of the stored range.
#[derive(Debug, Clone)]
pub struct MonthRangePicker {
    field: Field,
    start_field: Option<String>,
    end_field: Option<String>,
    min_date: Option<String>,
    max_date: Option<String>,
    show_year: bool,
    start_label: Option<String>,
    end_label: Option<String>,
}

field_builders!(MonthRangePicker);

impl MonthRangePicker {
    /// Creates a range picker for the fields derived from `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name, SelectionMode::Range),
            start_field: None,
            end_field: None,
            min_date: None,
            max_date: None,
            show_year: true,
            start_label: None,
            end_label: None,
        }
    }

    /// Field names of the two ends.
    #[must_use]
    pub fn fields(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_field = Some(start.into());
        self.end_field = Some(end.into());
        self
    }

    /// Earliest selectable month, `YYYY-MM`.
    #[must_use]
    pub fn min_date(mut self, date: impl Into<String>) -> Self {
        self.min_date = Some(date.into());
        self
    }

    /// Latest selectable month, `YYYY-MM`.
    #[must_use]
    pub fn max_date(mut self, date: impl Into<String>) -> Self {
        self.max_date = Some(date.into());
        self
    }

    /// Whether the year navigation is shown.
    #[must_use]
    pub const fn show_year(mut self, show: bool) -> Self {
        self.show_year = show;
        self
    }

    /// See [`Self::show_year`].
    #[must_use]
    pub const fn shows_year(&self) -> bool {
        self.show_year
    }

    /// Captions of the two ends.
    #[must_use]
    pub fn labels(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_label = Some(start.into());
        self.end_label = Some(end.into());
        self
    }

    /// Field name of the first end.
    #[must_use]
    pub fn start_field(&self) -> String {
        self.start_field
            .clone()
            .unwrap_or_else(|| format!("{}_start", self.field.name))
    }

    /// Field name of the second end.
    #[must_use]
    pub fn end_field(&self) -> String {
        self.end_field
            .clone()
            .unwrap_or_else(|| format!("{}_end", self.field.name))
    }

    /// Caption of the first end.
    #[must_use]
    pub fn start_label(&self) -> &str {
        self.start_label
            .as_deref()
            .unwrap_or(self.field.labels().range.start)
    }

    /// Caption of the second end.
    #[must_use]
    pub fn end_label(&self) -> &str {
        self.end_label
            .as_deref()
            .unwrap_or(self.field.labels().range.end)
    }

    /// Years reachable by navigation.
    #[must_use]
    pub fn year_range(&self) -> (i32, i32) {
        year_range(&self.field, self.min_date.as_deref(), self.max_date.as_deref())
    }
}

impl TemporalPicker for MonthRangePicker {
    fn kind(&self) -> PickerKind {
        PickerKind::Month
    }

    fn config(&self) -> PickerConfig {
        let mut field = self.field.clone();
        field.mode = SelectionMode::Range;
        field.range_keys = Some((self.start_field(), self.end_field()));
        month_config(&field, self.min_date.as_deref(), self.max_date.as_deref())
    }

    fn options(&self) -> Vec<PickerOption> {
        month_cells(&self.field)
    }

    fn placeholder(&self) -> &'static str {
        self.field.labels().placeholders.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_derive_from_name() {
        let picker = MonthRangePicker::new("contract");
        assert_eq!(picker.start_field(), "contract_start");
        assert_eq!(picker.end_field(), "contract_end");

        let picker = picker.fields("begins_on", "ends_on");
        let config = picker.config();
        assert_eq!(config.range_keys.start, "begins_on");
        assert_eq!(config.range_keys.end, "ends_on");
    }

    #[test]
    fn always_range_mode() {
        let config = MonthRangePicker::new("contract").multiple().config();
        assert_eq!(config.mode, SelectionMode::Range);
    }

    #[test]
    fn labels_fall_back_to_locale() {
        let picker = MonthRangePicker::new("contract").locale("zh_CN");
        assert_eq!(picker.start_label(), "开始");
        assert_eq!(picker.end_label(), "结束");

        let picker = picker.labels("From", "Until");
        assert_eq!(picker.start_label(), "From");
    }
}
