//! Month picker.

use temporal_picker_core::{PickerConfig, PickerKind, PickerOption, SelectionMode};

use crate::{Field, TemporalPicker};

/// Navigation span used when no date bound is set, in years around the
/// present year.
const OPEN_SPAN: i32 = 10;

/// Picks `YYYY-MM` months from a twelve-cell grid with year navigation.
#[derive(Debug, Clone)]
pub struct MonthPicker {
    field: Field,
    min_date: Option<String>,
    max_date: Option<String>,
    show_year: bool,
}

field_builders!(MonthPicker);

impl MonthPicker {
    /// Creates a single-month picker stored under `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name, SelectionMode::Single),
            min_date: None,
            max_date: None,
            show_year: true,
        }
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

    /// Years reachable by navigation: those of the date bounds, or ten years
    /// either side of the present year.
    #[must_use]
    pub fn year_range(&self) -> (i32, i32) {
        year_range(&self.field, self.min_date.as_deref(), self.max_date.as_deref())
    }
}

impl TemporalPicker for MonthPicker {
    fn kind(&self) -> PickerKind {
        PickerKind::Month
    }

    fn config(&self) -> PickerConfig {
        month_config(&self.field, self.min_date.as_deref(), self.max_date.as_deref())
    }

    /// The twelve grid cells, valued 1 to 12 with short month names.
    fn options(&self) -> Vec<PickerOption> {
        month_cells(&self.field)
    }

    fn placeholder(&self) -> &'static str {
        self.field.labels().placeholders.month
    }
}

pub(crate) fn month_cells(field: &Field) -> Vec<PickerOption> {
    field
        .labels()
        .months_short
        .iter()
        .zip(1..=12)
        .map(|(label, month)| PickerOption::new(month, *label))
        .collect()
}

pub(crate) fn year_range(field: &Field, min_date: Option<&str>, max_date: Option<&str>) -> (i32, i32) {
    let present = field.present_year();
    let year_of = |date: Option<&str>| {
        date.and_then(|date| date.get(..4))
            .and_then(|year| year.parse().ok())
    };
    (
        year_of(min_date).unwrap_or(present.saturating_sub(OPEN_SPAN)),
        year_of(max_date).unwrap_or(present.saturating_add(OPEN_SPAN)),
    )
}

pub(crate) fn month_config(field: &Field, min_date: Option<&str>, max_date: Option<&str>) -> PickerConfig {
    let (min_year, max_year) = year_range(field, min_date, max_date);
    let mut builder = field
        .builder(PickerKind::Month, &field.settings.formats.month)
        .year_range(min_year, max_year);
    if let Some(date) = min_date {
        builder = builder.min_date(date);
    }
    if let Some(date) = max_date {
        builder = builder.max_date(date);
    }
    builder.build()
}
