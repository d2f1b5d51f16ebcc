//! Immutable picker configuration and its builder.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{ConfigError, Scalar, SelectionMode, ValueKind};

/// The temporal domain a picker selects from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerKind {
    /// Calendar years, stored as integers.
    Year,
    /// Months of a year, stored as `YYYY-MM`.
    Month,
    /// ISO weeks, stored as `YYYY-Www`.
    Week,
    /// Days of the week, stored as names or 1..=7.
    Weekday,
    /// Days of a month, stored as 1..=31.
    DayOfMonth,
}

impl PickerKind {
    /// Identifier used by hosts and label tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Weekday => "weekday",
            Self::DayOfMonth => "day_of_month",
        }
    }

    /// Canonical value kind of the domain. Weekdays default to names.
    #[must_use]
    pub const fn default_value_kind(self) -> ValueKind {
        match self {
            Self::Year | Self::DayOfMonth => ValueKind::Integer,
            Self::Month | Self::Week | Self::Weekday => ValueKind::Text,
        }
    }

    /// Fixed-width layout of date strings in this domain, if any.
    #[must_use]
    pub const fn date_layout(self) -> Option<&'static str> {
        match self {
            Self::Month => Some("YYYY-MM"),
            Self::Week => Some("YYYY-Www"),
            Self::Year | Self::Weekday | Self::DayOfMonth => None,
        }
    }

    /// Whether `text` follows [`Self::date_layout`] and names a month or
    /// ISO week that exists.
    #[must_use]
    pub fn matches_layout(self, text: &str) -> bool {
        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        let in_range = |s: &str, max: u8| s.parse::<u8>().is_ok_and(|n| (1..=max).contains(&n));
        match self {
            Self::Month => {
                text.is_ascii()
                    && text.len() == 7
                    && digits(&text[..4])
                    && &text[4..5] == "-"
                    && digits(&text[5..])
                    && in_range(&text[5..], 12)
            }
            Self::Week => {
                text.is_ascii()
                    && text.len() == 8
                    && digits(&text[..4])
                    && &text[4..6] == "-W"
                    && digits(&text[6..])
                    && text[..4].parse::<i32>().is_ok_and(|year| {
                        in_range(&text[6..], time::util::weeks_in_year(year))
                    })
            }
            Self::Year | Self::Weekday | Self::DayOfMonth => false,
        }
    }
}

/// Configured min/max constraints. A `None` side is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bounds {
    /// Earliest selectable and navigable year.
    pub min_year: Option<i32>,
    /// Latest selectable and navigable year.
    pub max_year: Option<i32>,
    /// Earliest date string, in the domain's fixed-width layout.
    pub min_date: Option<String>,
    /// Latest date string, in the domain's fixed-width layout.
    pub max_date: Option<String>,
    /// Smallest selectable day of month.
    pub min_day: Option<u8>,
    /// Largest selectable day of month.
    pub max_day: Option<u8>,
}

/// One enumerable choice with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOption {
    /// Stored value.
    pub value: Scalar,
    /// Human readable label.
    pub label: String,
}

impl PickerOption {
    /// Creates an option.
    pub fn new(value: impl Into<Scalar>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The set of values a picker may hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Domain {
    /// Every valid value is listed. Candidates outside the list are ignored.
    Enumerated(Vec<PickerOption>),
    /// Values are composed at interaction time (months, ISO weeks) and are
    /// constrained only by bounds.
    #[default]
    Open,
}

/// Object keys used for the two ends of a range on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeKeys {
    /// Key of the earlier end.
    pub start: String,
    /// Key of the later end.
    pub end: String,
}

impl Default for RangeKeys {
    fn default() -> Self {
        Self {
            start: "start".into(),
            end: "end".into(),
        }
    }
}

/// Everything a picker instance needs to know, fixed at construction.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct PickerConfig {
    /// Temporal domain.
    pub kind: PickerKind,
    /// Selection mode; decides the shape of the value.
    pub mode: SelectionMode,
    /// Canonical comparable representation of values.
    pub value_kind: ValueKind,
    /// Valid values.
    pub domain: Domain,
    /// Values excluded regardless of bounds (type-strict equality).
    pub disabled_values: Vec<Scalar>,
    /// Min/max constraints.
    pub bounds: Bounds,
    /// BCP 47 style locale tag.
    pub locale: String,
    /// 0 for Sunday, 1 for Monday.
    pub first_day_of_week: u8,
    /// The whole widget is disabled.
    pub disabled: bool,
    /// The widget shows its value but cannot change it.
    pub read_only: bool,
    /// Wire keys for range values.
    pub range_keys: RangeKeys,
    /// Storage format string, passed through to collaborators.
    pub format: Option<String>,
    /// Display format string, passed through to collaborators.
    pub display_format: Option<String>,
    /// Year the navigation cursor starts at when the value has none.
    pub present_year: i32,
    diagnostics: Vec<ConfigError>,
}

impl PickerConfig {
    /// Starts a builder for `kind`.
    #[must_use]
    pub fn builder(kind: PickerKind) -> PickerConfigBuilder {
        PickerConfigBuilder::new(kind)
    }

    /// Problems found while building; each one left its bound unapplied.
    #[must_use]
    pub fn diagnostics(&self) -> &[ConfigError] {
        &self.diagnostics
    }

    /// Whether user intents should be ignored.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        !self.disabled && !self.read_only
    }

    /// The listed options, empty for open domains.
    #[must_use]
    pub fn options(&self) -> &[PickerOption] {
        match &self.domain {
            Domain::Enumerated(options) => options,
            Domain::Open => &[],
        }
    }

    /// Label of a listed option.
    #[must_use]
    pub fn label_for(&self, value: &Scalar) -> Option<&str> {
        self.options()
            .iter()
            .find(|option| &option.value == value)
            .map(|option| option.label.as_str())
    }

    /// Converts a raw candidate into this picker's canonical form and checks
    /// it against the domain. `None` means the candidate is not a value of
    /// this picker at all.
    #[must_use]
    pub fn canonicalize(&self, candidate: Scalar) -> Option<Scalar> {
        let candidate = candidate.canonicalize(self.value_kind)?;
        match &self.domain {
            Domain::Enumerated(options) => options
                .iter()
                .any(|option| option.value == candidate)
                .then_some(candidate),
            Domain::Open => match self.kind.date_layout() {
                Some(_) => candidate
                    .as_text()
                    .is_some_and(|text| self.kind.matches_layout(text))
                    .then_some(candidate),
                None => Some(candidate),
            },
        }
    }
}

/// Builder for [`PickerConfig`]. Building never fails; rejected bounds are
/// dropped and reported through [`PickerConfig::diagnostics`].
#[derive(Debug, Clone)]
#[must_use]
pub struct PickerConfigBuilder {
    config: PickerConfig,
}

impl PickerConfigBuilder {
    fn new(kind: PickerKind) -> Self {
        Self {
            config: PickerConfig {
                kind,
                mode: SelectionMode::default(),
                value_kind: kind.default_value_kind(),
                domain: Domain::Open,
                disabled_values: Vec::new(),
                bounds: Bounds::default(),
                locale: "en".into(),
                first_day_of_week: 1,
                disabled: false,
                read_only: false,
                range_keys: RangeKeys::default(),
                format: None,
                display_format: None,
                present_year: OffsetDateTime::now_utc().year(),
                diagnostics: Vec::new(),
            },
        }
    }

    /// Sets the selection mode.
    pub const fn mode(mut self, mode: SelectionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Shorthand for [`SelectionMode::Multiple`].
    pub const fn multiple(self) -> Self {
        self.mode(SelectionMode::Multiple)
    }

    /// Shorthand for [`SelectionMode::Range`].
    pub const fn range_selection(self) -> Self {
        self.mode(SelectionMode::Range)
    }

    /// Overrides the canonical value kind (weekdays stored as integers).
    pub const fn value_kind(mut self, kind: ValueKind) -> Self {
        self.config.value_kind = kind;
        self
    }

    /// Lists every valid value.
    pub fn options(mut self, options: impl IntoIterator<Item = PickerOption>) -> Self {
        self.config.domain = Domain::Enumerated(options.into_iter().collect());
        self
    }

    /// Values that can never be selected.
    pub fn disabled_values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        self.config.disabled_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Earliest year. Text must parse as an integer.
    pub fn min_year(mut self, year: impl Into<Scalar>) -> Self {
        self.config.bounds.min_year = self.number_bound("min year", year.into());
        self
    }

    /// Latest year. Text must parse as an integer.
    pub fn max_year(mut self, year: impl Into<Scalar>) -> Self {
        self.config.bounds.max_year = self.number_bound("max year", year.into());
        self
    }

    /// Both year bounds.
    pub fn year_range(self, min: impl Into<Scalar>, max: impl Into<Scalar>) -> Self {
        self.min_year(min).max_year(max)
    }

    /// Earliest date string.
    pub fn min_date(mut self, date: impl Into<String>) -> Self {
        self.config.bounds.min_date = self.date_bound("min date", date.into());
        self
    }

    /// Latest date string.
    pub fn max_date(mut self, date: impl Into<String>) -> Self {
        self.config.bounds.max_date = self.date_bound("max date", date.into());
        self
    }

    /// Smallest day of month; clamped into 1..=31.
    pub fn min_day(mut self, day: impl Into<Scalar>) -> Self {
        self.config.bounds.min_day = self.number_bound::<i64>("min day", day.into()).map(clamp_day);
        self
    }

    /// Largest day of month; clamped into 1..=31.
    pub fn max_day(mut self, day: impl Into<Scalar>) -> Self {
        self.config.bounds.max_day = self.number_bound::<i64>("max day", day.into()).map(clamp_day);
        self
    }

    /// Sets the locale tag.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into().replace('_', "-");
        self
    }

    /// 0 starts weeks on Sunday, 1 on Monday. Other values keep Monday.
    pub const fn first_day_of_week(mut self, day: u8) -> Self {
        self.config.first_day_of_week = if day <= 1 { day } else { 1 };
        self
    }

    /// Disables the whole widget.
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Makes the widget read-only.
    pub const fn read_only(mut self, read_only: bool) -> Self {
        self.config.read_only = read_only;
        self
    }

    /// Wire keys for range values.
    pub fn range_keys(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.config.range_keys = RangeKeys {
            start: start.into(),
            end: end.into(),
        };
        self
    }

    /// Storage format passed through to collaborators.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = Some(format.into());
        self
    }

    /// Display format passed through to collaborators.
    pub fn display_format(mut self, format: impl Into<String>) -> Self {
        self.config.display_format = Some(format.into());
        self
    }

    /// Pins the present year instead of reading the clock.
    pub const fn present_year(mut self, year: i32) -> Self {
        self.config.present_year = year;
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(mut self) -> PickerConfig {
        let kind = self.config.kind;
        let bounds = &mut self.config.bounds;

        // Month and week pickers navigate within the years of their date bounds.
        if kind.date_layout().is_some() {
            if bounds.min_year.is_none() {
                bounds.min_year = bounds.min_date.as_deref().and_then(year_of);
            }
            if bounds.max_year.is_none() {
                bounds.max_year = bounds.max_date.as_deref().and_then(year_of);
            }
        }

        let mut inverted = Vec::new();
        check_order("year", &mut bounds.min_year, &mut bounds.max_year, &mut inverted);
        check_order("date", &mut bounds.min_date, &mut bounds.max_date, &mut inverted);
        check_order("day", &mut bounds.min_day, &mut bounds.max_day, &mut inverted);
        self.config.diagnostics.extend(inverted);

        for problem in &self.config.diagnostics {
            tracing::warn!(kind = kind.as_str(), "{problem}; bound not applied");
        }
        self.config
    }

    fn number_bound<T: TryFrom<i64>>(&mut self, bound: &'static str, value: Scalar) -> Option<T> {
        let parsed = value
            .clone()
            .canonicalize(ValueKind::Integer)
            .and_then(|value| value.as_int())
            .and_then(|value| T::try_from(value).ok());
        if parsed.is_none() {
            self.config.diagnostics.push(ConfigError::MalformedBound {
                bound,
                value: value.to_string(),
            });
        }
        parsed
    }

    fn date_bound(&mut self, bound: &'static str, value: String) -> Option<String> {
        match self.config.kind.date_layout() {
            Some(format) if !self.config.kind.matches_layout(&value) => {
                self.config.diagnostics.push(ConfigError::MalformedDate {
                    bound,
                    value,
                    format,
                });
                None
            }
            _ => Some(value),
        }
    }
}

fn clamp_day(day: i64) -> u8 {
    // 1..=31 always fits in u8.
    u8::try_from(day.clamp(1, 31)).unwrap_or(31)
}

fn year_of(date: &str) -> Option<i32> {
    Scalar::from(date).year_component()
}

fn check_order<T: PartialOrd + ToString>(
    bound: &'static str,
    min: &mut Option<T>,
    max: &mut Option<T>,
    problems: &mut Vec<ConfigError>,
) {
    if let (Some(lo), Some(hi)) = (min.as_ref(), max.as_ref())
        && lo > hi
    {
        problems.push(ConfigError::InvertedBounds {
            bound,
            min: lo.to_string(),
            max: hi.to_string(),
        });
        *min = None;
        *max = None;
    }
}
