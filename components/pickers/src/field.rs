//! Options shared by every picker.

use temporal_picker_core::{PickerConfig, PickerConfigBuilder, PickerKind, Scalar, SelectionMode};
use temporal_picker_locale::{Labels, Locale};
use time::OffsetDateTime;

use crate::Settings;

/// Field-level options common to all pickers.
#[derive(Debug, Clone)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) mode: SelectionMode,
    pub(crate) disabled_values: Vec<Scalar>,
    pub(crate) locale: Option<Locale>,
    pub(crate) format: Option<String>,
    pub(crate) display_format: Option<String>,
    pub(crate) first_day_of_week: Option<u8>,
    pub(crate) disabled: bool,
    pub(crate) read_only: bool,
    pub(crate) range_keys: Option<(String, String)>,
    pub(crate) present_year: Option<i32>,
    pub(crate) settings: Settings,
}

impl Field {
    pub(crate) fn new(name: impl Into<String>, mode: SelectionMode) -> Self {
        Self {
            name: name.into(),
            mode,
            disabled_values: Vec::new(),
            locale: None,
            format: None,
            display_format: None,
            first_day_of_week: None,
            disabled: false,
            read_only: false,
            range_keys: None,
            present_year: None,
            settings: Settings::default(),
        }
    }

    /// Field name on the owning record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locale of this field, falling back to the settings.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_else(|| self.settings.locale())
    }

    /// Labels of [`Self::locale`].
    #[must_use]
    pub fn labels(&self) -> &'static Labels {
        self.locale().labels()
    }

    /// 0 = Sunday, 1 = Monday.
    #[must_use]
    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week.unwrap_or(self.settings.first_day_of_week)
    }

    /// The year used as "now".
    #[must_use]
    pub fn present_year(&self) -> i32 {
        self.present_year
            .unwrap_or_else(|| OffsetDateTime::now_utc().year())
    }

    /// Storage format, or `default` when none was set.
    #[must_use]
    pub fn format_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.format.as_deref().unwrap_or(default)
    }

    /// Starts a config builder carrying these options.
    pub(crate) fn builder(&self, kind: PickerKind, default_format: &str) -> PickerConfigBuilder {
        let format = self.format_or(default_format).to_owned();
        let mut builder = PickerConfig::builder(kind)
            .mode(self.mode)
            .disabled_values(self.disabled_values.iter().cloned())
            .locale(self.locale().tag())
            .first_day_of_week(self.first_day_of_week())
            .disabled(self.disabled)
            .read_only(self.read_only)
            .present_year(self.present_year())
            .display_format(self.display_format.clone().unwrap_or_else(|| format.clone()))
            .format(format);
        if let Some((start, end)) = &self.range_keys {
            builder = builder.range_keys(start.clone(), end.clone());
        }
        builder
    }
}

/// Implements the builder methods every picker shares. The picker must hold
/// its [`Field`] in a field named `field`.
macro_rules! field_builders {
    ($picker:ty) => {
        impl $picker {
            /// Shared field options.
            #[must_use]
            pub const fn field(&self) -> &$crate::Field {
                &self.field
            }

            /// Stores a list of values.
            #[must_use]
            pub fn multiple(mut self) -> Self {
                self.field.mode = temporal_picker_core::SelectionMode::Multiple;
                self
            }

            /// Stores a single value.
            #[must_use]
            pub fn single(mut self) -> Self {
                self.field.mode = temporal_picker_core::SelectionMode::Single;
                self
            }

            /// Stores a two-click range.
            #[must_use]
            pub fn range_selection(mut self) -> Self {
                self.field.mode = temporal_picker_core::SelectionMode::Range;
                self
            }

            /// Object keys of a stored range.
            #[must_use]
            pub fn range_keys(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
                self.field.range_keys = Some((start.into(), end.into()));
                self
            }

            /// Values that can never be selected.
            #[must_use]
            pub fn disabled_options<I>(mut self, values: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<temporal_picker_core::Scalar>,
            {
                self.field.disabled_values = values.into_iter().map(Into::into).collect();
                self
            }

            /// Display language, e.g. `"zh_CN"`.
            #[must_use]
            pub fn locale(mut self, tag: &str) -> Self {
                self.field.locale = Some(temporal_picker_locale::Locale::parse(tag));
                self
            }

            /// Storage format, in the host's date-format notation.
            #[must_use]
            pub fn format(mut self, format: impl Into<String>) -> Self {
                self.field.format = Some(format.into());
                self
            }

            /// Display format; the storage format when unset.
            #[must_use]
            pub fn display_format(mut self, format: impl Into<String>) -> Self {
                self.field.display_format = Some(format.into());
                self
            }

            /// 0 = Sunday, 1 = Monday. Other values are ignored.
            #[must_use]
            pub fn first_day_of_week(mut self, day: u8) -> Self {
                self.field.first_day_of_week = (day <= 1).then_some(day);
                self
            }

            /// Shorthand for `first_day_of_week(1)`.
            #[must_use]
            pub fn week_starts_on_monday(self) -> Self {
                self.first_day_of_week(1)
            }

            /// Shorthand for `first_day_of_week(0)`.
            #[must_use]
            pub fn week_starts_on_sunday(self) -> Self {
                self.first_day_of_week(0)
            }

            /// Rejects every intent and keeps the dropdown closed.
            #[must_use]
            pub fn disabled(mut self, disabled: bool) -> Self {
                self.field.disabled = disabled;
                self
            }

            /// Rejects every intent but may still open.
            #[must_use]
            pub fn read_only(mut self, read_only: bool) -> Self {
                self.field.read_only = read_only;
                self
            }

            /// Overrides the current year.
            #[must_use]
            pub fn present_year(mut self, year: i32) -> Self {
                self.field.present_year = Some(year);
                self
            }

            /// Replaces the package defaults.
            #[must_use]
            pub fn settings(mut self, settings: $crate::Settings) -> Self {
                self.field.settings = settings;
                self
            }
        }
    };
}
