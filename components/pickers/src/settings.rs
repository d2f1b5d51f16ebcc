//! Package-wide picker defaults.
//!
//! Every key is optional; a missing file section keeps the built-in
//! default.
//!
//! ```toml
//! locale = "zh_CN"
//! first_day_of_week = 0
//! weekday_format = "integer"
//!
//! [year_range]
//! min = 1950
//! max = 2050
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use temporal_picker_locale::Locale;

/// Errors raised while loading [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The settings text is not valid TOML for [`Settings`].
    #[error("failed to parse picker settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How weekday pickers store their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayFormat {
    /// `monday` ... `sunday`.
    #[default]
    String,
    /// `1` (Monday) ... `7` (Sunday).
    Integer,
}

/// Defaults applied to every picker that does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display language; English when unset.
    pub locale: Option<Locale>,
    /// 0 = Sunday, 1 = Monday.
    pub first_day_of_week: u8,
    /// Storage format of weekday values.
    pub weekday_format: WeekdayFormat,
    /// Year range offered by year pickers.
    pub year_range: YearRange,
    /// Storage formats per picker kind.
    pub formats: Formats,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            first_day_of_week: 1,
            weekday_format: WeekdayFormat::default(),
            year_range: YearRange::default(),
            formats: Formats::default(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the text is not valid TOML or a
    /// key has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        Ok(settings.checked())
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] when the file cannot be read and
    /// [`SettingsError::Parse`] when its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolved display language.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    fn checked(mut self) -> Self {
        if self.first_day_of_week > 1 {
            tracing::warn!(
                first_day_of_week = self.first_day_of_week,
                "first day of week must be 0 or 1, using Monday"
            );
            self.first_day_of_week = 1;
        }
        self
    }
}

/// Inclusive year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawYearRange")]
pub struct YearRange {
    /// First year.
    pub min: i32,
    /// Last year.
    pub max: i32,
}

impl YearRange {
    /// Built-in range.
    pub const DEFAULT: Self = Self { min: 1900, max: 2100 };
}

impl Default for YearRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Deserialize)]
struct RawYearRange {
    min: Option<toml::Value>,
    max: Option<toml::Value>,
}

impl From<RawYearRange> for YearRange {
    fn from(raw: RawYearRange) -> Self {
        Self {
            min: lenient_year("min", raw.min, Self::DEFAULT.min),
            max: lenient_year("max", raw.max, Self::DEFAULT.max),
        }
    }
}

fn lenient_year(bound: &'static str, value: Option<toml::Value>, default: i32) -> i32 {
    let parsed = match &value {
        None => return default,
        Some(toml::Value::Integer(year)) => i32::try_from(*year).ok(),
        Some(toml::Value::String(text)) => text.trim().parse().ok(),
        Some(_) => None,
    };
    parsed.unwrap_or_else(|| {
        tracing::warn!(bound, ?value, default, "year range entry is not a year, using default");
        default
    })
}

/// Storage formats per picker kind, in the host's date-format notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Formats {
    pub year: String,
    pub month: String,
    pub week: String,
    pub date: String,
}

impl Default for Formats {
    fn default() -> Self {
        Self {
            year: "Y".into(),
            month: "Y-m".into(),
            week: "Y-\\WW".into(),
            date: "Y-m-d".into(),
        }
    }
}
