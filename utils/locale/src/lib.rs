//! # Temporal Picker Locales
//!
//! Labels shown by the pickers: field names, weekday and month names, range
//! words, action captions and placeholders.
//!
//! ```
//! use temporal_picker_locale::Locale;
//!
//! let locale = Locale::parse("zh_CN");
//! assert_eq!(locale.tag(), "zh-CN");
//! assert_eq!(locale.labels().month(3), Some("三月"));
//!
//! // Anything unknown reads as English.
//! assert_eq!(Locale::parse("fr").labels().range.to, "to");
//! ```

#![no_std]

extern crate alloc;

mod labels;
mod tables;

pub use labels::{ActionLabels, Labels, Placeholders, RangeLabels, WEEKDAY_KEYS};

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Simplified Chinese.
    ZhCn,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 2] = [Self::En, Self::ZhCn];

    /// Resolves a language tag such as `en`, `en-US`, `zh_CN` or `zh-Hans`.
    ///
    /// Underscores are read as hyphens and case is ignored. Tags with no
    /// matching table fall back to English.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let normalized: String = tag.trim().replace('_', "-").to_ascii_lowercase();
        let language = normalized.split('-').next().unwrap_or_default();
        match language {
            "en" => Self::En,
            "zh" => Self::ZhCn,
            _ => {
                tracing::debug!(tag, "no labels for locale, using English");
                Self::En
            }
        }
    }

    /// Canonical tag, hyphenated.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
        }
    }

    /// Label table of this locale.
    #[must_use]
    pub const fn labels(self) -> &'static Labels {
        match self {
            Self::En => &tables::EN,
            Self::ZhCn => &tables::ZH_CN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = core::convert::Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(tag))
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::parse(&tag))
    }
}
