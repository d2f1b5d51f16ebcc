//! Scalar picker values and their canonical comparable form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A single selectable value.
///
/// Integers order numerically and text orders lexicographically. Mixed
/// comparisons never happen inside a picker because every candidate is
/// canonicalized to the domain's [`ValueKind`] first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Years, days of month and integer weekdays.
    Int(i64),
    /// Month strings (`2024-01`), ISO weeks (`2024-W07`) and weekday names.
    Text(String),
}

/// The canonical representation used by a picker domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Values compare as integers.
    Integer,
    /// Values compare as fixed-width strings.
    #[default]
    Text,
}

impl Scalar {
    /// Returns the integer payload, if any.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Text(value) => Some(value),
        }
    }

    /// Whether this scalar is numeric.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Converts the scalar into the canonical form of `kind`.
    ///
    /// Integer domains accept decimal text (surrounding whitespace is
    /// ignored). Text domains render integers in decimal. Returns `None`
    /// when the value has no representation in `kind`.
    #[must_use]
    pub fn canonicalize(self, kind: ValueKind) -> Option<Self> {
        match (self, kind) {
            (Self::Int(value), ValueKind::Integer) => Some(Self::Int(value)),
            (Self::Text(text), ValueKind::Integer) => text.trim().parse().ok().map(Self::Int),
            (Self::Int(value), ValueKind::Text) => Some(Self::Text(value.to_string())),
            (Self::Text(text), ValueKind::Text) => Some(Self::Text(text)),
        }
    }

    /// Leading four-digit year of a `YYYY-…` string, or the integer itself.
    #[must_use]
    pub fn year_component(&self) -> Option<i32> {
        match self {
            Self::Int(value) => i32::try_from(*value).ok(),
            Self::Text(text) => {
                let prefix = text.get(..4)?;
                if !prefix.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                if text.len() > 4 && text.as_bytes()[4] != b'-' {
                    return None;
                }
                prefix.parse().ok()
            }
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
