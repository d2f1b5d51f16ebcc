//! Selection values shaped by the picker's selection mode.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::Scalar;

/// How many values a picker holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// One value or nothing.
    #[default]
    Single,
    /// A set of values.
    Multiple,
    /// A start/end pair.
    Range,
}

/// A start/end pair. Once both ends are set, `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeValue {
    start: Option<Scalar>,
    end: Option<Scalar>,
}

impl RangeValue {
    /// Builds a range, moving a lone `end` to `start` and swapping inverted ends.
    #[must_use]
    pub fn new(start: Option<Scalar>, end: Option<Scalar>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => {
                let (start, end) = crate::range::normalize(start, end);
                Self {
                    start: Some(start),
                    end: Some(end),
                }
            }
            (None, Some(end)) => Self {
                start: Some(end),
                end: None,
            },
            (start, None) => Self { start, end: None },
        }
    }

    /// The earlier end, if chosen.
    #[must_use]
    pub const fn start(&self) -> Option<&Scalar> {
        self.start.as_ref()
    }

    /// The later end, if chosen.
    #[must_use]
    pub const fn end(&self) -> Option<&Scalar> {
        self.end.as_ref()
    }

    /// Both ends are set.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Only the start is set.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Neither end is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub(crate) fn into_parts(self) -> (Option<Scalar>, Option<Scalar>) {
        (self.start, self.end)
    }
}

/// The current selection. Its variant always matches the configured mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerValue {
    /// Selection for [`SelectionMode::Single`].
    Single(Option<Scalar>),
    /// Selection for [`SelectionMode::Multiple`]. Unique members; numeric
    /// sets are kept ascending, text sets keep insertion order.
    Multiple(Vec<Scalar>),
    /// Selection for [`SelectionMode::Range`].
    Range(RangeValue),
}

impl PickerValue {
    /// The empty shape for `mode`.
    #[must_use]
    pub const fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multiple => Self::Multiple(Vec::new()),
            SelectionMode::Range => Self::Range(RangeValue {
                start: None,
                end: None,
            }),
        }
    }

    /// The mode this value is shaped for.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multiple(_) => SelectionMode::Multiple,
            Self::Range(_) => SelectionMode::Range,
        }
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_none(),
            Self::Multiple(values) => values.is_empty(),
            Self::Range(range) => range.is_empty(),
        }
    }

    /// Iterates every member (the scalar, each element, or the range ends).
    pub fn members(&self) -> impl Iterator<Item = &Scalar> {
        let (first, second, rest): (Option<&Scalar>, Option<&Scalar>, &[Scalar]) = match self {
            Self::Single(value) => (value.as_ref(), None, &[]),
            Self::Multiple(values) => (None, None, values.as_slice()),
            Self::Range(range) => (range.start(), range.end(), &[]),
        };
        first.into_iter().chain(second).chain(rest.iter())
    }
}

/// Sorts numeric sets ascending and removes duplicates, keeping first occurrences.
pub(crate) fn tidy_set(values: &mut Vec<Scalar>) {
    let mut seen = Vec::with_capacity(values.len());
    values.retain(|value| {
        if seen.contains(value) {
            false
        } else {
            seen.push(value.clone());
            true
        }
    });
    if values.iter().all(Scalar::is_int) {
        values.sort();
    }
}
