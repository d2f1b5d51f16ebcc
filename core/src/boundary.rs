//! Selectability rules.
//!
//! Date bounds compare lexicographically, which is only meaningful because
//! candidates and bounds share one fixed-width layout (`YYYY-MM`,
//! `YYYY-Www`). The layout is checked when the config is built, not here.

use crate::{PickerConfig, PickerKind, Scalar, config::Bounds};

/// Whether `candidate` may be selected under `config`.
///
/// `candidate` must already be in the config's canonical form. Rules, in
/// order: the disabled set, then any bound applying to the candidate's
/// comparable representation.
#[must_use]
pub fn is_selectable(candidate: &Scalar, config: &PickerConfig) -> bool {
    !is_listed_disabled(candidate, config) && within_bounds(candidate, config.kind, &config.bounds)
}

/// Negation of [`is_selectable`].
#[must_use]
pub fn is_disabled(candidate: &Scalar, config: &PickerConfig) -> bool {
    !is_selectable(candidate, config)
}

fn is_listed_disabled(candidate: &Scalar, config: &PickerConfig) -> bool {
    if config.disabled_values.contains(candidate) {
        return true;
    }
    // A bare month number disables that month in every year.
    config.kind == PickerKind::Month
        && month_of(candidate).is_some_and(|month| config.disabled_values.contains(&Scalar::Int(month)))
}

fn within_bounds(candidate: &Scalar, kind: PickerKind, bounds: &Bounds) -> bool {
    match kind {
        PickerKind::Year => candidate
            .as_int()
            .is_none_or(|year| within(year, bounds.min_year.map(i64::from), bounds.max_year.map(i64::from))),
        PickerKind::Month | PickerKind::Week => {
            let year_ok = candidate
                .year_component()
                .is_none_or(|year| within(year, bounds.min_year, bounds.max_year));
            let date_ok = candidate.as_text().is_none_or(|text| {
                within(text, bounds.min_date.as_deref(), bounds.max_date.as_deref())
            });
            year_ok && date_ok
        }
        PickerKind::DayOfMonth => candidate
            .as_int()
            .is_none_or(|day| within(day, bounds.min_day.map(i64::from), bounds.max_day.map(i64::from))),
        PickerKind::Weekday => true,
    }
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

fn month_of(candidate: &Scalar) -> Option<i64> {
    candidate.as_text()?.get(5..7)?.parse().ok()
}

/// Clamps a navigation year into the configured year bounds.
#[must_use]
pub fn clamp_year(year: i32, bounds: &Bounds) -> i32 {
    let year = bounds.min_year.map_or(year, |min| year.max(min));
    bounds.max_year.map_or(year, |max| year.min(max))
}
