//! Two-value range arithmetic.
//!
//! Endpoints are "selected", never "in range": every interval test here
//! excludes both ends.

use crate::{RangeValue, Scalar};

/// Orders two values so that the first is not greater than the second.
pub fn normalize<T: Ord>(start: T, end: T) -> (T, T) {
    if end < start { (end, start) } else { (start, end) }
}

/// The provisional interval between a chosen start and the hovered value.
pub fn preview_interval<'a, T: Ord>(start: &'a T, hover: &'a T) -> (&'a T, &'a T) {
    normalize(start, hover)
}

/// `lo < candidate < hi`.
pub fn is_strictly_between<T: Ord>(candidate: &T, lo: &T, hi: &T) -> bool {
    lo < candidate && candidate < hi
}

/// Applies one click to a range.
///
/// * empty: the click becomes the start.
/// * start only: the earlier of the two values becomes the start and the
///   later the end. Clicking the start itself completes a single-point range.
/// * complete: a new range starts at the click and the old end is dropped.
#[must_use]
pub fn advance(range: RangeValue, candidate: Scalar) -> RangeValue {
    match range.into_parts() {
        (Some(start), None) => {
            let (start, end) = normalize(start, candidate);
            RangeValue::new(Some(start), Some(end))
        }
        _ => RangeValue::new(Some(candidate), None),
    }
}

/// Whether `candidate` lies strictly inside the completed range, or inside
/// the hover preview while only the start is chosen.
pub fn contains(range: &RangeValue, hover: Option<&Scalar>, candidate: &Scalar) -> bool {
    match (range.start(), range.end(), hover) {
        (Some(start), Some(end), _) => is_strictly_between(candidate, start, end),
        (Some(start), None, Some(hover)) => {
            let (lo, hi) = preview_interval(start, hover);
            is_strictly_between(candidate, lo, hi)
        }
        _ => false,
    }
}
