//! Error types for the temporal-picker-core crate.

use alloc::string::String;

/// A configuration problem that was degraded instead of failing.
///
/// The offending bound is not applied. The error is kept on the built
/// config for inspection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A bound could not be read as a number.
    #[error("malformed {bound} bound: {value:?} is not a number")]
    MalformedBound {
        /// Which bound was rejected.
        bound: &'static str,
        /// The raw value that was provided.
        value: String,
    },

    /// A date bound does not match the fixed-width storage format.
    #[error("malformed {bound} bound: {value:?} does not match {format}")]
    MalformedDate {
        /// Which bound was rejected.
        bound: &'static str,
        /// The raw value that was provided.
        value: String,
        /// The expected layout, e.g. `YYYY-MM`.
        format: &'static str,
    },

    /// The minimum of a bound pair is greater than its maximum.
    #[error("inverted {bound} bounds: min {min} is greater than max {max}")]
    InvertedBounds {
        /// Which bound pair was rejected.
        bound: &'static str,
        /// The provided minimum.
        min: String,
        /// The provided maximum.
        max: String,
    },
}

/// Failure reported by the external state channel.
///
/// Never fatal: the local state is committed regardless and the next
/// successful read re-synchronises.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The owner refused or failed to store the value.
    #[error("state write rejected: {0}")]
    Rejected(String),

    /// The owner could not be read.
    #[error("state read failed: {0}")]
    Unreadable(String),

    /// The owner is gone (the form or record was torn down).
    #[error("state channel closed")]
    Closed,
}
