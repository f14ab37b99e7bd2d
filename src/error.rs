//! Error types for the fallible edges of the crate.
//!
//! Building a view model and navigating pages never fail. Errors only arise
//! when parsing host payloads and when a configuration UI writes a setting.

use thiserror::Error;

/// Errors raised while decoding a host payload.
#[derive(Debug, Error)]
pub enum InputError {
    /// The payload was not valid JSON or did not match the expected shape.
    #[error("malformed host payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when validating a value written through the settings surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// The object/property pair is not part of the settings surface.
    #[error("unknown setting {object}.{property}")]
    UnknownProperty {
        /// Object name, e.g. `pagesize`.
        object: String,
        /// Property name, e.g. `numberofrows`.
        property: String,
    },
    /// The value is not a whole number.
    #[error("{property} must be a whole number, got {value}")]
    NotAnInteger {
        /// Property name.
        property: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The value lies outside the published range.
    #[error("{property} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Property name.
        property: &'static str,
        /// Rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },
}
