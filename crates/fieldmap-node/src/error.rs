//! Error types for the node layer.

use thiserror::Error;

/// Top-level error type for node operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Field parameters could not be read or are out of range.
    #[error("parameter error: {0}")]
    Params(#[from] ParamsError),

    /// The topic bus refused an operation.
    #[error("bus error: {0}")]
    Bus(#[from] BusError),

    /// Reading a configuration or parameter file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid JSON for its type.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Errors while reading field parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before all values were read.
    #[error("expected {what}, found end of input")]
    MissingValue { what: &'static str },

    #[error("expected {what}, found {token:?}")]
    NotAnInteger { what: &'static str, token: String },

    #[error("field size must be positive, got {width}x{height}")]
    BadDimensions { width: i32, height: i32 },

    #[error("obstacle count must not be negative, got {0}")]
    NegativeCount(i32),

    #[error("invalid parameter file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Topic bus errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    /// The bus was closed; no further publishes or subscriptions.
    #[error("bus is closed")]
    Closed,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
