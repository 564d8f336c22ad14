//! Error types for map decoding.

use thiserror::Error;

/// A wire payload that cannot be turned into a rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload has no rows, or its first row is empty.
    #[error("empty map payload")]
    Empty,

    /// A row's raw length differs from the first row's.
    #[error("row {row} has {actual} raw columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
