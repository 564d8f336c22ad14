use thiserror::Error;

/// Why a decoded map produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The map lacks a start or a finish marker.
    #[error("start/finish marker not found (start: {start_found}, finish: {finish_found})")]
    MissingMarker {
        start_found: bool,
        finish_found: bool,
    },

    /// The search exhausted the frontier without reaching the finish.
    #[error("no path from start to finish")]
    NoPath,
}
