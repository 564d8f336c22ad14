//! Field solver node: decode, search, report.

use fieldmap_core::{DecodeError, Range, codec};
use fieldmap_paths::{PathRange, Solution, SolveError, solve_in};

use crate::bus::Subscription;

/// Result of handling one received map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    NoPath,
    MissingMarker {
        start_found: bool,
        finish_found: bool,
    },
    Malformed(DecodeError),
}

impl Outcome {
    /// The records reported for this outcome.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            Self::Solved(sol) => sol.report_lines(),
            Self::NoPath => vec!["No path from S to F!".to_string()],
            Self::MissingMarker {
                start_found,
                finish_found,
            } => {
                let mut lines = vec!["Start/finish marker not found!".to_string()];
                if !start_found {
                    lines.push("Missing marker: S".to_string());
                }
                if !finish_found {
                    lines.push("Missing marker: F".to_string());
                }
                lines
            }
            Self::Malformed(err) => vec![format!("Malformed field map: {err}")],
        }
    }
}

/// Runs the decode-side pipeline for each received payload.
///
/// Every payload is decoded into its own grid. The search caches are
/// reused from one payload to the next but never shared between solvers.
#[derive(Debug)]
pub struct FieldSolver {
    search: PathRange,
}

impl Default for FieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSolver {
    pub fn new() -> Self {
        Self {
            search: PathRange::new(Range::default()),
        }
    }

    /// Decode and solve one payload.
    pub fn solve(&mut self, payload: &str) -> Outcome {
        let grid = match codec::decode(payload) {
            Ok(grid) => grid,
            Err(err) => return Outcome::Malformed(err),
        };
        match solve_in(&mut self.search, &grid) {
            Ok(sol) => Outcome::Solved(sol),
            Err(SolveError::NoPath) => Outcome::NoPath,
            Err(SolveError::MissingMarker {
                start_found,
                finish_found,
            }) => Outcome::MissingMarker {
                start_found,
                finish_found,
            },
        }
    }

    /// Solve one payload and log the report.
    pub fn handle(&mut self, payload: &str) -> Outcome {
        let outcome = self.solve(payload);
        match &outcome {
            Outcome::Malformed(_) => {
                for line in outcome.report_lines() {
                    log::warn!("{line}");
                }
            }
            _ => {
                for line in outcome.report_lines() {
                    log::info!("{line}");
                }
            }
        }
        outcome
    }

    /// Handle every payload on `sub` until the bus closes, passing each
    /// outcome to `on_outcome`.
    pub fn spin(&mut self, sub: Subscription, mut on_outcome: impl FnMut(Outcome)) -> usize {
        log::debug!("solver listening on {:?}", sub.topic());
        sub.spin(|payload| on_outcome(self.handle(&payload)))
    }
}
