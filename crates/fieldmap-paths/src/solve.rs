//! One decode-side pass: locate markers, search, measure, render.

use fieldmap_core::{Cell, Grid, Point};

use crate::error::SolveError;
use crate::field::FieldPather;
use crate::metric::path_cost;
use crate::path::Path;
use crate::pathrange::PathRange;
use crate::render::render;

/// A found path with its cost and display rows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub path: Path,
    /// Cost `M`, see [`path_cost`].
    pub cost: usize,
    pub rendered: Vec<String>,
}

impl Solution {
    /// The records reported for this solution: a heading, the rendered
    /// rows and the cost line.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rendered.len() + 2);
        lines.push("Path from S to F:".to_string());
        lines.extend(self.rendered.iter().cloned());
        lines.push(format!("M: {}", self.cost));
        lines
    }
}

/// Locate the start and finish markers. When a marker occurs more than
/// once the last one in row-major order wins.
pub fn find_markers(grid: &Grid) -> Result<(Point, Point), SolveError> {
    match (grid.find_last(Cell::Start), grid.find_last(Cell::Finish)) {
        (Some(start), Some(finish)) => Ok((start, finish)),
        (start, finish) => Err(SolveError::MissingMarker {
            start_found: start.is_some(),
            finish_found: finish.is_some(),
        }),
    }
}

/// Search a decoded map from its start to its finish marker.
pub fn solve(grid: &Grid) -> Result<Solution, SolveError> {
    solve_in(&mut PathRange::new(grid.bounds()), grid)
}

/// Like [`solve`], reusing the caches of `pr`. The range is reset to the
/// bounds of `grid` first, so `pr` may come from a map of any size.
pub fn solve_in(pr: &mut PathRange, grid: &Grid) -> Result<Solution, SolveError> {
    let (start, finish) = find_markers(grid)?;
    pr.set_range(grid.bounds());
    let path = pr.bfs_path(&FieldPather::new(grid), start, finish);
    let cost = path_cost(grid, &path).ok_or(SolveError::NoPath)?;
    log::debug!(
        "solved {} -> {}: {} points, cost {}",
        start,
        finish,
        path.len(),
        cost
    );
    let rendered = render(grid, &path);
    Ok(Solution {
        path,
        cost,
        rendered,
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use fieldmap_core::codec;

    #[test]
    fn solution_round_trip() {
        let grid = codec::decode("S . \n. F \n").unwrap();
        let sol = solve(&grid).unwrap();
        let json = serde_json::to_string(&sol).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sol);
    }
}
