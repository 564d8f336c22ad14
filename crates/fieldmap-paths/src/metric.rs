//! Path cost, computed after the search.
//!
//! The search minimizes the number of moves, separator crossings included.
//! The cost below counts only landings on real cells, so a longer detour
//! can have a lower cost than the path the search returns.

use fieldmap_core::{Cell, Grid};

use crate::path::Path;

/// Number of path points lying on separator cells.
pub fn separator_count(grid: &Grid, path: &Path) -> usize {
    path.iter()
        .filter(|&p| grid.at(p) == Some(Cell::Separator))
        .count()
}

/// Cost `M` of a path: the number of non-separator points minus one for
/// the start cell.
///
/// Returns `None` for an empty path.
pub fn path_cost(grid: &Grid, path: &Path) -> Option<usize> {
    if path.is_empty() {
        return None;
    }
    Some(path.len().saturating_sub(separator_count(grid, path) + 1))
}
