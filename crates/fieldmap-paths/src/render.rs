use fieldmap_core::{Cell, Grid, PATH_GLYPH};

use crate::path::Path;

/// Overlay `path` onto a copy of `grid` and return one string per row.
///
/// Path points on start, finish or separator cells keep their glyph; every
/// other point is drawn as [`PATH_GLYPH`]. Rows are the raw cells with no
/// added separators. `grid` is left untouched.
pub fn render(grid: &Grid, path: &Path) -> Vec<String> {
    let mut rows: Vec<Vec<char>> = grid
        .rows()
        .map(|row| row.iter().map(|c| c.glyph()).collect())
        .collect();
    for p in path {
        let Some(cell) = grid.at(p) else {
            continue;
        };
        if cell.is_marker() || cell == Cell::Separator {
            continue;
        }
        rows[p.y as usize][p.x as usize] = PATH_GLYPH;
    }
    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}
