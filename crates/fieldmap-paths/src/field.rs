use fieldmap_core::{Cell, Grid, Point};

use crate::neighbors::{Direction, cardinal};
use crate::traits::Pather;

/// Movement rules over a decoded field map.
///
/// Sideways moves may enter any cell that is not blocked, separators
/// included. Vertical moves may enter neither blocked nor separator cells,
/// so rows are only ever changed on real data columns.
#[derive(Clone, Copy, Debug)]
pub struct FieldPather<'a> {
    grid: &'a Grid,
}

impl<'a> FieldPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Whether a move in direction `dir` may land on `to`.
    pub fn is_legal(&self, dir: Direction, to: Point) -> bool {
        match self.grid.at(to) {
            None | Some(Cell::Blocked) => false,
            Some(Cell::Separator) => !dir.is_vertical(),
            Some(_) => true,
        }
    }
}

impl Pather for FieldPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for (dir, n) in cardinal(p) {
            if self.is_legal(dir, n) {
                buf.push(n);
            }
        }
    }
}
