//! The [`Grid`] type: a rectangular field of [`Cell`]s.
//!
//! Storage is owned and row-major. Cloning a `Grid` yields an independent
//! copy, so a display overlay can never leak back into a searched grid.

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// A 2D grid of [`Cell`]s with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with
    /// [`Cell::Empty`]. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            cells: vec![Cell::Empty; w * h],
            width: w,
            height: h,
        }
    }

    /// Build a grid from rows that are already known to share one length.
    pub(crate) fn from_rows(width: usize, rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        debug_assert_eq!(cells.len(), width * height);
        Self {
            cells,
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some((p.y as usize) * self.width + (p.x as usize))
        } else {
            None
        }
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width as i32, self.height as i32)
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width as i32, self.height as i32)
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// Read the cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. No-op if `p` is outside the grid.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Set every cell of `r` that lies inside the grid. Returns how many
    /// cells were written.
    pub fn fill_range(&mut self, r: Range, cell: Cell) -> usize {
        let clipped = r.intersect(self.bounds());
        for p in clipped {
            self.set(p, cell);
        }
        clipped.len()
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() rejects a zero chunk size.
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Position of the last cell equal to `cell` in row-major order.
    pub fn find_last(&self, cell: Cell) -> Option<Point> {
        self.iter().filter(|&(_, c)| c == cell).map(|(p, _)| p).last()
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Each row as a string of glyphs, with no added separators.
    pub fn lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.glyph()).collect())
            .collect()
    }
}
