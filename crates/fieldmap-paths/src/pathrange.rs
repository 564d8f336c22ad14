use std::collections::VecDeque;

use fieldmap_core::{Point, Range};

/// Sentinel parent index for the search root.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Owner of the search state for one grid rectangle.
///
/// `PathRange` keeps its visited marks, parent links and frontier between
/// queries so repeated searches on the same map do not reallocate. It is
/// not shared: every request that needs a search owns its own.
#[derive(Debug)]
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // visited marks are generation stamps; a cell is visited when its
    // stamp equals the current generation
    pub(crate) marks: Vec<u32>,
    pub(crate) generation: u32,
    pub(crate) parents: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) visited: usize,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            marks: vec![0; len],
            generation: 0,
            parents: vec![NO_PARENT; len],
            queue: VecDeque::new(),
            visited: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, growing the caches when needed.
    pub fn set_range(&mut self, rng: Range) {
        let len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if len > self.marks.len() {
            self.marks.resize(len, 0);
            self.parents.resize(len, NO_PARENT);
        }
        // Old stamps may alias cells of the new layout.
        self.reset_marks();
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of cells the last search marked as visited.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    // -----------------------------------------------------------------------
    // Visited bookkeeping
    // -----------------------------------------------------------------------

    /// Start a new search: bump the generation so every stamp is stale.
    pub(crate) fn begin(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.reset_marks();
        }
        self.queue.clear();
        self.visited = 0;
    }

    fn reset_marks(&mut self) {
        self.marks.iter_mut().for_each(|m| *m = 0);
        self.generation = 1;
    }

    #[inline]
    pub(crate) fn is_visited(&self, i: usize) -> bool {
        self.marks[i] == self.generation
    }

    #[inline]
    pub(crate) fn visit(&mut self, i: usize, parent: usize) {
        self.marks[i] = self.generation;
        self.parents[i] = parent;
        self.visited += 1;
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
