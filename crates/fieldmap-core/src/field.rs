//! Field construction: [`FieldSpec`] and [`Obstacle`].
//!
//! A field is built once from externally supplied parameters. Start and
//! finish are marked first, obstacles are rasterized afterwards, so an
//! obstacle covering a marker erases it.

use rand::{Rng, RngExt};

use crate::cell::Cell;
use crate::geom::{Point, Range};
use crate::grid::Grid;

/// A rectangular obstacle given by two diagonal corners, both inclusive.
///
/// Corners may be supplied in any order; they are normalized, never
/// rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub a: Point,
    pub b: Point,
}

impl Obstacle {
    /// Create an obstacle from corner coordinates `(x1, y1)` and `(x2, y2)`.
    #[inline]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            a: Point::new(x1, y1),
            b: Point::new(x2, y2),
        }
    }

    /// The covered area as a half-open range.
    #[inline]
    pub fn range(self) -> Range {
        let min = Point::new(self.a.x.min(self.b.x), self.a.y.min(self.b.y));
        let max = Point::new(self.a.x.max(self.b.x), self.a.y.max(self.b.y));
        Range {
            min,
            max: max.shift(1, 1),
        }
    }
}

/// Everything needed to build a field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSpec {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub finish: Point,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Obstacle>,
}

impl FieldSpec {
    /// Create a field description without obstacles.
    pub fn new(width: i32, height: i32, start: Point, finish: Point) -> Self {
        Self {
            width,
            height,
            start,
            finish,
            obstacles: Vec::new(),
        }
    }

    /// Add an obstacle (builder).
    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Rasterize the field.
    ///
    /// An out-of-bounds start or finish is silently left unmarked. Obstacles
    /// are clamped to the grid and applied after the markers.
    pub fn build(&self) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        if grid.contains(self.start) {
            grid.set(self.start, Cell::Start);
        }
        if grid.contains(self.finish) {
            grid.set(self.finish, Cell::Finish);
        }
        for obstacle in &self.obstacles {
            grid.fill_range(obstacle.range(), Cell::Blocked);
        }
        grid
    }

    /// Generate a random field of the given size with `obstacles`
    /// rectangles. All corners are drawn inside the grid.
    ///
    /// Markers may end up under an obstacle, exactly as with user input.
    pub fn random(rng: &mut impl Rng, width: i32, height: i32, obstacles: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut point = || Point::new(rng.random_range(0..width), rng.random_range(0..height));
        let start = point();
        let finish = point();
        let obstacles = (0..obstacles)
            .map(|_| Obstacle {
                a: point(),
                b: point(),
            })
            .collect();
        Self {
            width,
            height,
            start,
            finish,
            obstacles,
        }
    }
}
