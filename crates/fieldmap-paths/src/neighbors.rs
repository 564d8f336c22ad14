use fieldmap_core::Point;

/// One of the four cardinal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// `y + 1`.
    Down,
    /// `x + 1`.
    Right,
    /// `y - 1`.
    Up,
    /// `x - 1`.
    Left,
}

/// Order in which the search expands neighbors.
///
/// With a FIFO frontier this order decides which of several equally short
/// paths is returned.
pub const SEARCH_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Left,
];

impl Direction {
    /// Unit offset of the move.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Down => Point::new(0, 1),
            Self::Right => Point::new(1, 0),
            Self::Up => Point::new(0, -1),
            Self::Left => Point::new(-1, 0),
        }
    }

    /// Whether the move changes the row.
    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Down | Self::Up)
    }
}

/// The four neighbors of `p` paired with the move reaching them, in
/// [`SEARCH_ORDER`].
#[inline]
pub fn cardinal(p: Point) -> [(Direction, Point); 4] {
    SEARCH_ORDER.map(|d| (d, p + d.delta()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_order_is_down_right_up_left() {
        let deltas: Vec<Point> = SEARCH_ORDER.iter().map(|d| d.delta()).collect();
        assert_eq!(
            deltas,
            vec![
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(0, -1),
                Point::new(-1, 0),
            ]
        );
    }

    #[test]
    fn cardinal_pairs_direction_and_point() {
        let n = cardinal(Point::new(2, 2));
        assert_eq!(n[0], (Direction::Down, Point::new(2, 3)));
        assert_eq!(n[3], (Direction::Left, Point::new(1, 2)));
        assert!(n[2].0.is_vertical());
        assert!(!n[1].0.is_vertical());
    }
}
