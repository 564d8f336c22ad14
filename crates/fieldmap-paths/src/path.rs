use fieldmap_core::Point;

/// An ordered sequence of points from start to finish, both included.
///
/// An empty path means no path was found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Point>);

impl Path {
    /// The points of the path, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Number of points, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.0.first().copied()
    }

    #[inline]
    pub fn finish(&self) -> Option<Point> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
