use fieldmap_core::Point;

/// Minimal pathfinding interface. Provides neighbor enumeration.
pub trait Pather {
    /// Append the legal moves out of `p` into `buf`, in expansion order.
    /// The caller clears `buf` before calling.
    ///
    /// Visited filtering is the search's job, not the pather's.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
