use fieldmap_core::Point;

use crate::PathRange;
use crate::path::Path;
use crate::pathrange::NO_PARENT;
use crate::traits::Pather;

impl PathRange {
    /// Find a path from `from` to `to` with the fewest moves, using a
    /// breadth-first search.
    ///
    /// Neighbors are expanded in the order the pather yields them, and
    /// each cell is visited at most once. The search stops when `to` is
    /// dequeued. Returns an empty [`Path`] if `to` is unreachable or either
    /// endpoint lies outside the range.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Path {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return Path::default();
        };

        self.begin();
        self.visit(start_idx, NO_PARENT);
        self.queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(ci) = self.queue.pop_front() else {
                break false;
            };
            if ci == goal_idx {
                break true;
            }

            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.is_visited(ni) {
                    continue;
                }
                self.visit(ni, ci);
                self.queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        log::trace!(
            "bfs {} -> {}: visited {} cells, found = {}",
            from,
            to,
            self.visited,
            found
        );

        if !found {
            return Path::default();
        }

        // Reconstruct path.
        let mut points = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            points.push(self.point(ci));
            ci = self.parents[ci];
        }
        points.reverse();
        Path::from(points)
    }
}
