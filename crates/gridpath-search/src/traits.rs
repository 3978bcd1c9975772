use gridpath_core::{Grid, Point};

use crate::distance::manhattan;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before
    /// calling. The order of appended points decides tie-breaking, so it
    /// must be deterministic.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with an admissible heuristic, as required by A*. Every step costs 1.
pub trait AstarPather: Pather {
    /// Estimate of the number of steps from `from` to `to`.
    /// Must never overestimate (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

impl Pather for Grid {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Grid::neighbors(self, p, buf);
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
