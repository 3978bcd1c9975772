use gridpath_core::{Cell, Grid, Point};

/// Outcome of one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Start to goal inclusive; empty when no path exists.
    pub path: Vec<Point>,
    /// Every finalized cell, in visitation order.
    pub explored: Vec<Point>,
    pub success: bool,
}

impl PathResult {
    /// Number of moves along the path, or `None` without a path.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// The path resolved to cells of `grid`.
    pub fn path_cells<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = &'a Cell> + 'a {
        self.path.iter().filter_map(|&p| grid.at(p))
    }

    /// The explored cells of `grid`, in visitation order.
    pub fn explored_cells<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = &'a Cell> + 'a {
        self.explored.iter().filter_map(|&p| grid.at(p))
    }
}
