//! Derived display flags for search results.
//!
//! An [`Overlay`] records which cells a search has explored and which lie on
//! the final path. It is computed by the caller from progress notifications
//! and never touched by the search itself.

use crate::cell::{Cell, CellKind};
use crate::geom::Point;
use crate::grid::Grid;
#[cfg(feature = "serde")]
use crate::grid::{self, ShapeError};

/// How a cell should be drawn, highest precedence first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shade {
    Start,
    Goal,
    Wall,
    Path,
    Explored,
    Empty,
}

/// Per-cell `explored` / `path` flags for one grid size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "OverlayData"))]
pub struct Overlay {
    rows: i32,
    cols: i32,
    explored: Vec<bool>,
    path: Vec<bool>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct OverlayData {
    rows: i32,
    cols: i32,
    explored: Vec<bool>,
    path: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<OverlayData> for Overlay {
    type Error = ShapeError;

    fn try_from(data: OverlayData) -> Result<Self, Self::Error> {
        let expected = grid::area(data.rows, data.cols)?;
        for flags in [&data.explored, &data.path] {
            if flags.len() != expected {
                return Err(ShapeError::Length {
                    expected,
                    found: flags.len(),
                });
            }
        }
        Ok(Self {
            rows: data.rows,
            cols: data.cols,
            explored: data.explored,
            path: data.path,
        })
    }
}

impl Overlay {
    /// An empty overlay sized for `rows × cols`.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let len = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            explored: vec![false; len],
            path: vec![false; len],
        }
    }

    /// An empty overlay matching `grid`'s dimensions.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return None;
        }
        Some((p.row as usize) * (self.cols as usize) + (p.col as usize))
    }

    /// Clear every flag.
    pub fn clear(&mut self) {
        self.explored.fill(false);
        self.path.fill(false);
    }

    /// Mark everything in `explored`, and `path` when present.
    ///
    /// Points outside the overlay are ignored, so a stale notification
    /// arriving after a resize cannot corrupt it.
    pub fn apply_progress(&mut self, explored: &[Point], path: Option<&[Point]>) {
        for &p in explored {
            if let Some(i) = self.idx(p) {
                self.explored[i] = true;
            }
        }
        for &p in path.unwrap_or_default() {
            if let Some(i) = self.idx(p) {
                self.path[i] = true;
            }
        }
    }

    /// Whether `p` was explored.
    pub fn is_explored(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.explored[i])
    }

    /// Whether `p` is on the path.
    pub fn is_path(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.path[i])
    }

    /// Number of explored cells.
    pub fn explored_count(&self) -> usize {
        self.explored.iter().filter(|&&b| b).count()
    }

    /// Number of path cells.
    pub fn path_count(&self) -> usize {
        self.path.iter().filter(|&&b| b).count()
    }

    /// Resolve how `cell` should be drawn. Editor kinds win over search
    /// flags, and path wins over explored.
    pub fn shade(&self, cell: &Cell) -> Shade {
        match cell.kind {
            CellKind::Start => Shade::Start,
            CellKind::Goal => Shade::Goal,
            CellKind::Wall => Shade::Wall,
            CellKind::Empty if self.is_path(cell.pos) => Shade::Path,
            CellKind::Empty if self.is_explored(cell.pos) => Shade::Explored,
            CellKind::Empty => Shade::Empty,
        }
    }
}
