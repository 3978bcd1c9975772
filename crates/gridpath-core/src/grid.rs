//! The [`Grid`] type — a `rows × cols` collection of [`Cell`]s.
//!
//! Cells are stored row-major. Every in-bounds [`Point`] maps to exactly one
//! cell, and the dimensions are fixed for the lifetime of a `Grid` value:
//! resizing means building a new grid.

use thiserror::Error;

use crate::cell::{Cell, CellKind};
use crate::geom::Point;

/// A rectangular grid of [`Cell`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridData"))]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

/// Cell data that does not describe a `rows × cols` grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("negative dimensions {rows}x{cols}")]
    Negative { rows: i32, cols: i32 },
    #[error("expected {expected} cells, found {found}")]
    Length { expected: usize, found: usize },
    #[error("cell {index} is at {found}, expected {expected}")]
    Misplaced {
        index: usize,
        expected: Point,
        found: Point,
    },
}

/// Number of cells in a `rows × cols` grid, rejecting negative sizes.
pub(crate) fn area(rows: i32, cols: i32) -> Result<usize, ShapeError> {
    if rows < 0 || cols < 0 {
        return Err(ShapeError::Negative { rows, cols });
    }
    Ok((rows as usize) * (cols as usize))
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridData {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = ShapeError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        Grid::from_cells(data.rows, data.cols, data.cells)
    }
}

impl Grid {
    /// Create a new grid of the given dimensions, every cell empty.
    /// Negative dimensions are treated as zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let mut cells = Vec::with_capacity((rows as usize) * (cols as usize));
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Point::new(row, col)));
            }
        }
        Self { rows, cols, cells }
    }

    /// Build a grid from row-major `cells`, checking that there is exactly
    /// one cell per position and that each sits at its own index.
    pub fn from_cells(rows: i32, cols: i32, cells: Vec<Cell>) -> Result<Self, ShapeError> {
        let expected = area(rows, cols)?;
        if cells.len() != expected {
            return Err(ShapeError::Length {
                expected,
                found: cells.len(),
            });
        }
        let grid = Self { rows, cols, cells };
        for (index, cell) in grid.cells.iter().enumerate() {
            let expected = grid.point(index);
            if cell.pos != expected {
                return Err(ShapeError::Misplaced {
                    index,
                    expected,
                    found: cell.pos,
                });
            }
        }
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.cols as usize) + (p.col as usize))
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols.max(1) as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The cell at `p`, if in bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, if in bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        let i = self.index(p)?;
        Some(&mut self.cells[i])
    }

    /// The kind of the cell at `p`, if in bounds.
    #[inline]
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        self.at(p).map(|c| c.kind)
    }

    /// Set the kind of the cell at `p`. Returns `false` if `p` is out of
    /// bounds. The label is left untouched.
    pub fn set_kind(&mut self, p: Point, kind: CellKind) -> bool {
        match self.at_mut(p) {
            Some(cell) => {
                cell.kind = kind;
                true
            }
            None => false,
        }
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_passable)
    }

    /// Append the orthogonal neighbors of `p` a search may step onto.
    ///
    /// Order is always up, down, left, right; out-of-bounds points and walls
    /// are skipped. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }

    /// Set every cell to `kind`, dropping labels.
    pub fn fill(&mut self, kind: CellKind) {
        for cell in self.cells.iter_mut() {
            cell.kind = kind;
            cell.label = None;
        }
    }

    /// Reset every cell to empty and unlabeled.
    pub fn clear(&mut self) {
        self.fill(CellKind::Empty);
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// All cells as a row-major slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Positions of every cell of the given kind, row-major.
    pub fn find(&self, kind: CellKind) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().filter(move |c| c.kind == kind).map(|c| c.pos)
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(2, 3);
        g.set_kind(Point::new(1, 2), CellKind::Wall);
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.contains("\"wall\""));
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn rejects_missing_cells() {
        let err = serde_json::from_str::<Grid>(r#"{"rows":3,"cols":3,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("expected 9 cells, found 0"));
    }

    #[test]
    fn rejects_misplaced_cells() {
        let mut json = serde_json::to_value(Grid::new(1, 2)).unwrap();
        json["cells"][0]["pos"]["col"] = serde_json::json!(1);
        let err = serde_json::from_value::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("cell 0 is at (0, 1)"));
    }
}
