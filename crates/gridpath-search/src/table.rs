use gridpath_core::{Grid, Point};

/// Sentinel value meaning "infinite" cost: unreached by the search.
pub const UNREACHABLE: i32 = i32::MAX;

/// Parent sentinel for "no parent".
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal per-cell bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            parent: NO_PARENT,
            open: false,
            closed: false,
        }
    }
}

/// Snapshot of one cell's search bookkeeping after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Costs {
    /// Path length from the start, or [`UNREACHABLE`].
    pub g: i32,
    /// Manhattan estimate to the goal.
    pub h: i32,
    /// `g + h`, or [`UNREACHABLE`].
    pub f: i32,
    /// Previous cell on the best known path.
    pub parent: Option<Point>,
}

// ---------------------------------------------------------------------------
// SearchTable
// ---------------------------------------------------------------------------

/// Per-search bookkeeping for a `rows × cols` grid.
///
/// The table keeps the transient search state (costs, parents, open and
/// closed membership) apart from the [`Grid`], so editing and display never
/// see it. It owns its buffers so repeated searches on the same grid reuse
/// the allocations.
pub struct SearchTable {
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    pub(crate) nodes: Vec<Node>,
    // open list in insertion order
    pub(crate) open: Vec<usize>,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl SearchTable {
    /// Create a table for a `rows × cols` grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let len = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            nodes: vec![Node::default(); len],
            open: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Create a table matching `grid`'s dimensions.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    /// Change the dimensions, discarding all previous bookkeeping.
    pub fn set_size(&mut self, rows: i32, cols: i32) {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let len = (rows as usize) * (cols as usize);
        self.rows = rows;
        self.cols = cols;
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.open.clear();
    }

    /// `(rows, cols)` of the table.
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    /// Bookkeeping left in place for `p` by the last search, or `None` if
    /// `p` is outside the table.
    pub fn costs(&self, p: Point) -> Option<Costs> {
        let n = &self.nodes[self.idx(p)?];
        Some(Costs {
            g: n.g,
            h: n.h,
            f: n.f,
            parent: (n.parent != NO_PARENT).then(|| self.point(n.parent)),
        })
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return None;
        }
        Some((p.row as usize) * (self.cols as usize) + (p.col as usize))
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let cols = self.cols.max(1) as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }
}
