//! The editing surface: a [`Board`] wraps a [`Grid`] with drawing tools,
//! named start/goal markers and the display [`Overlay`].
//!
//! Every edit clears the overlay, and no edit is accepted while a search is
//! in flight (see [`Board::begin_search`]).

use thiserror::Error;

use crate::cell::{CellKind, Label};
use crate::geom::Point;
use crate::grid::Grid;
use crate::overlay::Overlay;
use crate::text::ParseError;

pub const MIN_ROWS: i32 = 5;
pub const MAX_ROWS: i32 = 50;
pub const MIN_COLS: i32 = 5;
pub const MAX_COLS: i32 = 80;
pub const DEFAULT_ROWS: i32 = 20;
pub const DEFAULT_COLS: i32 = 30;

/// Drawing tool selected by the user.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tool {
    Start,
    Goal,
    #[default]
    Wall,
}

/// Error returned by board edits and marker lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("point {0} is outside the board")]
    OutOfBounds(Point),
    #[error("board is locked while a search is running")]
    Searching,
    #[error("no start point placed")]
    MissingStart,
    #[error("no goal point placed")]
    MissingGoal,
    #[error("unknown marker {0:?}")]
    UnknownMarker(String),
}

/// A placed start or goal point.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub id: String,
    pub kind: CellKind,
    pub pos: Point,
}

/// Editable grid plus markers and search overlay.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    overlay: Overlay,
    markers: Vec<Marker>,
    next_start: u32,
    next_goal: u32,
    single_marker: bool,
    searching: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Board {
    /// An empty board, with the size clamped to the editor limits.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.clamp(MIN_ROWS, MAX_ROWS);
        let cols = cols.clamp(MIN_COLS, MAX_COLS);
        Self::from_grid(Grid::new(rows, cols))
    }

    /// Wrap an existing grid, registering a marker for every start and goal
    /// cell in row-major order. Imported grids keep their size.
    pub fn from_grid(mut grid: Grid) -> Self {
        let mut markers = Vec::new();
        let (mut next_start, mut next_goal) = (1, 1);
        for cell in grid.cells().iter().filter(|c| c.kind.is_marker()) {
            let id = if cell.kind == CellKind::Start {
                next_start += 1;
                format!("start-{}", next_start - 1)
            } else {
                next_goal += 1;
                format!("goal-{}", next_goal - 1)
            };
            markers.push(Marker {
                id,
                kind: cell.kind,
                pos: cell.pos,
            });
        }
        for m in &markers {
            if let Some(cell) = grid.at_mut(m.pos) {
                cell.label = Some(Label::new(m.id.clone()));
            }
        }
        Self {
            overlay: Overlay::for_grid(&grid),
            grid,
            markers,
            next_start,
            next_goal,
            single_marker: false,
            searching: false,
        }
    }

    /// Parse a text map (see [`crate::text`]) into a board.
    pub fn from_text(s: &str) -> Result<Self, ParseError> {
        Ok(Self::from_grid(Grid::parse(s)?))
    }

    /// Keep at most one start and one goal: placing a new one replaces the
    /// previous of the same kind.
    pub fn with_single_marker(mut self, single: bool) -> Self {
        self.single_marker = single;
        self
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Split borrow used while feeding search progress into the overlay.
    #[inline]
    pub fn parts_mut(&mut self) -> (&Grid, &mut Overlay) {
        (&self.grid, &mut self.overlay)
    }

    /// All markers in placement order.
    #[inline]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Start markers in placement order.
    pub fn starts(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.kind == CellKind::Start)
    }

    /// Goal markers in placement order.
    pub fn goals(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.kind == CellKind::Goal)
    }

    /// Look up a marker by id.
    pub fn marker(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    #[inline]
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    fn next_id(&mut self, kind: CellKind) -> String {
        match kind {
            CellKind::Start => {
                let id = format!("start-{}", self.next_start);
                self.next_start += 1;
                id
            }
            _ => {
                let id = format!("goal-{}", self.next_goal);
                self.next_goal += 1;
                id
            }
        }
    }

    fn check_edit(&mut self, p: Point) -> Result<(), EditError> {
        if self.searching {
            return Err(EditError::Searching);
        }
        if !self.grid.contains(p) {
            return Err(EditError::OutOfBounds(p));
        }
        self.overlay.clear();
        Ok(())
    }

    /// Remove the marker sitting on `p`, if any, leaving the cell empty.
    fn drop_marker_at(&mut self, p: Point) {
        if let Some(i) = self.markers.iter().position(|m| m.pos == p) {
            self.markers.remove(i);
            if let Some(cell) = self.grid.at_mut(p) {
                cell.kind = CellKind::Empty;
                cell.label = None;
            }
        }
    }

    /// Apply a click of `tool` at `p`.
    ///
    /// `Wall` toggles empty and wall cells and ignores markers. `Start` and
    /// `Goal` place a marker, see [`place_marker`](Self::place_marker).
    pub fn apply(&mut self, tool: Tool, p: Point) -> Result<(), EditError> {
        match tool {
            Tool::Start => self.place_marker(CellKind::Start, p).map(drop),
            Tool::Goal => self.place_marker(CellKind::Goal, p).map(drop),
            Tool::Wall => {
                self.check_edit(p)?;
                match self.grid.kind(p) {
                    Some(CellKind::Wall) => {
                        self.grid.set_kind(p, CellKind::Empty);
                    }
                    Some(CellKind::Empty) => {
                        self.grid.set_kind(p, CellKind::Wall);
                    }
                    _ => {}
                }
                Ok(())
            }
        }
    }

    /// Drag-paint walls: only empty cells are turned into walls.
    pub fn paint(&mut self, p: Point) -> Result<(), EditError> {
        self.check_edit(p)?;
        if self.grid.kind(p) == Some(CellKind::Empty) {
            self.grid.set_kind(p, CellKind::Wall);
        }
        Ok(())
    }

    /// Place a start or goal marker at `p` and return its id. Whatever the
    /// cell held before is overwritten, including another marker.
    ///
    /// `kind` must be [`CellKind::Start`] or [`CellKind::Goal`]; any other
    /// kind is treated as a goal.
    pub fn place_marker(&mut self, kind: CellKind, p: Point) -> Result<String, EditError> {
        self.check_edit(p)?;
        let kind = if kind == CellKind::Start {
            CellKind::Start
        } else {
            CellKind::Goal
        };
        if self.single_marker {
            let old: Vec<Point> = self
                .markers
                .iter()
                .filter(|m| m.kind == kind)
                .map(|m| m.pos)
                .collect();
            for pos in old {
                self.drop_marker_at(pos);
            }
        }
        self.drop_marker_at(p);

        let id = self.next_id(kind);
        if let Some(cell) = self.grid.at_mut(p) {
            cell.kind = kind;
            cell.label = Some(Label::new(id.clone()));
        }
        self.markers.push(Marker {
            id: id.clone(),
            kind,
            pos: p,
        });
        Ok(id)
    }

    /// Set or clear the display name of a marker. Blank names clear it.
    pub fn rename(&mut self, id: &str, name: Option<&str>) -> Result<(), EditError> {
        if self.searching {
            return Err(EditError::Searching);
        }
        let pos = self
            .marker(id)
            .map(|m| m.pos)
            .ok_or_else(|| EditError::UnknownMarker(id.to_string()))?;
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        if let Some(label) = self.grid.at_mut(pos).and_then(|c| c.label.as_mut()) {
            label.name = name.map(str::to_string);
        }
        Ok(())
    }

    /// Remove a marker, reverting its cell to empty. Returns its position.
    pub fn remove_marker(&mut self, id: &str) -> Result<Point, EditError> {
        let pos = self
            .marker(id)
            .map(|m| m.pos)
            .ok_or_else(|| EditError::UnknownMarker(id.to_string()))?;
        self.check_edit(pos)?;
        self.drop_marker_at(pos);
        Ok(pos)
    }

    /// Position of the marker of `kind` named `id`, or the first one placed.
    fn resolve(&self, kind: CellKind, id: Option<&str>) -> Result<Point, EditError> {
        let mut candidates = self.markers.iter().filter(|m| m.kind == kind);
        match id {
            Some(id) => candidates
                .find(|m| m.id == id)
                .map(|m| m.pos)
                .ok_or_else(|| EditError::UnknownMarker(id.to_string())),
            None => candidates.next().map(|m| m.pos).ok_or(match kind {
                CellKind::Start => EditError::MissingStart,
                _ => EditError::MissingGoal,
            }),
        }
    }

    /// Resolve a start id and a goal id to coordinates.
    pub fn select(&self, start_id: &str, goal_id: &str) -> Result<(Point, Point), EditError> {
        Ok((
            self.resolve(CellKind::Start, Some(start_id))?,
            self.resolve(CellKind::Goal, Some(goal_id))?,
        ))
    }

    /// The first placed start and the first placed goal.
    pub fn endpoints(&self) -> Result<(Point, Point), EditError> {
        Ok((
            self.resolve(CellKind::Start, None)?,
            self.resolve(CellKind::Goal, None)?,
        ))
    }

    /// Reinitialize at a new size, clamped to the editor limits.
    pub fn resize(&mut self, rows: i32, cols: i32) -> Result<(), EditError> {
        if self.searching {
            return Err(EditError::Searching);
        }
        let single = self.single_marker;
        *self = Self::new(rows, cols).with_single_marker(single);
        Ok(())
    }

    /// Reinitialize at the current size: all empty, no markers.
    pub fn clear(&mut self) -> Result<(), EditError> {
        if self.searching {
            return Err(EditError::Searching);
        }
        self.grid.clear();
        self.overlay.clear();
        self.markers.clear();
        self.next_start = 1;
        self.next_goal = 1;
        Ok(())
    }

    /// Lock the board for a search between `start_id` and `goal_id`, or the
    /// first start and goal when not given. Clears the overlay.
    pub fn begin_search(
        &mut self,
        start_id: Option<&str>,
        goal_id: Option<&str>,
    ) -> Result<(Point, Point), EditError> {
        if self.searching {
            return Err(EditError::Searching);
        }
        let start = self.resolve(CellKind::Start, start_id)?;
        let goal = self.resolve(CellKind::Goal, goal_id)?;
        self.overlay.clear();
        self.searching = true;
        Ok((start, goal))
    }

    /// Unlock the board after a search.
    pub fn end_search(&mut self) {
        self.searching = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn new_clamps_size() {
        let b = Board::new(1, 500);
        assert_eq!((b.grid().rows(), b.grid().cols()), (MIN_ROWS, MAX_COLS));
        let b = Board::default();
        assert_eq!((b.grid().rows(), b.grid().cols()), (20, 30));
    }

    #[test]
    fn wall_tool_toggles_but_spares_markers() {
        let mut b = Board::new(5, 5);
        b.apply(Tool::Wall, p(1, 1)).unwrap();
        assert_eq!(b.grid().kind(p(1, 1)), Some(CellKind::Wall));
        b.apply(Tool::Wall, p(1, 1)).unwrap();
        assert_eq!(b.grid().kind(p(1, 1)), Some(CellKind::Empty));

        b.apply(Tool::Start, p(0, 0)).unwrap();
        b.apply(Tool::Wall, p(0, 0)).unwrap();
        assert_eq!(b.grid().kind(p(0, 0)), Some(CellKind::Start));
    }

    #[test]
    fn paint_only_fills_empty() {
        let mut b = Board::new(5, 5);
        b.paint(p(2, 2)).unwrap();
        b.paint(p(2, 2)).unwrap();
        assert_eq!(b.grid().kind(p(2, 2)), Some(CellKind::Wall));
        assert_eq!(b.paint(p(9, 9)), Err(EditError::OutOfBounds(p(9, 9))));
    }

    #[test]
    fn markers_get_sequential_ids() {
        let mut b = Board::new(5, 5);
        assert_eq!(b.place_marker(CellKind::Start, p(0, 0)).unwrap(), "start-1");
        assert_eq!(b.place_marker(CellKind::Start, p(0, 1)).unwrap(), "start-2");
        assert_eq!(b.place_marker(CellKind::Goal, p(4, 4)).unwrap(), "goal-1");
        assert_eq!(b.starts().count(), 2);
        assert_eq!(
            b.grid().at(p(0, 1)).unwrap().label.as_ref().unwrap().id,
            "start-2"
        );
        assert_eq!(b.endpoints().unwrap(), (p(0, 0), p(4, 4)));
        assert_eq!(b.select("start-2", "goal-1").unwrap(), (p(0, 1), p(4, 4)));
    }

    #[test]
    fn marker_replaces_marker_on_same_cell() {
        let mut b = Board::new(5, 5);
        b.place_marker(CellKind::Start, p(1, 1)).unwrap();
        b.place_marker(CellKind::Goal, p(1, 1)).unwrap();
        assert_eq!(b.starts().count(), 0);
        assert_eq!(b.grid().kind(p(1, 1)), Some(CellKind::Goal));
        assert_eq!(b.endpoints(), Err(EditError::MissingStart));
    }

    #[test]
    fn single_marker_mode_moves_previous() {
        let mut b = Board::new(5, 5).with_single_marker(true);
        b.apply(Tool::Start, p(0, 0)).unwrap();
        b.apply(Tool::Start, p(3, 3)).unwrap();
        assert_eq!(b.grid().kind(p(0, 0)), Some(CellKind::Empty));
        assert_eq!(b.starts().map(|m| m.pos).collect::<Vec<_>>(), vec![p(3, 3)]);
    }

    #[test]
    fn rename_and_remove() {
        let mut b = Board::new(5, 5);
        let id = b.place_marker(CellKind::Goal, p(2, 2)).unwrap();
        b.rename(&id, Some("  Exit ")).unwrap();
        let label = b.grid().at(p(2, 2)).unwrap().label.clone().unwrap();
        assert_eq!(label.display_name(), "Exit");
        b.rename(&id, Some("   ")).unwrap();
        let label = b.grid().at(p(2, 2)).unwrap().label.clone().unwrap();
        assert_eq!(label.name, None);

        assert_eq!(b.remove_marker(&id).unwrap(), p(2, 2));
        assert_eq!(b.grid().kind(p(2, 2)), Some(CellKind::Empty));
        assert_eq!(
            b.remove_marker(&id),
            Err(EditError::UnknownMarker(id.clone()))
        );
    }

    #[test]
    fn select_checks_kind() {
        let mut b = Board::new(5, 5);
        b.place_marker(CellKind::Start, p(0, 0)).unwrap();
        b.place_marker(CellKind::Goal, p(1, 0)).unwrap();
        assert_eq!(
            b.select("goal-1", "goal-1"),
            Err(EditError::UnknownMarker("goal-1".into()))
        );
    }

    #[test]
    fn search_lock_rejects_edits() {
        let mut b = Board::new(5, 5);
        b.place_marker(CellKind::Start, p(0, 0)).unwrap();
        assert_eq!(b.begin_search(None, None), Err(EditError::MissingGoal));
        b.place_marker(CellKind::Goal, p(4, 4)).unwrap();
        b.place_marker(CellKind::Goal, p(3, 4)).unwrap();
        assert_eq!(b.begin_search(None, Some("goal-2")).unwrap(), (p(0, 0), p(3, 4)));
        assert!(b.is_searching());
        assert_eq!(b.apply(Tool::Wall, p(2, 2)), Err(EditError::Searching));
        assert_eq!(b.clear(), Err(EditError::Searching));
        assert_eq!(b.begin_search(None, None), Err(EditError::Searching));
        b.end_search();
        assert!(b.apply(Tool::Wall, p(2, 2)).is_ok());
    }

    #[test]
    fn edits_clear_overlay() {
        let mut b = Board::new(5, 5);
        let (_, ov) = b.parts_mut();
        ov.apply_progress(&[p(0, 0)], None);
        assert_eq!(b.overlay().explored_count(), 1);
        b.apply(Tool::Wall, p(4, 4)).unwrap();
        assert_eq!(b.overlay().explored_count(), 0);
    }

    #[test]
    fn from_text_registers_markers() {
        let b = Board::from_text("S..\n.#G\nS..").unwrap();
        let ids: Vec<&str> = b.markers().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["start-1", "goal-1", "start-2"]);
        assert_eq!(b.endpoints().unwrap(), (p(0, 0), p(1, 2)));
    }

    #[test]
    fn clear_and_resize_reset_everything() {
        let mut b = Board::new(6, 6);
        b.place_marker(CellKind::Start, p(0, 0)).unwrap();
        b.apply(Tool::Wall, p(1, 1)).unwrap();
        b.clear().unwrap();
        assert!(b.markers().is_empty());
        assert!(b.grid().iter().all(|c| c.kind == CellKind::Empty));
        assert_eq!(b.place_marker(CellKind::Start, p(0, 0)).unwrap(), "start-1");

        b.resize(100, 7).unwrap();
        assert_eq!((b.grid().rows(), b.grid().cols()), (MAX_ROWS, 7));
        assert!(b.markers().is_empty());
        assert_eq!(b.overlay(), &Overlay::new(MAX_ROWS, 7));
    }
}
