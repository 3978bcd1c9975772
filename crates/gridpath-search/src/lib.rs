//! Incremental A* search over gridpath grids.
//!
//! The engine finds a shortest path (by cell count) between two cells of a
//! [`Grid`], moving orthogonally and avoiding walls, and reports the cells it
//! finalizes as it goes so that a front end can animate the search:
//!
//! - [`search`] — one-shot search with the default pacing
//! - [`search_checked`] — the same, validating the endpoints first
//! - [`SearchTable::astar`] — reusable bookkeeping, custom [`AstarPather`],
//!   [`SearchConfig`] and [`ProgressSink`]
//! - [`spawn_search`] — the search on a worker thread, progress over a channel
//! - [`search_board`] — search between markers of an editor [`Board`](gridpath_core::Board)
//!
//! The search never writes to the grid: its per-cell costs live in a
//! [`SearchTable`] that is fully reset at the start of every run.

mod astar;
mod board;
mod config;
mod distance;
mod error;
mod progress;
mod result;
mod table;
mod traits;
mod worker;

use gridpath_core::{Grid, Point};

pub use board::search_board;
pub use config::SearchConfig;
pub use distance::manhattan;
pub use error::SearchError;
pub use progress::{NoProgress, Progress, ProgressSink, Recorder};
pub use result::PathResult;
pub use table::{Costs, SearchTable, UNREACHABLE};
pub use traits::{AstarPather, Pather};
pub use worker::{SearchEvent, SearchHandle, spawn_search};

/// Find a shortest path from `start` to `goal`, calling `on_progress` with
/// the cells explored so far every five finalized cells and once more at the
/// end (with the path, on success).
///
/// Endpoints must lie inside `grid`; see [`search_checked`].
pub fn search(
    grid: &Grid,
    start: Point,
    goal: Point,
    mut on_progress: impl FnMut(&[Point], Option<&[Point]>),
) -> PathResult {
    search_with(grid, start, goal, &SearchConfig::default(), &mut on_progress)
}

/// [`search`] with explicit pacing and any [`ProgressSink`].
pub fn search_with<S>(
    grid: &Grid,
    start: Point,
    goal: Point,
    config: &SearchConfig,
    sink: &mut S,
) -> PathResult
where
    S: ProgressSink + ?Sized,
{
    let mut table = SearchTable::for_grid(grid);
    table.astar(grid, start, goal, config, sink)
}

/// [`search`], after checking that both endpoints lie inside `grid`.
pub fn search_checked(
    grid: &Grid,
    start: Point,
    goal: Point,
    on_progress: impl FnMut(&[Point], Option<&[Point]>),
) -> Result<PathResult, SearchError> {
    for point in [start, goal] {
        if !grid.contains(point) {
            return Err(SearchError::OutOfBounds {
                point,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
    }
    Ok(search(grid, start, goal, on_progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rejects_out_of_bounds() {
        let grid = Grid::new(3, 3);
        let err = search_checked(&grid, Point::new(0, 0), Point::new(3, 0), |_, _| {});
        assert_eq!(
            err,
            Err(SearchError::OutOfBounds {
                point: Point::new(3, 0),
                rows: 3,
                cols: 3
            })
        );
        assert_eq!(
            err.unwrap_err().to_string(),
            "(3, 0) is outside the 3x3 grid"
        );
    }

    #[test]
    fn checked_runs_valid_search() {
        let grid = Grid::new(3, 3);
        let r = search_checked(&grid, Point::new(0, 0), Point::new(2, 2), |_, _| {}).unwrap();
        assert!(r.success);
        assert_eq!(r.steps(), Some(4));
    }

    #[test]
    fn repeated_search_is_identical() {
        let grid = Grid::parse(
            "
S..#....
.#.#.##.
.#...#..
.####.#.
......#G",
        )
        .unwrap();
        let (s, g) = (Point::new(0, 0), Point::new(4, 7));
        let mut first = Vec::new();
        let a = search(&grid, s, g, |e, _| first.push(e.len()));
        let mut second = Vec::new();
        let b = search(&grid, s, g, |e, _| second.push(e.len()));
        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn overlay_as_sink() {
        let grid = Grid::new(4, 4);
        let mut overlay = gridpath_core::Overlay::for_grid(&grid);
        let r = search_with(
            &grid,
            Point::new(0, 0),
            Point::new(3, 3),
            &SearchConfig::immediate(),
            &mut overlay,
        );
        assert_eq!(overlay.path_count(), r.path.len());
        assert!(overlay.is_explored(Point::new(3, 3)));
    }

    #[test]
    fn path_cells_resolve() {
        let grid = Grid::parse("S.G").unwrap();
        let r = search(&grid, Point::new(0, 0), Point::new(0, 2), |_, _| {});
        let kinds: Vec<_> = r.path_cells(&grid).map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                gridpath_core::CellKind::Start,
                gridpath_core::CellKind::Empty,
                gridpath_core::CellKind::Goal
            ]
        );
        assert_eq!(r.explored_cells(&grid).count(), r.explored.len());
    }
}
