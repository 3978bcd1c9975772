use gridpath_core::{Board, EditError, Point};

use crate::SearchTable;
use crate::config::SearchConfig;
use crate::progress::ProgressSink;
use crate::result::PathResult;

/// Unlocks the board when dropped, including while unwinding from a
/// panicking sink.
struct SearchLock<'a>(&'a mut Board);

impl Drop for SearchLock<'_> {
    fn drop(&mut self) {
        self.0.end_search();
    }
}

/// Search between two markers of `board`, filling its overlay as progress
/// comes in.
///
/// `start_id` / `goal_id` pick markers by id; `None` uses the first start or
/// goal placed. The board is locked against edits for the duration of the
/// search. Every notification is also forwarded to `sink`.
pub fn search_board<S>(
    board: &mut Board,
    start_id: Option<&str>,
    goal_id: Option<&str>,
    config: &SearchConfig,
    sink: &mut S,
) -> Result<PathResult, EditError>
where
    S: ProgressSink + ?Sized,
{
    let (start, goal) = board.begin_search(start_id, goal_id)?;
    let mut lock = SearchLock(board);
    let (grid, overlay) = lock.0.parts_mut();
    let mut table = SearchTable::for_grid(grid);
    let mut tee = |explored: &[Point], path: Option<&[Point]>| {
        overlay.apply_progress(explored, path);
        sink.progress(explored, path);
    };
    Ok(table.astar(grid, start, goal, config, &mut tee))
}

#[cfg(test)]
mod tests {
    use gridpath_core::{CellKind, Tool};

    use super::*;
    use crate::progress::{NoProgress, Recorder};

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn fills_overlay_and_unlocks() {
        let mut board = Board::new(5, 5);
        board.apply(Tool::Start, p(0, 0)).unwrap();
        board.apply(Tool::Goal, p(4, 4)).unwrap();
        board.apply(Tool::Wall, p(1, 1)).unwrap();

        let mut rec = Recorder::default();
        let r = search_board(&mut board, None, None, &SearchConfig::immediate(), &mut rec).unwrap();
        assert!(r.success);
        assert!(!board.is_searching());
        assert_eq!(board.overlay().path_count(), r.path.len());
        assert_eq!(board.overlay().explored_count(), r.explored.len());
        assert!(r.path.iter().all(|&q| board.overlay().is_path(q)));
        assert_eq!(rec.events.last().unwrap().path.as_ref(), Some(&r.path));
    }

    #[test]
    fn picks_named_markers() {
        let mut board = Board::new(5, 5);
        board.place_marker(CellKind::Start, p(0, 0)).unwrap();
        board.place_marker(CellKind::Start, p(4, 0)).unwrap();
        board.place_marker(CellKind::Goal, p(4, 2)).unwrap();
        let r = search_board(
            &mut board,
            Some("start-2"),
            Some("goal-1"),
            &SearchConfig::immediate(),
            &mut NoProgress,
        )
        .unwrap();
        assert_eq!(r.path, vec![p(4, 0), p(4, 1), p(4, 2)]);
    }

    #[test]
    fn missing_goal_is_reported() {
        let mut board = Board::new(5, 5);
        board.apply(Tool::Start, p(0, 0)).unwrap();
        let err = search_board(&mut board, None, None, &SearchConfig::immediate(), &mut NoProgress);
        assert_eq!(err, Err(EditError::MissingGoal));
        assert!(!board.is_searching());
    }

    struct Crash;

    impl ProgressSink for Crash {
        fn progress(&mut self, _: &[Point], _: Option<&[Point]>) {
            panic!("renderer gone");
        }
    }

    #[test]
    fn panicking_sink_still_unlocks() {
        let mut board = Board::from_text("S...G").unwrap();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            search_board(&mut board, None, None, &SearchConfig::immediate(), &mut Crash)
        }));
        assert!(outcome.is_err());
        assert!(!board.is_searching());
        board.apply(Tool::Wall, p(0, 2)).unwrap();
    }

    #[test]
    fn edit_after_search_clears_overlay() {
        let mut board = Board::from_text("S...\n....\n...G").unwrap();
        search_board(&mut board, None, None, &SearchConfig::immediate(), &mut NoProgress).unwrap();
        assert!(board.overlay().path_count() > 0);
        board.apply(Tool::Wall, p(1, 1)).unwrap();
        assert_eq!(board.overlay().path_count(), 0);
    }
}
