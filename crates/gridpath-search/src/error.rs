use gridpath_core::Point;
use thiserror::Error;

/// Precondition failures reported by [`search_checked`](crate::search_checked).
///
/// Failing to find a path is not an error; see [`PathResult::success`](crate::PathResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{point} is outside the {rows}x{cols} grid")]
    OutOfBounds { point: Point, rows: i32, cols: i32 },
}
