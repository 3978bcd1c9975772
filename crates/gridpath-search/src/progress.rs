//! Progress reporting from a running search.

use gridpath_core::{Overlay, Point};

/// Receives incremental search state.
///
/// `explored` is every cell finalized so far, in visitation order. `path` is
/// `Some` only on the final notification of a successful search.
pub trait ProgressSink {
    fn progress(&mut self, explored: &[Point], path: Option<&[Point]>);
}

impl<F> ProgressSink for F
where
    F: FnMut(&[Point], Option<&[Point]>),
{
    #[inline]
    fn progress(&mut self, explored: &[Point], path: Option<&[Point]>) {
        self(explored, path)
    }
}

impl ProgressSink for Overlay {
    fn progress(&mut self, explored: &[Point], path: Option<&[Point]>) {
        self.apply_progress(explored, path);
    }
}

/// A sink that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline]
    fn progress(&mut self, _: &[Point], _: Option<&[Point]>) {}
}

/// An owned copy of one progress notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub explored: Vec<Point>,
    pub path: Option<Vec<Point>>,
}

impl Progress {
    pub fn new(explored: &[Point], path: Option<&[Point]>) -> Self {
        Self {
            explored: explored.to_vec(),
            path: path.map(<[Point]>::to_vec),
        }
    }
}

/// A sink that keeps a copy of every notification.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub events: Vec<Progress>,
}

impl ProgressSink for Recorder {
    fn progress(&mut self, explored: &[Point], path: Option<&[Point]>) {
        self.events.push(Progress::new(explored, path));
    }
}
