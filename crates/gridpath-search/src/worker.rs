//! Running a search on a dedicated thread.
//!
//! [`spawn_search`] moves the grid into a worker thread, which streams
//! [`SearchEvent`]s back over a channel in the same order the synchronous
//! engine would call its progress sink. The grid comes back through
//! [`SearchHandle::join`].

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use gridpath_core::{Grid, Point};

use crate::SearchTable;
use crate::config::SearchConfig;
use crate::progress::ProgressSink;
use crate::result::PathResult;

/// A message from a running search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A progress snapshot. `path` is set only on a successful finish.
    Progress {
        explored: Vec<Point>,
        path: Option<Vec<Point>>,
    },
    /// The search ended; always the last event.
    Finished(PathResult),
}

/// Handle to a search running on another thread.
pub struct SearchHandle {
    events: Receiver<SearchEvent>,
    thread: JoinHandle<(Grid, PathResult)>,
}

impl SearchHandle {
    /// The event stream. It closes once the search has finished.
    pub fn events(&self) -> &Receiver<SearchEvent> {
        &self.events
    }

    /// Whether the worker has finished running.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the search and take the grid back together with the result.
    pub fn join(self) -> thread::Result<(Grid, PathResult)> {
        self.thread.join()
    }
}

/// Forwards notifications into a channel until the receiver goes away.
struct ChannelSink {
    tx: Sender<SearchEvent>,
    hung_up: bool,
}

impl ChannelSink {
    fn send(&mut self, event: SearchEvent) {
        if self.hung_up {
            return;
        }
        if self.tx.send(event).is_err() {
            log::warn!("search event receiver dropped; finishing without reporting");
            self.hung_up = true;
        }
    }
}

impl ProgressSink for ChannelSink {
    fn progress(&mut self, explored: &[Point], path: Option<&[Point]>) {
        self.send(SearchEvent::Progress {
            explored: explored.to_vec(),
            path: path.map(<[Point]>::to_vec),
        });
    }
}

/// Start a search from `start` to `goal` on a new thread.
///
/// The search cannot be cancelled; dropping the handle lets it finish in the
/// background without reporting.
pub fn spawn_search(
    grid: Grid,
    start: Point,
    goal: Point,
    config: SearchConfig,
) -> io::Result<SearchHandle> {
    let (tx, events) = mpsc::channel();
    log::debug!("spawning search worker {start} -> {goal}");
    let thread = thread::Builder::new()
        .name("gridpath-search".into())
        .spawn(move || {
            let mut table = SearchTable::for_grid(&grid);
            let mut sink = ChannelSink { tx, hung_up: false };
            let result = table.astar(&grid, start, goal, &config, &mut sink);
            sink.send(SearchEvent::Finished(result.clone()));
            (grid, result)
        })?;
    Ok(SearchHandle { events, thread })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Recorder;
    use crate::search_with;

    #[test]
    fn events_mirror_sync_callbacks() {
        let grid = Grid::parse(
            "
S.....
.####.
......
.####.
.....G",
        )
        .unwrap();
        let (start, goal) = (Point::new(0, 0), Point::new(4, 5));
        let config = SearchConfig::immediate();

        let mut rec = Recorder::default();
        let expected = search_with(&grid, start, goal, &config, &mut rec);

        let handle = spawn_search(grid.clone(), start, goal, config).unwrap();
        let events: Vec<SearchEvent> = handle.events().iter().collect();
        let (back, result) = handle.join().unwrap();

        assert_eq!(back, grid);
        assert_eq!(result, expected);
        assert_eq!(events.len(), rec.events.len() + 1);
        for (event, progress) in events.iter().zip(&rec.events) {
            assert_eq!(
                event,
                &SearchEvent::Progress {
                    explored: progress.explored.clone(),
                    path: progress.path.clone(),
                }
            );
        }
        assert_eq!(events.last(), Some(&SearchEvent::Finished(expected)));
    }

    #[test]
    fn dropped_receiver_still_finishes() {
        let grid = Grid::new(8, 8);
        let handle = spawn_search(
            grid,
            Point::new(0, 0),
            Point::new(7, 7),
            SearchConfig::immediate(),
        )
        .unwrap();
        let SearchHandle { events, thread } = handle;
        drop(events);
        let (_, result) = thread.join().unwrap();
        assert!(result.success);
        assert_eq!(result.steps(), Some(14));
    }
}
