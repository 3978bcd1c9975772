use gridpath_core::Point;

use crate::SearchTable;
use crate::config::SearchConfig;
use crate::progress::ProgressSink;
use crate::result::PathResult;
use crate::table::{NO_PARENT, Node};
use crate::traits::AstarPather;

impl SearchTable {
    /// Compute a shortest path from `from` to `to` using A*, reporting
    /// progress to `sink`.
    ///
    /// All bookkeeping is reset before the search starts, so a table can be
    /// reused across runs and edits. The open list is scanned in insertion
    /// order and the first minimum `f` wins, and a neighbor's parent only
    /// changes on a strictly shorter path: for identical inputs both the
    /// explored order and the path are reproducible.
    ///
    /// `sink` gets `(explored, None)` after every `config.progress_every`
    /// finalized cells, followed by a pause (see [`SearchConfig`]), and a
    /// final notification when the search ends: `(explored, Some(path))` on
    /// success, `(explored, None)` when the open list runs dry.
    ///
    /// The table must match the pather's grid: neighbors outside it are
    /// never visited. Call [`SearchTable::set_size`] after the grid is
    /// resized. Endpoints outside the table yield an empty, unsuccessful
    /// result without notifying `sink`.
    pub fn astar<P, S>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        config: &SearchConfig,
        sink: &mut S,
    ) -> PathResult
    where
        P: AstarPather + ?Sized,
        S: ProgressSink + ?Sized,
    {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            log::warn!(
                "search endpoints {from} -> {to} outside {}x{} table",
                self.rows,
                self.cols
            );
            return PathResult::default();
        };
        log::debug!("search {from} -> {to} on {}x{} grid", self.rows, self.cols);

        // Reset every cell, whatever the previous run left behind.
        for i in 0..self.nodes.len() {
            let h = pather.estimate(self.point(i), to);
            self.nodes[i] = Node {
                h,
                ..Node::default()
            };
        }
        self.open.clear();

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = node.h;
            node.open = true;
        }
        self.open.push(start_idx);

        let mut explored: Vec<Point> = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while !self.open.is_empty() {
            let mut best = 0;
            for (i, &ni) in self.open.iter().enumerate().skip(1) {
                if self.nodes[ni].f < self.nodes[self.open[best]].f {
                    best = i;
                }
            }
            let ci = self.open.remove(best);
            self.nodes[ci].open = false;
            self.nodes[ci].closed = true;
            let current_point = self.point(ci);
            explored.push(current_point);

            if ci == goal_idx {
                self.nbuf = nbuf;
                let path = self.reconstruct(goal_idx);
                sink.progress(&explored, Some(&path));
                log::debug!(
                    "search {from} -> {to} found {} steps after {} cells",
                    path.len() - 1,
                    explored.len()
                );
                return PathResult {
                    path,
                    explored,
                    success: true,
                };
            }

            let tentative_g = self.nodes[ci].g + 1;
            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.closed {
                    continue;
                }
                if !n.open {
                    n.open = true;
                    self.open.push(ni);
                } else if tentative_g >= n.g {
                    continue;
                }
                n.parent = ci;
                n.g = tentative_g;
                n.f = tentative_g + n.h;
            }

            if config.is_checkpoint(explored.len()) {
                log::trace!("search checkpoint: {} cells explored", explored.len());
                sink.progress(&explored, None);
                config.pause();
            }
        }

        self.nbuf = nbuf;
        sink.progress(&explored, None);
        log::debug!(
            "search {from} -> {to} found no path after {} cells",
            explored.len()
        );
        PathResult {
            path: Vec::new(),
            explored,
            success: false,
        }
    }

    /// Follow parent links back from `goal_idx`, returning start..=goal.
    fn reconstruct(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        // Parents always point at earlier-finalized cells, so the walk is
        // bounded by the table size.
        while ci != NO_PARENT && path.len() < self.nodes.len() {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
