//! Shared pieces of the gridpath terminal demo: map setup and drawing.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use rand::{RngExt, SeedableRng, rngs::StdRng};

use gridpath_core::editor::{MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
use gridpath_core::{Board, CellKind, Grid, Overlay, Point, Shade};
use gridpath_search::{PathResult, SearchConfig, SearchEvent, SearchHandle, spawn_search};

/// Build a board with random walls and a start/goal in opposite corners.
///
/// `density` is the chance of each cell becoming a wall. The same `seed`
/// always produces the same board.
pub fn random_board(rows: i32, cols: i32, density: f64, seed: Option<u64>) -> Board {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::rng().random()),
    };
    let density = density.clamp(0.0, 1.0);
    let rows = rows.clamp(MIN_ROWS, MAX_ROWS);
    let cols = cols.clamp(MIN_COLS, MAX_COLS);
    let (start, goal) = (Point::new(0, 0), Point::new(rows - 1, cols - 1));
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let p = Point::new(row, col);
            let kind = if p == start {
                CellKind::Start
            } else if p == goal {
                CellKind::Goal
            } else if rng.random_bool(density) {
                CellKind::Wall
            } else {
                continue;
            };
            grid.set_kind(p, kind);
        }
    }
    Board::from_grid(grid).with_single_marker(true)
}

fn shade_color(shade: Shade) -> Color {
    match shade {
        Shade::Start => Color::Blue,
        Shade::Goal => Color::Red,
        Shade::Wall => Color::DarkGrey,
        Shade::Path => Color::Green,
        Shade::Explored => Color::Yellow,
        Shade::Empty => Color::Reset,
    }
}

fn shade_glyph(shade: Shade) -> &'static str {
    match shade {
        Shade::Start => "S ",
        Shade::Goal => "G ",
        Shade::Wall => "██",
        Shade::Path => "**",
        Shade::Explored => "··",
        Shade::Empty => "  ",
    }
}

/// Draw the grid with its overlay at the top-left of the terminal, two
/// columns per cell.
pub fn draw<W: Write>(out: &mut W, grid: &Grid, overlay: &Overlay) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0))?;
    for cell in grid {
        if cell.pos.col == 0 && cell.pos.row > 0 {
            queue!(out, ResetColor, Print("\r\n"))?;
        }
        let shade = overlay.shade(cell);
        let color = shade_color(shade);
        match shade {
            Shade::Start | Shade::Goal => queue!(
                out,
                SetBackgroundColor(color),
                SetForegroundColor(Color::White),
                Print(shade_glyph(shade))
            )?,
            _ => queue!(
                out,
                SetBackgroundColor(Color::Reset),
                SetForegroundColor(color),
                Print(shade_glyph(shade))
            )?,
        }
    }
    queue!(out, ResetColor, Print("\r\n"))?;
    out.flush()
}

/// One-line summary of a finished search.
pub fn summary(result: &PathResult) -> String {
    match result.steps() {
        Some(steps) => format!(
            "Path found! Length: {} cells ({steps} steps), {} cells explored",
            result.path.len(),
            result.explored.len()
        ),
        None => format!("No path found! {} cells explored", result.explored.len()),
    }
}

/// Redraw after each event until the worker closes the stream.
fn stream<W: Write>(
    out: &mut W,
    board: &mut Board,
    handle: &SearchHandle,
) -> io::Result<PathResult> {
    queue!(out, terminal::Clear(ClearType::All), cursor::Hide)?;
    let mut result = PathResult::default();
    for event in handle.events().iter() {
        let (grid, overlay) = board.parts_mut();
        match event {
            SearchEvent::Progress { explored, path } => {
                overlay.apply_progress(&explored, path.as_deref());
            }
            SearchEvent::Finished(r) => result = r,
        }
        draw(out, grid, overlay)?;
    }
    queue!(out, cursor::Show)?;
    out.flush()?;
    Ok(result)
}

/// Run a search on a worker thread, redrawing after every progress event.
///
/// The board is locked for the duration and its overlay ends up holding the
/// final state.
pub fn animate<W: Write>(
    out: &mut W,
    board: &mut Board,
    start: Option<&str>,
    goal: Option<&str>,
    config: SearchConfig,
) -> Result<PathResult, Box<dyn std::error::Error>> {
    let (from, to) = board.begin_search(start, goal)?;
    let streamed = spawn_search(board.grid().clone(), from, to, config).and_then(|handle| {
        let result = stream(out, board, &handle);
        if handle.join().is_err() {
            log::error!("search worker panicked");
        }
        result
    });
    board.end_search();
    Ok(streamed?)
}
