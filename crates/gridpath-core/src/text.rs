//! Plain-text grid maps.
//!
//! One character per cell, one line per row:
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | empty |
//! | `#` | wall |
//! | `S` | start |
//! | `G` | goal |
//!
//! [`render`] additionally writes `*` for path cells and `+` for explored
//! cells when given an [`Overlay`].

use thiserror::Error;

use crate::cell::CellKind;
use crate::geom::Point;
use crate::grid::Grid;
use crate::overlay::{Overlay, Shade};

/// Error returned when a text map cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("map is empty")]
    Empty,
    #[error("line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}

/// Map character for a cell kind.
pub const fn kind_char(kind: CellKind) -> char {
    match kind {
        CellKind::Empty => '.',
        CellKind::Wall => '#',
        CellKind::Start => 'S',
        CellKind::Goal => 'G',
    }
}

/// Cell kind for a map character.
pub const fn char_kind(ch: char) -> Option<CellKind> {
    match ch {
        '.' => Some(CellKind::Empty),
        '#' => Some(CellKind::Wall),
        'S' => Some(CellKind::Start),
        'G' => Some(CellKind::Goal),
        _ => None,
    }
}

impl Grid {
    /// Parse a text map. Surrounding whitespace is trimmed from the whole
    /// string; each line has trailing `\r` removed and must have the same
    /// width as the first.
    pub fn parse(s: &str) -> Result<Grid, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let width = lines[0].chars().count();
        let mut grid = Grid::new(lines.len() as i32, width as i32);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::InconsistentWidth {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row as i32, col as i32);
                let kind = char_kind(ch).ok_or(ParseError::InvalidChar { ch, pos })?;
                grid.set_kind(pos, kind);
            }
        }
        Ok(grid)
    }
}

/// Render `grid` back to text, one line per row, without a trailing newline.
pub fn render(grid: &Grid, overlay: Option<&Overlay>) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
    for cell in grid {
        if cell.pos.col == 0 && cell.pos.row > 0 {
            out.push('\n');
        }
        let ch = match overlay.map(|ov| ov.shade(cell)) {
            Some(Shade::Path) => '*',
            Some(Shade::Explored) => '+',
            _ => kind_char(cell.kind),
        };
        out.push(ch);
    }
    out
}
