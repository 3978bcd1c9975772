//! The [`Cell`] type — one grid position with its editor-assigned kind.

use std::fmt;

use crate::geom::Point;

/// Classification of a cell, set by the editor. Mutually exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    Goal,
}

impl CellKind {
    /// Whether a search may step onto a cell of this kind.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Whether this kind is a start or goal marker.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, CellKind::Start | CellKind::Goal)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CellKind::Empty => "empty",
            CellKind::Wall => "wall",
            CellKind::Start => "start",
            CellKind::Goal => "goal",
        })
    }
}

/// Display metadata for a marker cell. Never read by the search.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    pub id: String,
    pub name: Option<String>,
}

impl Label {
    /// Create an unnamed label.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// The name if set, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A single grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub kind: CellKind,
    pub label: Option<Label>,
}

impl Cell {
    /// An empty, unlabeled cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            kind: CellKind::Empty,
            label: None,
        }
    }

    /// Set the kind (builder).
    #[inline]
    pub fn with_kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the label (builder).
    #[inline]
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Shorthand for `self.kind.is_passable()`.
    #[inline]
    pub fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} - {} - {}", label.display_name(), self.pos, self.kind),
            None => write!(f, "{} - {}", self.pos, self.kind),
        }
    }
}
