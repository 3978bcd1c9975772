//! **gridpath-core** — grid model for the gridpath pathfinding demonstrator.
//!
//! This crate provides the data the search operates on and everything the
//! editing side needs around it: coordinates, cells, the rectangular grid
//! with its neighbor rule, a plain-text map format, the editor [`Board`] and
//! the derived display [`Overlay`].

pub mod cell;
pub mod editor;
pub mod geom;
pub mod grid;
pub mod overlay;
pub mod text;

pub use cell::{Cell, CellKind, Label};
pub use editor::{Board, EditError, Marker, Tool};
pub use geom::Point;
pub use grid::{Grid, ShapeError};
pub use overlay::{Overlay, Shade};
pub use text::ParseError;
