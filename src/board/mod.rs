//! Board representation.
//!
//! Contains the piece colors, coordinates, the cell grid with its starting
//! layout, and the clipped king-move neighborhood helper.

pub mod grid;
pub mod neighborhood;
pub mod piece;
pub mod position;

pub use grid::{BoardError, Grid, DEFAULT_DIM, MAX_DIM, MIN_DIM};
pub use neighborhood::Neighborhood;
pub use piece::{Cell, Color, ALL_COLORS};
pub use position::{Axis, Direction, Position, ALL_AXES};
