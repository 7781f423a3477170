//! Grid geometry and occupancy.
//!
//! - `Coord` / `Move`: positions and move requests
//! - `GridShape`: validated bounds, win length and placement rule
//! - `Grid`: row-major cell storage
//! - `LineCatalog`: every winning line for a shape

pub mod board;
pub mod coord;
pub mod lines;
pub mod shape;

pub use board::{Cell, Grid};
pub use coord::{Coord, Move};
pub use lines::{Line, LineCatalog};
pub use shape::{GridShape, Placement};
