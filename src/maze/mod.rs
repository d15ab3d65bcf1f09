pub mod maze;
pub use maze::{HexMaze, MazeError};
pub mod cell;
pub use cell::{Cell, CellKind, CellState, HexWay};
pub mod render;
pub mod ser;
pub use ser::load_maze;

pub mod algorithms;
