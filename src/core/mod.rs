use thiserror::Error;

pub use crate::dims::*;
use crate::maze::MazeError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Maze error; {0}")]
    Maze(#[from] MazeError),
    #[error("Logger error; {0}")]
    Logger(#[from] log::SetLoggerError),
}
