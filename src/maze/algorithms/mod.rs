use std::fmt;

use super::{HexMaze, MazeError};
use crate::core::*;

mod depth_first_search;
pub use depth_first_search::DepthFirstSearch;

/// Observer type for calls that don't want to watch the search.
pub type NoObserver = fn(&HexMaze, Dims);

pub trait MazeSolver {
    /// Searches the maze for its exits, calling `observer` after every cell state change.
    fn solve<T: FnMut(&HexMaze, Dims)>(
        &self,
        maze: &mut HexMaze,
        observer: Option<T>,
    ) -> Result<SolveReport, MazeError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    pub exits_found: usize,
    pub required_exits: usize,
    pub steps: usize,
}

impl SolveReport {
    pub fn is_success(&self) -> bool {
        self.exits_found >= self.required_exits
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            write!(
                f,
                "The required number of {} exit(s) were found in {} steps.",
                self.required_exits, self.steps
            )
        } else {
            write!(
                f,
                "Not enough exits were found! {} out of {} required exits were found in {} steps.",
                self.exits_found, self.required_exits, self.steps
            )
        }
    }
}
