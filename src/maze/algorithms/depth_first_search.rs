use log::trace;

use super::{MazeSolver, SolveReport};
use crate::core::*;
use crate::maze::{HexMaze, HexWay, MazeError};

/// Depth-first search with an explicit stack, so deep mazes can't overflow the call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch {
    step_limit: Option<usize>,
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives up after `limit` processed cells and reports what was found so far.
    pub fn with_step_limit(limit: usize) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }

    fn limit_reached(&self, steps: usize) -> bool {
        self.step_limit.is_some_and(|limit| steps >= limit)
    }
}

fn notify<T: FnMut(&HexMaze, Dims)>(observer: &mut Option<T>, maze: &HexMaze, pos: Dims) {
    if let Some(observer) = observer {
        observer(maze, pos);
    }
}

impl MazeSolver for DepthFirstSearch {
    fn solve<T: FnMut(&HexMaze, Dims)>(
        &self,
        maze: &mut HexMaze,
        mut observer: Option<T>,
    ) -> Result<SolveReport, MazeError> {
        let required = maze.required_exits();
        let start = maze.start()?;

        let mut stack: Vec<Dims> = Vec::with_capacity(maze.passable_count());
        stack.push(start);
        notify(&mut observer, maze, start);

        let mut exits_found = 0;
        let mut steps = 0;

        while exits_found < required && !self.limit_reached(steps) {
            // an empty stack here just means everything reachable was searched
            let Some(current) = stack.pop() else {
                break;
            };

            maze.mark_processed(current);
            notify(&mut observer, maze, current);
            steps += 1;
            trace!("step {}: processing {:?}", steps, current);

            for way in HexWay::ALL {
                let Some(neighbor) = maze.neighbor_of(current, way) else {
                    continue;
                };
                let pos = neighbor.get_coord();

                if !neighbor.is_unvisited() {
                    continue;
                }

                if neighbor.is_exit() {
                    maze.mark_processed(pos);
                    exits_found += 1;
                    trace!("exit {} found at {:?}", exits_found, pos);
                } else {
                    maze.mark_pushed(pos);
                    stack.push(pos);
                }
                notify(&mut observer, maze, pos);
            }
        }

        Ok(SolveReport {
            exits_found,
            required_exits: required,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{algorithms::NoObserver, CellState};

    fn solve_str(text: &str) -> (HexMaze, SolveReport) {
        let mut maze: HexMaze = text.parse().unwrap();
        let report = DepthFirstSearch::new()
            .solve(&mut maze, None::<NoObserver>)
            .unwrap();
        (maze, report)
    }

    fn report(exits_found: usize, required_exits: usize, steps: usize) -> SolveReport {
        SolveReport {
            exits_found,
            required_exits,
            steps,
        }
    }

    #[test]
    fn adjacent_exit() {
        let (maze, result) = solve_str("1 2\nS E\n");
        assert_eq!(result, report(1, 1, 1));
        assert!(result.is_success());
        assert_eq!(
            maze.get_cell(Dims(1, 0)).unwrap().state(),
            CellState::Processed
        );
    }

    #[test]
    fn no_reachable_exit() {
        let (_, result) = solve_str(include_str!("../../../mazes/sealed.txt"));
        assert_eq!(result, report(0, 1, 1));
        assert!(!result.is_success());
    }

    #[test]
    fn lone_start_is_not_an_error() {
        let (_, result) = solve_str("1 1 1\nS\n");
        assert_eq!(result, report(0, 1, 1));
    }

    #[test]
    fn both_exits_next_to_start() {
        let (_, result) = solve_str("1 3\nE S E\n");
        assert_eq!(result, report(2, 2, 1));
    }

    #[test]
    fn extra_exits_in_last_step_are_counted() {
        let (_, result) = solve_str("1 3 1\nE S E\n");
        assert_eq!(result, report(2, 1, 1));
        assert!(result.is_success());
    }

    #[test]
    fn corridor() {
        let (maze, result) = solve_str("1 6\nS . . . . E\n");
        assert_eq!(result, report(1, 1, 5));
        assert!(maze
            .get_cells()
            .iter()
            .all(|c| c.state() == CellState::Processed));
    }

    #[test]
    fn nothing_required() {
        let (maze, result) = solve_str("1 2\nS .\n");
        assert_eq!(result, report(0, 0, 0));
        assert!(result.is_success());
        assert_eq!(
            maze.get_cell(Dims(0, 0)).unwrap().state(),
            CellState::Unvisited
        );
    }

    #[test]
    fn walls_stay_unvisited() {
        let (maze, result) = solve_str(include_str!("../../../mazes/two_exits.txt"));
        assert_eq!(result.exits_found, 2);
        assert!(maze
            .get_cells()
            .iter()
            .filter(|c| c.is_wall())
            .all(|c| c.state() == CellState::Unvisited));
    }

    #[test]
    fn steps_bounded_by_passable_cells() {
        let mut maze = HexMaze::open(Dims(12, 9), &[]);
        maze.required_exits = 1;
        let passable = maze.passable_count();
        let result = DepthFirstSearch::new()
            .solve(&mut maze, None::<NoObserver>)
            .unwrap();
        assert_eq!(result, report(0, 1, passable));
        assert!(maze
            .get_cells()
            .iter()
            .all(|c| c.state() == CellState::Processed));
    }

    #[test]
    fn deterministic() {
        let mut maze: HexMaze = include_str!("../../../mazes/two_exits.txt").parse().unwrap();
        let first = DepthFirstSearch::new()
            .solve(&mut maze, None::<NoObserver>)
            .unwrap();
        let first_states: Vec<_> = maze.get_cells().iter().map(|c| c.state()).collect();

        maze.reset();
        let second = DepthFirstSearch::new()
            .solve(&mut maze, None::<NoObserver>)
            .unwrap();
        let second_states: Vec<_> = maze.get_cells().iter().map(|c| c.state()).collect();

        assert_eq!(first, second);
        assert_eq!(first_states, second_states);
    }

    #[test]
    fn no_cell_processed_twice() {
        let mut maze: HexMaze = include_str!("../../../mazes/small.txt").parse().unwrap();
        let mut processed = Vec::new();
        let mut last = None;
        DepthFirstSearch::new()
            .solve(
                &mut maze,
                Some(|maze: &HexMaze, pos: Dims| {
                    let state = maze.get_cell(pos).unwrap().state();
                    if state == CellState::Processed {
                        assert!(!processed.contains(&pos), "{:?} processed twice", pos);
                        processed.push(pos);
                    }
                    last = Some(pos);
                }),
            )
            .unwrap();
        assert_eq!(last, Some(Dims(4, 3)));
    }

    #[test]
    fn step_limit() {
        let mut maze: HexMaze = "1 6\nS . . . . E\n".parse().unwrap();
        let result = DepthFirstSearch::with_step_limit(3)
            .solve(&mut maze, None::<NoObserver>)
            .unwrap();
        assert_eq!(result, report(0, 1, 3));
    }

    #[test]
    fn missing_start_fails_before_search() {
        let mut maze = HexMaze::open(Dims(2, 1), &[Dims(1, 0)]);
        maze.start = None;
        assert!(matches!(
            DepthFirstSearch::new().solve(&mut maze, None::<NoObserver>),
            Err(MazeError::NoStart)
        ));
    }
}
