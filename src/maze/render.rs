use std::fmt;

use colored::{ColoredString, Colorize};

use crate::maze::{Cell, CellKind, CellState, HexMaze};

fn cell_char(cell: &Cell) -> char {
    match (cell.kind(), cell.state()) {
        (CellKind::Wall, _) => '#',
        (CellKind::Start, _) => 'S',
        (CellKind::Exit, CellState::Processed) => 'X',
        (CellKind::Exit, _) => 'E',
        (_, CellState::Processed) => 'o',
        (_, CellState::Pushed) => '+',
        (_, CellState::Unvisited) => '.',
    }
}

fn cell_colored(cell: &Cell) -> ColoredString {
    let s = cell_char(cell).to_string();
    match (cell.kind(), cell.state()) {
        (CellKind::Wall, _) => s.dimmed(),
        (CellKind::Start, _) => s.cyan().bold(),
        (CellKind::Exit, CellState::Processed) => s.green().bold(),
        (CellKind::Exit, _) => s.red(),
        (_, CellState::Processed) => s.blue(),
        (_, CellState::Pushed) => s.yellow(),
        (_, CellState::Unvisited) => s.normal(),
    }
}

fn write_rows<D: fmt::Display>(
    maze: &HexMaze,
    f: &mut impl fmt::Write,
    draw: impl Fn(&Cell) -> D,
) -> fmt::Result {
    for (y, row) in maze.get_cells().rows().enumerate() {
        if y & 1 == 1 {
            write!(f, " ")?;
        }
        for (x, cell) in row.iter().enumerate() {
            if x > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", draw(cell))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Same layout as the `Display` impl, styled for a terminal.
pub fn render_colored(maze: &HexMaze) -> String {
    let mut out = String::new();
    // writing into a `String` can't fail
    let _ = write_rows(maze, &mut out, cell_colored);
    out
}

impl fmt::Display for HexMaze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(self, f, cell_char)
    }
}

#[cfg(test)]
mod tests {
    use crate::maze::{
        algorithms::{DepthFirstSearch, MazeSolver, NoObserver},
        HexMaze,
    };

    #[test]
    fn shows_visit_states() {
        let mut maze: HexMaze = "2 3\nS . E\n# . .\n".parse().unwrap();
        assert_eq!(maze.to_string(), "S . E\n # . .\n");

        DepthFirstSearch::new()
            .solve(&mut maze, None::<NoObserver>)
            .unwrap();
        assert_eq!(maze.to_string(), "S o X\n # + .\n");
    }

    #[test]
    fn colored_keeps_layout() {
        colored::control::set_override(false);
        let maze: HexMaze = "2 2\nS E\n. #\n".parse().unwrap();
        assert_eq!(super::render_colored(&maze), maze.to_string());
    }
}
