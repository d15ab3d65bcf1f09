//! Text format of a hexagonal maze.
//!
//! ```text
//! ; comment
//! 3 4 1
//! S . . #
//!  . # . .
//! # . . E
//! ```
//!
//! The header is `<rows> <cols> [required exits]`, and the required exit count defaults to the number of `E`
//! cells. Whitespace inside rows is ignored, so odd rows can be indented to show the offset
//! layout.

use std::{fs, path::Path, str::FromStr};

use log::debug;

use crate::array::Array2D;
use crate::core::*;
use crate::maze::{
    cell::{Cell, CellKind},
    HexMaze, MazeError,
};

pub fn load_maze(path: impl AsRef<Path>) -> Result<HexMaze, MazeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let maze: HexMaze = text.parse()?;
    debug!(
        "loaded {:?}: {}x{} cells, {} exit(s) required",
        path,
        maze.size().0,
        maze.size().1,
        maze.required_exits()
    );
    Ok(maze)
}

struct Header {
    rows: usize,
    cols: usize,
    exits: Option<usize>,
}

fn parse_header(line_no: usize, line: &str) -> Result<Header, MazeError> {
    let bad = |reason: &str| MazeError::BadHeader {
        line: line_no,
        reason: reason.to_string(),
    };

    let numbers = line
        .split_whitespace()
        .map(|n| n.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| bad(&e.to_string()))?;

    match numbers[..] {
        [rows, cols] => Ok(Header {
            rows,
            cols,
            exits: None,
        }),
        [rows, cols, exits] => Ok(Header {
            rows,
            cols,
            exits: Some(exits),
        }),
        _ => Err(bad("expected `<rows> <cols> [exits]`")),
    }
}

impl FromStr for HexMaze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim_end()))
            .filter(|(_, l)| !l.trim().is_empty() && !l.trim_start().starts_with(';'));

        let (header_line, header) = lines.next().ok_or(MazeError::MissingHeader)?;
        let header = parse_header(header_line, header)?;

        let mut start = None;
        let mut rows = Vec::new();

        for (y, (line_no, line)) in lines.enumerate() {
            if y >= header.rows {
                return Err(MazeError::RowCount {
                    expected: header.rows,
                    found: y + 1,
                });
            }

            let mut row = Vec::new();
            for (x, ch) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let kind = CellKind::from_char(ch).ok_or(MazeError::UnknownCell {
                    line: line_no,
                    ch,
                })?;
                let pos = Dims(x as i32, y as i32);

                if kind == CellKind::Start {
                    if start.is_some() {
                        return Err(MazeError::MultipleStarts(pos));
                    }
                    start = Some(pos);
                }

                row.push(Cell::new(pos, kind));
            }

            if row.len() != header.cols {
                return Err(MazeError::RowLength {
                    line: line_no,
                    expected: header.cols,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        if rows.len() != header.rows {
            return Err(MazeError::RowCount {
                expected: header.rows,
                found: rows.len(),
            });
        }

        let start = start.ok_or(MazeError::NoStart)?;
        let exits = rows.iter().flatten().filter(|c| c.is_exit()).count();
        let cells = Array2D::from_rows(rows).ok_or(MazeError::RowCount {
            expected: header.rows,
            found: 0,
        })?;

        Ok(HexMaze::new(cells, Some(start), header.exits.unwrap_or(exits)))
    }
}
