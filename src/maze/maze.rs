use std::io;

use thiserror::Error;

use crate::array::Array2D;
use crate::core::*;
use crate::maze::cell::{Cell, CellKind, HexWay};

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("cannot read maze file: {0}")]
    Io(#[from] io::Error),
    #[error("maze is empty, expected a `<rows> <cols> [exits]` header")]
    MissingHeader,
    #[error("bad header on line {line}: {reason}")]
    BadHeader { line: usize, reason: String },
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row on line {line} has {found} cells, expected {expected}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell '{ch}' on line {line}")]
    UnknownCell { line: usize, ch: char },
    #[error("second start cell at {0:?}, only one is allowed")]
    MultipleStarts(Dims),
    #[error("maze has no start cell")]
    NoStart,
}

/// Owns every cell of a hexagonal maze.
///
/// Cells refer to each other only through positions into this arena.
#[derive(Debug, Clone)]
pub struct HexMaze {
    pub(crate) cells: Array2D<Cell>,
    pub(crate) start: Option<Dims>,
    pub(crate) required_exits: usize,
}

impl HexMaze {
    /// Takes ownership of the cells and links every cell to its in-bounds neighbors.
    pub fn new(cells: Array2D<Cell>, start: Option<Dims>, required_exits: usize) -> Self {
        let mut maze = HexMaze {
            cells,
            start,
            required_exits,
        };
        maze.link_neighbors();
        maze
    }

    fn link_neighbors(&mut self) {
        let positions: Vec<Dims> = self.cells.iter_pos().collect();
        for pos in positions {
            for way in HexWay::ALL {
                let other = pos + way.offset(pos);
                let neighbor = self.is_in_bounds(other).then_some(other);
                self.cells[pos].set_neighbor(way, neighbor);
            }
        }
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn start(&self) -> Result<Dims, MazeError> {
        self.start.ok_or(MazeError::NoStart)
    }

    pub fn required_exits(&self) -> usize {
        self.required_exits
    }

    pub fn exit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_exit()).count()
    }

    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_wall()).count()
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    pub fn neighbor_of(&self, pos: Dims, way: HexWay) -> Option<&Cell> {
        self.get_cell(pos)
            .and_then(|cell| cell.neighbor(way))
            .and_then(|n| self.get_cell(n))
    }

    pub fn mark_pushed(&mut self, pos: Dims) {
        if let Some(cell) = self.get_cell_mut(pos) {
            cell.mark_pushed();
        }
    }

    pub fn mark_processed(&mut self, pos: Dims) {
        if let Some(cell) = self.get_cell_mut(pos) {
            cell.mark_processed();
        }
    }

    /// Forgets every visit, so the maze can be solved again.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Open maze without walls, start in the top left corner and the exits placed by the caller.
    pub fn open(size: Dims, exits: &[Dims]) -> Self {
        let rows = (0..size.1)
            .map(|y| {
                (0..size.0)
                    .map(|x| {
                        let pos = Dims(x, y);
                        let kind = if pos == Dims::ZERO {
                            CellKind::Start
                        } else if exits.contains(&pos) {
                            CellKind::Exit
                        } else {
                            CellKind::Open
                        };
                        Cell::new(pos, kind)
                    })
                    .collect()
            })
            .collect();

        let cells = Array2D::from_rows(rows).expect("rows are built with equal length");
        let start = cells.get(Dims::ZERO).map(Cell::get_coord);
        HexMaze::new(cells, start, exits.len())
    }
}
