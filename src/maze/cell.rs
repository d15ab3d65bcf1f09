use crate::core::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Unvisited,
    Pushed,
    Processed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Open,
    Start,
    Exit,
    Wall,
}

impl CellKind {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Open),
            'S' => Some(Self::Start),
            'E' => Some(Self::Exit),
            'W' | '#' => Some(Self::Wall),
            _ => None,
        }
    }
}

/// One hexagonal tile of the maze.
///
/// Neighbors are stored as positions into the owning [`HexMaze`](super::HexMaze),
/// so cells never own each other.
#[derive(Debug, Clone)]
pub struct Cell {
    kind: CellKind,
    state: CellState,
    neighbors: [Option<Dims>; 6],
    pub(crate) coord: Dims,
}

impl Cell {
    pub fn new(pos: Dims, kind: CellKind) -> Cell {
        Cell {
            kind,
            state: CellState::Unvisited,
            neighbors: [None; 6],
            coord: pos,
        }
    }

    /// Returns the neighbor in the given direction, `None` on the maze boundary.
    pub fn neighbor(&self, way: HexWay) -> Option<Dims> {
        self.neighbors[way as usize]
    }

    pub(crate) fn set_neighbor(&mut self, way: HexWay, pos: Option<Dims>) {
        self.neighbors[way as usize] = pos;
    }

    /// Walls are never unvisited, they can't be discovered at all.
    pub fn is_unvisited(&self) -> bool {
        self.kind != CellKind::Wall && self.state == CellState::Unvisited
    }

    pub fn is_exit(&self) -> bool {
        self.kind == CellKind::Exit
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    pub fn is_start(&self) -> bool {
        self.kind == CellKind::Start
    }

    pub fn mark_pushed(&mut self) {
        debug_assert!(self.is_unvisited(), "{:?} pushed twice", self.coord);
        self.state = CellState::Pushed;
    }

    pub fn mark_processed(&mut self) {
        debug_assert!(
            !self.is_wall() && self.state != CellState::Processed,
            "{:?} processed twice",
            self.coord
        );
        self.state = CellState::Processed;
    }

    pub(crate) fn reset(&mut self) {
        self.state = CellState::Unvisited;
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

/// The six sides of a pointy-top hex, clockwise from the upper right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HexWay {
    NorthEast = 0,
    East = 1,
    SouthEast = 2,
    SouthWest = 3,
    West = 4,
    NorthWest = 5,
}

impl HexWay {
    /// Canonical visiting order used by the solver.
    pub const ALL: [HexWay; 6] = [
        HexWay::NorthEast,
        HexWay::East,
        HexWay::SouthEast,
        HexWay::SouthWest,
        HexWay::West,
        HexWay::NorthWest,
    ];

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Offset to the neighbor in "odd-r" layout, where odd rows sit half a cell to the right.
    pub fn offset(&self, from: Dims) -> Dims {
        use HexWay::*;

        if from.is_odd_row() {
            match self {
                NorthEast => Dims(1, -1),
                East => Dims(1, 0),
                SouthEast => Dims(1, 1),
                SouthWest => Dims(0, 1),
                West => Dims(-1, 0),
                NorthWest => Dims(0, -1),
            }
        } else {
            match self {
                NorthEast => Dims(0, -1),
                East => Dims(1, 0),
                SouthEast => Dims(0, 1),
                SouthWest => Dims(-1, 1),
                West => Dims(-1, 0),
                NorthWest => Dims(-1, -1),
            }
        }
    }

    pub fn reverse(&self) -> Self {
        use HexWay::*;

        match self {
            NorthEast => SouthWest,
            East => West,
            SouthEast => NorthWest,
            SouthWest => NorthEast,
            West => East,
            NorthWest => SouthEast,
        }
    }
}
