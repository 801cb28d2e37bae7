//! Core domain types for the target grid.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A square on the grid, addressed as `(row, col)`.
///
/// On the wire a coordinate is a two-element array `[row, col]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index, 0 is the bottom row on screen.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<[usize; 2]> for Coord {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for [usize; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}

/// One grid cell.
///
/// Only the four consistent flag combinations exist, so `hit ⇒ shot` and
/// `sunk ⇒ hit` hold for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "SquareFlags", into = "SquareFlags")]
pub enum Square {
    /// Not shot yet.
    #[default]
    Open,
    /// Shot, nothing there.
    Miss,
    /// Shot and hit a ship that is still afloat.
    Hit,
    /// Shot, hit, and part of a sunken ship.
    Sunk,
}

impl Square {
    /// Whether the square has been shot.
    pub fn shot(self) -> bool {
        !matches!(self, Square::Open)
    }

    /// Whether the shot on this square hit a ship.
    pub fn hit(self) -> bool {
        matches!(self, Square::Hit | Square::Sunk)
    }

    /// Whether the ship on this square has been sunk.
    pub fn sunk(self) -> bool {
        matches!(self, Square::Sunk)
    }
}

/// Wire shape of a square as the scoring service sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareFlags {
    /// Square has been shot.
    pub shot: bool,
    /// Shot hit a ship.
    pub hit: bool,
    /// Ship is sunk.
    pub sunk: bool,
}

/// Flags that no square can carry, such as `hit` without `shot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("inconsistent square flags (shot={shot}, hit={hit}, sunk={sunk})")]
pub struct InvalidSquare {
    /// Received `shot` flag.
    pub shot: bool,
    /// Received `hit` flag.
    pub hit: bool,
    /// Received `sunk` flag.
    pub sunk: bool,
}

impl TryFrom<SquareFlags> for Square {
    type Error = InvalidSquare;

    fn try_from(flags: SquareFlags) -> Result<Self, Self::Error> {
        match (flags.shot, flags.hit, flags.sunk) {
            (false, false, false) => Ok(Square::Open),
            (true, false, false) => Ok(Square::Miss),
            (true, true, false) => Ok(Square::Hit),
            (true, true, true) => Ok(Square::Sunk),
            (shot, hit, sunk) => Err(InvalidSquare { shot, hit, sunk }),
        }
    }
}

impl From<Square> for SquareFlags {
    fn from(square: Square) -> Self {
        Self {
            shot: square.shot(),
            hit: square.hit(),
            sunk: square.sunk(),
        }
    }
}

/// N×N grid of squares.
///
/// Shape is not checked here; a [`Snapshot`](super::Snapshot) is the
/// validated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Vec<Square>>,
}

impl Board {
    /// Wraps raw rows, row 0 first.
    pub fn new(rows: Vec<Vec<Square>>) -> Self {
        Self { rows }
    }

    /// Creates an `n×n` board with nothing shot.
    pub fn open(n: usize) -> Self {
        Self::new(vec![vec![Square::Open; n]; n])
    }

    /// Returns a copy with one square replaced. Out-of-range coordinates are ignored.
    pub fn with(mut self, coord: Coord, square: Square) -> Self {
        if let Some(cell) = self
            .rows
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
        {
            *cell = square;
        }
        self
    }

    /// Number of rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Rows, row 0 first.
    pub fn rows(&self) -> &[Vec<Square>] {
        &self.rows
    }

    /// Square at `coord`, if it is on the board.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        self.rows.get(coord.row)?.get(coord.col).copied()
    }

    /// Iterates every square with its coordinate in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Square)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, square)| (Coord::new(row, col), *square))
        })
    }

    /// Whether any square has been shot.
    pub fn has_any_shot(&self) -> bool {
        self.iter().any(|(_, square)| square.shot())
    }
}

/// Per-square hit likelihood scores, parallel to a [`Board`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreGrid {
    rows: Vec<Vec<f64>>,
}

impl ScoreGrid {
    /// Wraps raw rows, row 0 first.
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Creates an `n×n` grid holding `score` everywhere.
    pub fn uniform(n: usize, score: f64) -> Self {
        Self::new(vec![vec![score; n]; n])
    }

    /// Rows, row 0 first.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Score at `coord`, if it is on the grid.
    pub fn get(&self, coord: Coord) -> Option<f64> {
        self.rows.get(coord.row)?.get(coord.col).copied()
    }
}
