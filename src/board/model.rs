//! Validated board snapshots and the model that holds the latest one.

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

use super::types::{Board, Coord, ScoreGrid, Square};

/// A board/score payload whose shape does not line up.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ShapeError {
    /// The grid has no rows.
    #[display("board is empty")]
    Empty,
    /// A board row does not have `size` squares.
    #[display("board row {row} has {len} squares, expected {size}")]
    RaggedBoard {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Expected length.
        size: usize,
    },
    /// The score grid has a different number of rows than the board.
    #[display("score grid has {rows} rows, expected {size}")]
    ScoreRows {
        /// Rows received.
        rows: usize,
        /// Expected rows.
        size: usize,
    },
    /// A score row does not have `size` entries.
    #[display("score row {row} has {len} entries, expected {size}")]
    RaggedScores {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Expected length.
        size: usize,
    },
}

/// A board and its scores, checked to be the same square shape.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Snapshot {
    board: Board,
    scores: ScoreGrid,
}

impl Snapshot {
    /// Pairs a board with its scores after checking both are `N×N`.
    #[instrument(skip_all, fields(rows = board.size()))]
    pub fn new(board: Board, scores: ScoreGrid) -> Result<Self, ShapeError> {
        let size = board.size();
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some((row, cells)) = board
            .rows()
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != size)
        {
            return Err(ShapeError::RaggedBoard {
                row,
                len: cells.len(),
                size,
            });
        }
        if scores.rows().len() != size {
            return Err(ShapeError::ScoreRows {
                rows: scores.rows().len(),
                size,
            });
        }
        if let Some((row, entries)) = scores
            .rows()
            .iter()
            .enumerate()
            .find(|(_, entries)| entries.len() != size)
        {
            return Err(ShapeError::RaggedScores {
                row,
                len: entries.len(),
                size,
            });
        }
        Ok(Self { board, scores })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.board.size()
    }
}

/// The board as last fetched from the scoring service.
///
/// Board and scores only ever change together, through [`BoardModel::replace`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoardModel {
    snapshot: Snapshot,
}

impl BoardModel {
    /// Creates a model from the first fetched snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Swaps in a new board and score grid. Returns whether anything changed.
    #[instrument(skip_all)]
    pub fn replace(&mut self, snapshot: Snapshot) -> bool {
        if self.snapshot == snapshot {
            debug!("Snapshot unchanged");
            return false;
        }
        debug!(size = snapshot.size(), "Replacing board snapshot");
        self.snapshot = snapshot;
        true
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.snapshot.board()
    }

    /// Current scores.
    pub fn scores(&self) -> &ScoreGrid {
        self.snapshot.scores()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.snapshot.size()
    }

    /// Whether `coord` lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size() && coord.col < self.size()
    }

    /// Square at `coord`.
    pub fn square(&self, coord: Coord) -> Option<Square> {
        self.board().get(coord)
    }

    /// Score at `coord`.
    pub fn score(&self, coord: Coord) -> Option<f64> {
        self.scores().get(coord)
    }

    /// Whether `coord` is on the board and has not been shot.
    pub fn is_unshot(&self, coord: Coord) -> bool {
        self.square(coord).is_some_and(|square| !square.shot())
    }

    /// Whether any square has been shot. Gates undo.
    pub fn has_any_shot(&self) -> bool {
        self.board().has_any_shot()
    }
}
