//! JSON bodies exchanged with the scoring service.

use serde::{Deserialize, Serialize};

use super::error::SyncError;
use super::mutation::{GameId, ShotReport};
use crate::board::{Board, Coord, ScoreGrid, Snapshot};

/// Response of `POST /new_game`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameResponse {
    /// Freshly issued game id.
    pub game_id: GameId,
}

/// Response of `GET /board`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardPayload {
    /// Squares, row 0 first.
    pub grid: Board,
    /// Scores, same shape as `grid`.
    pub scores: ScoreGrid,
}

impl TryFrom<BoardPayload> for Snapshot {
    type Error = SyncError;

    fn try_from(payload: BoardPayload) -> Result<Self, Self::Error> {
        Ok(Snapshot::new(payload.grid, payload.scores)?)
    }
}

impl From<&Snapshot> for BoardPayload {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            grid: snapshot.board().clone(),
            scores: snapshot.scores().clone(),
        }
    }
}

/// Body of `POST /shoot`. Absent options are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootRequest {
    /// Game being played.
    pub game_id: GameId,
    /// Square that was shot.
    pub coords: Coord,
    /// Whether it hit.
    pub hit: bool,
    /// Whether a ship sank; absent for a miss.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunk: Option<bool>,
    /// Squares of the sunken ship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunk_coords: Option<Vec<Coord>>,
}

impl ShootRequest {
    /// Builds the request body for `report` in `game`.
    pub fn new(game_id: &GameId, report: &ShotReport) -> Self {
        Self {
            game_id: game_id.clone(),
            coords: *report.coord(),
            hit: *report.hit(),
            sunk: *report.sunk(),
            sunk_coords: report.sunk_coords().clone(),
        }
    }
}

/// Body of `POST /undo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoRequest {
    /// Game being played.
    pub game_id: GameId,
}

/// Query string of `GET /board`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardQuery {
    /// Game being played.
    pub game_id: GameId,
}
