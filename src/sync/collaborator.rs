//! The seam between the client and the remote scoring service.

use super::error::SyncError;
use super::mutation::{Ack, GameId, ShotReport};
use crate::board::Snapshot;

/// Remote service that owns game state and computes square scores.
#[async_trait::async_trait]
pub trait Collaborator: Send + Sync {
    /// Starts a new game and returns its id.
    async fn create_game(&self) -> Result<GameId, SyncError>;

    /// Fetches the authoritative board and scores.
    async fn get_board(&self, game_id: &GameId) -> Result<Snapshot, SyncError>;

    /// Records the outcome of a shot.
    async fn record_shot(&self, game_id: &GameId, report: &ShotReport) -> Result<Ack, SyncError>;

    /// Reverts the most recent shot.
    async fn undo_last_shot(&self, game_id: &GameId) -> Result<Ack, SyncError>;
}
