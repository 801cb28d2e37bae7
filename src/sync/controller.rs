//! Mutate-then-refetch protocol against the scoring service.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::collaborator::Collaborator;
use super::error::{FailureStage, SyncError, SyncFailure};
use super::mutation::{Ack, GameId, Mutation, ShotReport, SyncOutcome};
use crate::board::Snapshot;

/// Sends mutations for one game and re-syncs the board after each.
///
/// Every mutating call re-fetches the board, whatever the acknowledgement
/// said, so the client never keeps a board the service does not have.
#[derive(Debug)]
pub struct SyncController<C> {
    collaborator: Arc<C>,
    game_id: GameId,
}

impl<C> Clone for SyncController<C> {
    fn clone(&self) -> Self {
        Self {
            collaborator: Arc::clone(&self.collaborator),
            game_id: self.game_id.clone(),
        }
    }
}

impl<C: Collaborator> SyncController<C> {
    /// Controller for an existing game.
    pub fn new(collaborator: C, game_id: GameId) -> Self {
        Self {
            collaborator: Arc::new(collaborator),
            game_id,
        }
    }

    /// Joins `game_id`, or asks the service for a new game when none is given.
    #[instrument(skip(collaborator))]
    pub async fn connect(collaborator: C, game_id: Option<GameId>) -> Result<Self, SyncError> {
        let game_id = match game_id {
            Some(id) => {
                info!(game_id = %id, "Joining existing game");
                id
            }
            None => collaborator.create_game().await?,
        };
        Ok(Self::new(collaborator, game_id))
    }

    /// Game this controller talks about.
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// The underlying service.
    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    /// Fetches the board without changing anything.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub async fn refresh(&self) -> Result<Snapshot, SyncError> {
        self.collaborator.get_board(&self.game_id).await
    }

    /// Records a shot, then re-fetches the board.
    #[instrument(skip(self, report), fields(game_id = %self.game_id, coord = %report.coord()))]
    pub async fn submit_shot(&self, report: &ShotReport) -> Result<SyncOutcome, SyncFailure> {
        let sent = self.collaborator.record_shot(&self.game_id, report).await;
        self.resync(sent).await
    }

    /// Reverts the last shot, then re-fetches the board.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub async fn undo(&self) -> Result<SyncOutcome, SyncFailure> {
        let sent = self.collaborator.undo_last_shot(&self.game_id).await;
        self.resync(sent).await
    }

    /// Runs whichever round-trip `mutation` calls for.
    pub async fn execute(&self, mutation: &Mutation) -> Result<SyncOutcome, SyncFailure> {
        match mutation {
            Mutation::Shot(report) => self.submit_shot(report).await,
            Mutation::Undo => self.undo().await,
        }
    }

    /// Second half of every round-trip. Runs even when the send failed,
    /// since the mutation may have landed anyway.
    async fn resync(&self, sent: Result<Ack, SyncError>) -> Result<SyncOutcome, SyncFailure> {
        if let Err(error) = &sent {
            warn!(error = %error, "Mutation failed to send, re-fetching anyway");
        }
        let fetched = self.collaborator.get_board(&self.game_id).await;

        match (sent, fetched) {
            (Ok(ack), Ok(snapshot)) => {
                let notice = ack.notice();
                debug!(?notice, "Round-trip complete");
                Ok(SyncOutcome::new(snapshot, notice))
            }
            (Ok(_), Err(error)) => {
                warn!(error = %error, "Mutation acknowledged but refetch failed");
                Err(SyncFailure {
                    stage: FailureStage::Refetch,
                    error,
                    resynced: None,
                })
            }
            (Err(error), fetched) => Err(SyncFailure {
                stage: FailureStage::Send,
                error,
                resynced: fetched.ok(),
            }),
        }
    }
}
