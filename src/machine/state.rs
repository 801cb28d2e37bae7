//! The client state value rendered by the UI.

use derive_getters::Getters;
use derive_more::Display;

use super::phase::{Phase, Prompt, SunkSelection};
use crate::board::{BoardModel, Coord};
use crate::sync::{Mutation, SyncError};

/// Network work the client is waiting on or could retry.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Pending {
    /// A mutation round-trip.
    #[display("{_0}")]
    Mutation(Mutation),
    /// A plain board fetch.
    #[display("refresh")]
    Refresh,
}

/// Whether the client is talking to the scoring service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncStatus {
    /// Nothing outstanding; player input is accepted.
    #[default]
    Ready,
    /// A request is in flight; player input is ignored.
    Busy(Pending),
    /// The last request failed and waits for the player to retry or dismiss.
    Failed {
        /// What failed.
        pending: Pending,
        /// Why.
        error: SyncError,
    },
}

/// What the client knows about the board.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BoardStatus {
    /// No board fetched yet.
    #[default]
    Loading,
    /// Last board fetched from the service.
    Ready(BoardModel),
    /// The service sent a board that cannot be drawn.
    Unavailable(String),
}

/// One line of feedback for the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StatusLine {
    /// Informational message from the service.
    #[display("{_0}")]
    Info(String),
    /// Something the player should double-check.
    #[display("{_0}")]
    Warning(String),
    /// A failure.
    #[display("{_0}")]
    Error(String),
}

/// Everything the UI shows, as one value.
///
/// Only [`ClientState::apply`](super::ClientState::apply) produces new values.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ClientState {
    pub(super) board: BoardStatus,
    pub(super) phase: Phase,
    pub(super) sync: SyncStatus,
    pub(super) status: Option<StatusLine>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            board: BoardStatus::Loading,
            phase: Phase::Idle,
            sync: SyncStatus::Busy(Pending::Refresh),
            status: None,
        }
    }
}

impl ClientState {
    /// The loaded board model, if there is one.
    pub fn model(&self) -> Option<&BoardModel> {
        match &self.board {
            BoardStatus::Ready(model) => Some(model),
            _ => None,
        }
    }

    /// Whether `coord` is on the board and not yet shot.
    pub fn is_unshot(&self, coord: Coord) -> bool {
        self.model().is_some_and(|model| model.is_unshot(coord))
    }

    /// Whether `coord` is on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        self.model().is_some_and(|model| model.contains(coord))
    }

    /// Whether undo is offered: some square has been shot.
    pub fn can_undo(&self) -> bool {
        self.model().is_some_and(BoardModel::has_any_shot)
    }

    /// Whether a request is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.sync, SyncStatus::Busy(_))
    }

    /// The failed request and its error, while waiting on the player.
    pub fn failure(&self) -> Option<(&Pending, &SyncError)> {
        match &self.sync {
            SyncStatus::Failed { pending, error } => Some((pending, error)),
            _ => None,
        }
    }

    /// The prompt to show. Hidden while a request is in flight or failed.
    pub fn prompt(&self) -> Option<Prompt> {
        match self.sync {
            SyncStatus::Ready => self.phase.prompt(),
            _ => None,
        }
    }

    /// A hit the player reported that the service has not confirmed yet.
    ///
    /// Drawn distinctly from authoritative hits and dropped as soon as a
    /// fresh board arrives or the player dismisses a failure.
    pub fn pending_hit(&self) -> Option<Coord> {
        self.phase.pending_hit().or_else(|| match &self.sync {
            SyncStatus::Busy(Pending::Mutation(mutation))
            | SyncStatus::Failed {
                pending: Pending::Mutation(mutation),
                ..
            } => mutation.reported_hit(),
            _ => None,
        })
    }

    /// Squares currently marked as the sunken ship, empty outside that phase.
    pub fn sunk_members(&self) -> &[Coord] {
        self.phase
            .sunk_selection()
            .map(SunkSelection::as_slice)
            .unwrap_or(&[])
    }
}
