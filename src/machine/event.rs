//! Inputs to and outputs from the client state machine.

use crate::board::{Coord, Snapshot};
use crate::sync::{Mutation, SyncError, SyncFailure, SyncOutcome};

/// Something that happened: a player action or a finished network call.
#[derive(Debug, Clone, PartialEq, strum::IntoStaticStr)]
pub enum Event {
    /// Player clicked a square.
    Click(Coord),
    /// Player pressed "Shoot".
    Shoot,
    /// Player answered yes to the open prompt.
    Confirm,
    /// Player answered no to the open prompt.
    Deny,
    /// Player pressed "Submit sunken ship".
    SubmitSunk,
    /// Player pressed "Undo".
    Undo,
    /// Player backed out of the current step.
    Cancel,
    /// Player asked to re-send whatever just failed.
    Retry,
    /// Player acknowledged a failure and wants to carry on from the service's board.
    Dismiss,
    /// Player asked for a fresh copy of the board.
    Reload,
    /// A plain board fetch finished.
    Loaded(Snapshot),
    /// A plain board fetch failed.
    LoadFailed(SyncError),
    /// A mutation round-trip finished.
    Synced(SyncOutcome),
    /// A mutation round-trip failed.
    SyncFailed(SyncFailure),
}

impl Event {
    /// Variant name for logs.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Whether the event comes from the player rather than the network.
    pub fn is_user(&self) -> bool {
        !matches!(
            self,
            Event::Loaded(_) | Event::LoadFailed(_) | Event::Synced(_) | Event::SyncFailed(_)
        )
    }
}

/// Work the caller must start after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a mutation and re-fetch; answer with `Synced` or `SyncFailed`.
    Execute(Mutation),
    /// Fetch the board; answer with `Loaded` or `LoadFailed`.
    Refresh,
}
