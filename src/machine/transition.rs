//! The transition function `(state, event) → (state, effects)`.

use tracing::{debug, info, instrument, warn};

use super::event::{Effect, Event};
use super::invariants::{ClientInvariants, InvariantSet};
use super::phase::{Phase, SunkSelection};
use super::state::{BoardStatus, ClientState, Pending, StatusLine, SyncStatus};
use crate::board::{BoardModel, Snapshot};
use crate::sync::{FailureStage, Mutation, Notice, ShotReport, SyncError, SyncFailure, SyncOutcome};

impl ClientState {
    /// The state before the first board arrives, and the fetch that loads it.
    pub fn start() -> (Self, Vec<Effect>) {
        (Self::default(), vec![Effect::Refresh])
    }

    /// Applies one event and returns the next state plus the work to start.
    ///
    /// Pure: no I/O happens here. The caller runs the returned effects and
    /// feeds their results back in as events.
    #[instrument(skip_all, fields(phase = self.phase.name(), event = event.name()))]
    pub fn apply(self, event: Event) -> (Self, Vec<Effect>) {
        let (next, effects) = match event {
            Event::Loaded(snapshot) => (self.on_loaded(snapshot), Vec::new()),
            Event::LoadFailed(error) => (self.on_load_failed(error), Vec::new()),
            Event::Synced(outcome) => (self.on_synced(outcome), Vec::new()),
            Event::SyncFailed(failure) => (self.on_sync_failed(failure), Vec::new()),
            user => self.on_input(user),
        };
        debug!(next = next.phase.name(), effects = effects.len(), "Transition applied");
        debug_assert!(
            ClientInvariants::check_all(&next).is_ok(),
            "client invariants violated: {:?}",
            ClientInvariants::check_all(&next)
        );
        (next, effects)
    }

    fn on_input(self, event: Event) -> (Self, Vec<Effect>) {
        if self.is_busy() {
            debug!("Ignoring input while a request is in flight");
            return (self, Vec::new());
        }
        if self.failure().is_some() {
            return self.on_failure_input(event);
        }
        if self.model().is_none() {
            return match event {
                Event::Reload | Event::Retry => self.refresh(),
                _ => (self, Vec::new()),
            };
        }
        if event == Event::Reload && self.phase == Phase::Idle {
            return self.refresh();
        }
        self.on_board_input(event)
    }

    /// Input while the last request sits failed: only retry or dismiss.
    fn on_failure_input(mut self, event: Event) -> (Self, Vec<Effect>) {
        let SyncStatus::Failed { pending, error } = std::mem::take(&mut self.sync) else {
            return (self, Vec::new());
        };
        match event {
            Event::Retry => {
                info!(%pending, "Retrying");
                match pending {
                    Pending::Mutation(mutation) => self.submit(mutation),
                    Pending::Refresh => self.refresh(),
                }
            }
            Event::Dismiss | Event::Cancel | Event::Reload => {
                info!(%pending, "Failure dismissed");
                self.phase = Phase::Idle;
                self.status = None;
                match pending {
                    Pending::Mutation(_) => self.refresh(),
                    Pending::Refresh if event == Event::Reload => self.refresh(),
                    Pending::Refresh => {
                        self.status = Some(StatusLine::Warning(
                            "Board may be out of date. Press R to reload.".to_string(),
                        ));
                        (self, Vec::new())
                    }
                }
            }
            _ => {
                self.sync = SyncStatus::Failed { pending, error };
                (self, Vec::new())
            }
        }
    }

    /// Input with a board loaded and nothing outstanding.
    fn on_board_input(mut self, event: Event) -> (Self, Vec<Effect>) {
        let phase = std::mem::take(&mut self.phase);
        let (phase, mutation) = match (phase, event) {
            (Phase::Idle | Phase::SquareSelected { .. }, Event::Click(coord))
                if self.is_unshot(coord) =>
            {
                (Phase::SquareSelected { target: coord }, None)
            }
            (Phase::SelectingSunkSquares { target, mut sunk }, Event::Click(coord))
                if self.contains(coord) =>
            {
                let member = sunk.toggle(coord);
                debug!(%coord, member, "Toggled sunk square");
                (Phase::SelectingSunkSquares { target, sunk }, None)
            }
            (Phase::SquareSelected { target }, Event::Shoot) => {
                (Phase::AwaitingHitConfirm { target }, None)
            }
            (Phase::SquareSelected { .. }, Event::Cancel) => (Phase::Idle, None),
            (Phase::AwaitingHitConfirm { target }, Event::Deny) => (
                Phase::AwaitingHitConfirm { target },
                Some(Mutation::Shot(ShotReport::missed(target))),
            ),
            (Phase::AwaitingHitConfirm { target }, Event::Confirm) => {
                (Phase::AwaitingSunkConfirm { target }, None)
            }
            (Phase::AwaitingHitConfirm { target }, Event::Cancel) => {
                (Phase::SquareSelected { target }, None)
            }
            (Phase::AwaitingSunkConfirm { target }, Event::Deny) => (
                Phase::AwaitingSunkConfirm { target },
                Some(Mutation::Shot(ShotReport::hit_afloat(target))),
            ),
            (Phase::AwaitingSunkConfirm { target }, Event::Confirm) => (
                Phase::SelectingSunkSquares {
                    target,
                    sunk: SunkSelection::seeded(target),
                },
                None,
            ),
            (Phase::SelectingSunkSquares { target, sunk }, Event::SubmitSunk)
                if !sunk.is_empty() =>
            {
                let report = ShotReport::hit_and_sunk(target, sunk.as_slice().to_vec());
                (
                    Phase::SelectingSunkSquares { target, sunk },
                    Some(Mutation::Shot(report)),
                )
            }
            (phase, Event::Undo) if self.can_undo() => (phase, Some(Mutation::Undo)),
            (phase, event) => {
                debug!(phase = phase.name(), event = event.name(), "Event ignored");
                (phase, None)
            }
        };
        self.phase = phase;
        match mutation {
            Some(mutation) => self.submit(mutation),
            None => (self, Vec::new()),
        }
    }

    /// Starts a mutation round-trip. The phase stays put until it resolves.
    fn submit(mut self, mutation: Mutation) -> (Self, Vec<Effect>) {
        info!(%mutation, "Submitting");
        self.sync = SyncStatus::Busy(Pending::Mutation(mutation.clone()));
        self.status = None;
        (self, vec![Effect::Execute(mutation)])
    }

    fn refresh(mut self) -> (Self, Vec<Effect>) {
        debug!("Requesting board refresh");
        self.sync = SyncStatus::Busy(Pending::Refresh);
        (self, vec![Effect::Refresh])
    }

    fn on_loaded(mut self, snapshot: Snapshot) -> Self {
        self.install(snapshot);
        if self.sync == SyncStatus::Busy(Pending::Refresh) {
            self.sync = SyncStatus::Ready;
            // Whatever the last failure said no longer applies.
            self.status = None;
        }
        if let Some(target) = self.phase.selection()
            && !self.is_unshot(target)
        {
            debug!(%target, "Selection no longer open, clearing");
            self.phase = Phase::Idle;
        }
        self
    }

    fn on_load_failed(mut self, error: SyncError) -> Self {
        warn!(error = %error, "Board fetch failed");
        self.status = Some(StatusLine::Error(error.to_string()));
        if error.is_malformed() {
            self.make_unavailable(&error);
        } else {
            self.sync = SyncStatus::Failed {
                pending: Pending::Refresh,
                error,
            };
        }
        self
    }

    fn on_synced(mut self, outcome: SyncOutcome) -> Self {
        let (snapshot, notice) = outcome.into_parts();
        self.install(snapshot);
        self.phase = Phase::Idle;
        self.sync = SyncStatus::Ready;
        self.status = notice.map(|notice| match notice {
            Notice::Info(message) => StatusLine::Info(message),
            Notice::Rejected(error) => StatusLine::Warning(error),
        });
        info!(status = ?self.status, "Round-trip complete");
        self
    }

    fn on_sync_failed(mut self, failure: SyncFailure) -> Self {
        let in_flight = match std::mem::take(&mut self.sync) {
            SyncStatus::Busy(Pending::Mutation(mutation)) => Some(mutation),
            other => {
                warn!(sync = ?other, "Round-trip failure with no mutation in flight");
                None
            }
        };
        let SyncFailure {
            stage,
            error,
            resynced,
        } = failure;
        warn!(%stage, error = %error, resynced = resynced.is_some(), "Round-trip failed");

        if let Some(snapshot) = resynced {
            // The service's board decides whether the mutation landed.
            self.install(snapshot);
            self.phase = Phase::Idle;
            self.status = Some(StatusLine::Warning(format!(
                "{}. Board re-synced, check it before trying again.",
                error
            )));
            return self;
        }

        self.status = Some(StatusLine::Error(error.to_string()));
        match (stage, in_flight) {
            (FailureStage::Refetch, _) if error.is_malformed() => self.make_unavailable(&error),
            (FailureStage::Refetch, _) => {
                self.phase = Phase::Idle;
                self.sync = SyncStatus::Failed {
                    pending: Pending::Refresh,
                    error,
                };
            }
            (FailureStage::Send, Some(mutation)) => {
                self.sync = SyncStatus::Failed {
                    pending: Pending::Mutation(mutation),
                    error,
                };
            }
            (FailureStage::Send, None) => self.phase = Phase::Idle,
        }
        self
    }

    /// Replaces the board wholesale with the service's copy.
    fn install(&mut self, snapshot: Snapshot) {
        if let BoardStatus::Ready(model) = &mut self.board {
            model.replace(snapshot);
        } else {
            self.board = BoardStatus::Ready(BoardModel::new(snapshot));
        }
    }

    fn make_unavailable(&mut self, error: &SyncError) {
        self.board = BoardStatus::Unavailable(error.to_string());
        self.phase = Phase::Idle;
        self.sync = SyncStatus::Ready;
    }
}

