//! Properties every [`ClientState`] must satisfy.
//!
//! Checked after each transition in debug builds and directly in tests.

use super::phase::Phase;
use super::state::ClientState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The square selected for shooting is on the board and unshot.
pub struct SelectionIsOpen;

impl Invariant<ClientState> for SelectionIsOpen {
    fn holds(state: &ClientState) -> bool {
        state
            .phase()
            .selection()
            .is_none_or(|target| state.is_unshot(target))
    }

    fn description() -> &'static str {
        "selected square must be on the board and not yet shot"
    }
}

/// Every marked sunk square lies on the board, without duplicates.
pub struct SunkSelectionOnBoard;

impl Invariant<ClientState> for SunkSelectionOnBoard {
    fn holds(state: &ClientState) -> bool {
        let members = state.sunk_members();
        let on_board = members.iter().all(|coord| state.contains(*coord));
        let distinct = members
            .iter()
            .enumerate()
            .all(|(i, coord)| !members[..i].contains(coord));
        on_board && distinct
    }

    fn description() -> &'static str {
        "sunk selection must be a set of squares on the board"
    }
}

/// Without a drawable board the player can only be idle.
pub struct IdleWithoutBoard;

impl Invariant<ClientState> for IdleWithoutBoard {
    fn holds(state: &ClientState) -> bool {
        state.model().is_some() || *state.phase() == Phase::Idle
    }

    fn description() -> &'static str {
        "no interaction may be in progress while the board is unavailable"
    }
}

/// All client-state invariants as a composable set.
pub type ClientInvariants = (SelectionIsOpen, SunkSelectionOnBoard, IdleWithoutBoard);
