//! Selection and confirmation state machine.
//!
//! The whole client is one [`ClientState`] value. Player actions and network
//! completions arrive as [`Event`]s; [`ClientState::apply`] returns the next
//! value plus the [`Effect`]s to run. The tagged [`Phase`] makes it impossible
//! to show a prompt while also accepting sunk-square toggles.

mod event;
mod invariants;
mod phase;
mod state;
mod transition;

pub use event::{Effect, Event};
pub use invariants::{
    ClientInvariants, IdleWithoutBoard, Invariant, InvariantSet, InvariantViolation,
    SelectionIsOpen, SunkSelectionOnBoard,
};
pub use phase::{Phase, Prompt, SunkSelection};
pub use state::{BoardStatus, ClientState, Pending, StatusLine, SyncStatus};
