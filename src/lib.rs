//! Broadside library - assisted Battleship against a remote scoring service
//!
//! The player records what happened to each shot; the scoring service keeps the
//! authoritative board and answers with a probability score for every square.
//!
//! # Architecture
//!
//! - **Board**: the last board fetched from the service, plus the heat-map color scale
//! - **Machine**: the select → shoot → confirm state machine, as one pure value
//! - **Sync**: mutate-then-refetch round-trips with the scoring service
//! - **TUI**: ratatui front end driving the machine from keys and network results
//!
//! # Example
//!
//! ```no_run
//! use broadside::{ClientState, Coord, Event};
//!
//! let (state, _effects) = ClientState::start();
//! // Player input is ignored until the first board arrives.
//! let (state, effects) = state.apply(Event::Click(Coord::new(3, 4)));
//! assert!(effects.is_empty());
//! # let _ = state;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod machine;
mod sync;
mod tui;

// Crate-level exports - Board model
pub use board::{
    Board, BoardModel, Coord, InvalidSquare, MAX_SCORE, ScoreGrid, ShapeError, Snapshot, Square,
    SquareFlags, clamp_score, heat_color,
};

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - State machine
pub use machine::{
    BoardStatus, ClientInvariants, ClientState, Effect, Event, IdleWithoutBoard, Invariant,
    InvariantSet, InvariantViolation, Pending, Phase, Prompt, SelectionIsOpen, StatusLine,
    SunkSelection, SunkSelectionOnBoard, SyncStatus,
};

// Crate-level exports - Sync with the scoring service
pub use sync::{
    Ack, BoardPayload, BoardQuery, Collaborator, FailureStage, GameId, HttpCollaborator,
    Mutation, NewGameResponse, Notice, ShootRequest, ShotReport, SyncController, SyncError,
    SyncFailure, SyncOutcome, UndoRequest,
};

// Crate-level exports - Terminal UI
pub use tui::{App, run_tui};
