//! Mutations sent to the scoring service and what it says back.

use derive_getters::Getters;
use derive_more::{Display, From};
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::board::{Coord, Snapshot};

/// Identifier the scoring service issues for a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Borrows the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The outcome of one shot as the player reports it.
///
/// `sunk` is absent for a miss and `Some(false)` for a hit that sank nothing.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ShotReport {
    coord: Coord,
    hit: bool,
    sunk: Option<bool>,
    sunk_coords: Option<Vec<Coord>>,
}

impl ShotReport {
    /// Shot at `coord` found nothing.
    pub fn missed(coord: Coord) -> Self {
        Self {
            coord,
            hit: false,
            sunk: None,
            sunk_coords: None,
        }
    }

    /// Shot at `coord` hit a ship that stays afloat.
    pub fn hit_afloat(coord: Coord) -> Self {
        Self {
            coord,
            hit: true,
            sunk: Some(false),
            sunk_coords: None,
        }
    }

    /// Shot at `coord` sank the ship occupying `squares`.
    pub fn hit_and_sunk(coord: Coord, squares: Vec<Coord>) -> Self {
        Self {
            coord,
            hit: true,
            sunk: Some(true),
            sunk_coords: Some(squares),
        }
    }
}

/// A change the player asks the scoring service to make.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Mutation {
    /// Record a shot.
    #[display("shot at {}", _0.coord)]
    Shot(ShotReport),
    /// Take back the most recent shot.
    #[display("undo")]
    Undo,
}

impl Mutation {
    /// The hit being reported, if this is a hit.
    pub fn reported_hit(&self) -> Option<Coord> {
        match self {
            Mutation::Shot(report) if report.hit => Some(report.coord),
            _ => None,
        }
    }
}

/// Acknowledgement body of a mutating request.
///
/// Only the informational `message` and the `error` string are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Informational text.
    #[serde(default)]
    pub message: Option<String>,
    /// Application-level rejection.
    #[serde(default)]
    pub error: Option<String>,
}

impl Ack {
    /// What to show the player, message first.
    pub fn notice(&self) -> Option<Notice> {
        match (&self.message, &self.error) {
            (Some(message), _) => Some(Notice::Info(message.clone())),
            (None, Some(error)) => Some(Notice::Rejected(error.clone())),
            (None, None) => None,
        }
    }
}

/// Text the scoring service attached to an acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Notice {
    /// Informational message.
    #[display("{_0}")]
    Info(String),
    /// The service refused the mutation.
    #[display("rejected: {_0}")]
    Rejected(String),
}

/// A completed round-trip: the authoritative board and any notice.
#[derive(Debug, Clone, PartialEq, Getters, new)]
pub struct SyncOutcome {
    snapshot: Snapshot,
    notice: Option<Notice>,
}

impl SyncOutcome {
    /// Splits into parts.
    pub fn into_parts(self) -> (Snapshot, Option<Notice>) {
        (self.snapshot, self.notice)
    }
}
