//! The five interaction phases and the sunk-square selection.

use derive_more::Display;

use crate::board::Coord;

/// Squares the player marks as belonging to a ship just sunk.
///
/// A set under toggle that remembers insertion order, so the report lists
/// squares in the order they were picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SunkSelection {
    members: Vec<Coord>,
}

impl SunkSelection {
    /// Starts a selection holding the square whose hit sank the ship.
    pub fn seeded(origin: Coord) -> Self {
        Self {
            members: vec![origin],
        }
    }

    /// Adds `coord` if absent, removes it if present. Returns whether it is now a member.
    pub fn toggle(&mut self, coord: Coord) -> bool {
        if let Some(index) = self.members.iter().position(|member| *member == coord) {
            self.members.remove(index);
            false
        } else {
            self.members.push(coord);
            true
        }
    }

    /// Whether `coord` is selected.
    pub fn contains(&self, coord: Coord) -> bool {
        self.members.contains(&coord)
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of selected squares.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Selected squares in the order they were picked.
    pub fn as_slice(&self) -> &[Coord] {
        &self.members
    }
}

/// A yes/no question blocking the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Prompt {
    /// Asked after "Shoot".
    #[display("Was it a hit?")]
    WasItAHit,
    /// Asked after a confirmed hit.
    #[display("Was a ship sunk?")]
    WasAShipSunk,
}

/// Where the player is in the select → shoot → confirm sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, strum::IntoStaticStr)]
pub enum Phase {
    /// Nothing selected.
    #[default]
    Idle,
    /// `target` will be shot next.
    SquareSelected {
        /// Selected square.
        target: Coord,
    },
    /// Asking whether the shot at `target` hit.
    AwaitingHitConfirm {
        /// Square that was shot.
        target: Coord,
    },
    /// `target` hit; asking whether a ship sank.
    AwaitingSunkConfirm {
        /// Square that hit.
        target: Coord,
    },
    /// `target` sank a ship; the player marks the ship's squares.
    SelectingSunkSquares {
        /// Square whose hit sank the ship.
        target: Coord,
        /// Squares marked so far.
        sunk: SunkSelection,
    },
}

impl Phase {
    /// Variant name for logs.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// The square the player intends to shoot, while that is still open.
    pub fn selection(&self) -> Option<Coord> {
        match self {
            Phase::SquareSelected { target } | Phase::AwaitingHitConfirm { target } => {
                Some(*target)
            }
            _ => None,
        }
    }

    /// The open question, if any.
    pub fn prompt(&self) -> Option<Prompt> {
        match self {
            Phase::AwaitingHitConfirm { .. } => Some(Prompt::WasItAHit),
            Phase::AwaitingSunkConfirm { .. } => Some(Prompt::WasAShipSunk),
            _ => None,
        }
    }

    /// A square the player said was hit but the service has not confirmed.
    pub fn pending_hit(&self) -> Option<Coord> {
        match self {
            Phase::AwaitingSunkConfirm { target } | Phase::SelectingSunkSquares { target, .. } => {
                Some(*target)
            }
            _ => None,
        }
    }

    /// The sunk-square selection while it is being assembled.
    pub fn sunk_selection(&self) -> Option<&SunkSelection> {
        match self {
            Phase::SelectingSunkSquares { sunk, .. } => Some(sunk),
            _ => None,
        }
    }

    /// Whether clicks toggle sunk squares rather than select a target.
    pub fn is_selecting_sunk(&self) -> bool {
        matches!(self, Phase::SelectingSunkSquares { .. })
    }
}
