mod collaborator;
mod controller;
mod error;
mod http_client;
mod mutation;
mod wire;

pub use collaborator::Collaborator;
pub use controller::SyncController;
pub use error::{FailureStage, SyncError, SyncFailure};
pub use http_client::HttpCollaborator;
pub use mutation::{Ack, GameId, Mutation, Notice, ShotReport, SyncOutcome};
pub use wire::{BoardPayload, BoardQuery, NewGameResponse, ShootRequest, UndoRequest};
