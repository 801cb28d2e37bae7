//! HTTP client for the scoring service.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::collaborator::Collaborator;
use super::error::SyncError;
use super::mutation::{Ack, GameId, ShotReport};
use super::wire::{BoardPayload, NewGameResponse, ShootRequest, UndoRequest};
use crate::board::Snapshot;

/// Longest response body kept in a [`SyncError::Status`].
const MAX_ERROR_BODY: usize = 200;

/// Scoring service reached over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpCollaborator {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCollaborator {
    /// Creates a client for the service at `base_url`. Every request gives up after `timeout`.
    #[instrument(skip_all)]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SyncError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        debug!(base_url = %base_url, ?timeout, "HTTP client ready");
        Ok(Self { base_url, client })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Reads an acknowledgement, keeping only `message` and `error`.
    ///
    /// A non-success status still counts as an acknowledgement when the body
    /// carries an `error` string, since that is an application-level rejection.
    async fn read_ack(response: reqwest::Response) -> Result<Ack, SyncError> {
        let status = response.status();
        let body = response.text().await?;
        let ack = serde_json::from_str::<Ack>(&body).ok();
        debug!(status = %status, ?ack, "Acknowledgement received");

        match ack {
            Some(ack) if ack.error.is_some() => Ok(ack),
            _ if !status.is_success() => Err(SyncError::Status {
                code: status.as_u16(),
                body: truncate(&body),
            }),
            Some(ack) => Ok(ack),
            None => Ok(Ack::default()),
        }
    }
}

#[async_trait::async_trait]
impl Collaborator for HttpCollaborator {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn create_game(&self) -> Result<GameId, SyncError> {
        info!("Creating game");
        let response = self.client.post(self.url("new_game")).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SyncError::Status {
                code: status.as_u16(),
                body: truncate(&body),
            });
        }
        let created: NewGameResponse = serde_json::from_str(&body)?;
        info!(game_id = %created.game_id, "Game created");
        Ok(created.game_id)
    }

    #[instrument(skip(self), fields(game_id = %game_id))]
    async fn get_board(&self, game_id: &GameId) -> Result<Snapshot, SyncError> {
        debug!("Fetching board");
        let url = reqwest::Url::parse_with_params(&self.url("board"), [("game_id", game_id.as_str())])
            .map_err(|e| SyncError::Transport(format!("invalid server url: {}", e)))?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = %status, "Board fetch rejected");
            return Err(SyncError::Status {
                code: status.as_u16(),
                body: truncate(&body),
            });
        }
        let payload: BoardPayload = serde_json::from_str(&body)?;
        let snapshot = Snapshot::try_from(payload)?;
        debug!(size = snapshot.size(), "Board fetched");
        Ok(snapshot)
    }

    #[instrument(skip(self, report), fields(game_id = %game_id, coord = %report.coord(), hit = report.hit()))]
    async fn record_shot(&self, game_id: &GameId, report: &ShotReport) -> Result<Ack, SyncError> {
        info!(sunk = ?report.sunk(), "Recording shot");
        let response = self
            .client
            .post(self.url("shoot"))
            .json(&ShootRequest::new(game_id, report))
            .send()
            .await?;
        Self::read_ack(response).await
    }

    #[instrument(skip(self), fields(game_id = %game_id))]
    async fn undo_last_shot(&self, game_id: &GameId) -> Result<Ack, SyncError> {
        info!("Undoing last shot");
        let response = self
            .client
            .post(self.url("undo"))
            .json(&UndoRequest {
                game_id: game_id.clone(),
            })
            .send()
            .await?;
        Self::read_ack(response).await
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY).collect()
}
