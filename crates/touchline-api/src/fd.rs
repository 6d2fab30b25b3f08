//! football-data.org passthrough client and its handler.
//!
//! A thin REST passthrough — the one external API collaborator. Requires
//! an auth token from configuration; fails with a descriptive error when
//! the token is absent or the upstream call is rejected.

use std::time::Duration;

use axum::{
  Json,
  extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use touchline_core::{source::LeagueSource, store::StatStore};

use crate::{ApiState, error::ApiError};

const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";

/// Upstream error bodies are truncated to this many characters.
const ERROR_BODY_LIMIT: usize = 400;

#[derive(Debug, Error)]
pub enum FdError {
  #[error("football-data token is not set (or is empty)")]
  MissingToken,

  #[error("football-data request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("football-data request rejected with {status}: {body}")]
  Rejected { status: reqwest::StatusCode, body: String },
}

impl From<FdError> for ApiError {
  fn from(e: FdError) -> Self {
    match e {
      FdError::MissingToken => ApiError::Config(e.to_string()),
      other => ApiError::Upstream(other.to_string()),
    }
  }
}

/// One competition team, as returned to API clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct FdTeam {
  pub id:   i64,
  pub name: String,
  #[serde(rename = "shortName")]
  pub short_name: Option<String>,
  pub tla:   Option<String>,
  pub crest: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TeamsResponse {
  #[serde(default)]
  teams: Vec<FdTeam>,
}

/// Client for the football-data.org v4 API.
pub struct FootballDataClient {
  client:   reqwest::Client,
  base_url: String,
  token:    Option<String>,
}

impl FootballDataClient {
  pub fn new(token: Option<String>) -> Result<Self, FdError> {
    Self::with_base_url(DEFAULT_BASE_URL, token)
  }

  /// Client against a non-default host — useful for testing.
  pub fn with_base_url(base_url: &str, token: Option<String>) -> Result<Self, FdError> {
    let client = reqwest::Client::builder()
      .user_agent("touchline-scout/1.0")
      .timeout(Duration::from_secs(20))
      .build()?;
    Ok(Self { client, base_url: base_url.to_string(), token })
  }

  /// `GET /competitions/{code}/teams` upstream. The token is checked
  /// before any request goes out.
  pub async fn competition_teams(&self, code: &str) -> Result<Vec<FdTeam>, FdError> {
    let token = self
      .token
      .as_deref()
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .ok_or(FdError::MissingToken)?;

    let url = format!("{}/competitions/{}/teams", self.base_url, code);
    let response = self
      .client
      .get(&url)
      .header("X-Auth-Token", token)
      .header(reqwest::header::ACCEPT, "application/json")
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      // Surface the upstream body so the rejection reason is visible.
      let body = response.text().await.unwrap_or_default();
      let body: String = body.chars().take(ERROR_BODY_LIMIT).collect();
      return Err(FdError::Rejected { status, body });
    }

    Ok(response.json::<TeamsResponse>().await?.teams)
  }
}

/// `GET /competitions/{code}/teams` — e.g. `PL`, `PD`, `SA`, `BL1`.
pub async fn competition_teams<S, L>(
  State(state): State<ApiState<S, L>>,
  Path(code): Path<String>,
) -> Result<Json<Vec<FdTeam>>, ApiError>
where
  S: StatStore,
  L: LeagueSource,
{
  let teams = state.football_data.competition_teams(&code).await?;
  Ok(Json(teams))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn missing_token_errors_before_any_request() {
    let client = FootballDataClient::new(None).unwrap();
    let err = client.competition_teams("PL").await.unwrap_err();
    assert!(matches!(err, FdError::MissingToken));
  }

  #[tokio::test]
  async fn blank_token_counts_as_missing() {
    let client = FootballDataClient::new(Some("   ".into())).unwrap();
    let err = client.competition_teams("PL").await.unwrap_err();
    assert!(matches!(err, FdError::MissingToken));
  }
}
