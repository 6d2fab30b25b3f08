//! Handler for `POST /ingest` — runs the scrape → normalize → persist
//! pipeline synchronously within the request.
//!
//! The request blocks until the whole league has been fetched and stored
//! (or failed); there is no background job. Errors surface in the standard
//! error envelope with the cause's message.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use touchline_core::{source::LeagueSource, store::StatStore};
use tracing::info;

use crate::{ApiState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct IngestBody {
  #[serde(default = "default_league_path")]
  pub league_path: String,
}

fn default_league_path() -> String {
  "/en/comps/9/Premier-League-Stats".to_string()
}

/// `POST /ingest` — body: `{"league_path":"/en/comps/9/Premier-League-Stats"}`
pub async fn run<S, L>(
  State(state): State<ApiState<S, L>>,
  Json(body): Json<IngestBody>,
) -> Result<Json<Value>, ApiError>
where
  S: StatStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  L: LeagueSource,
  L::Error: std::error::Error + Send + Sync + 'static,
{
  info!(league = %body.league_path, "starting league ingestion");

  let scrape = state
    .source
    .scrape_league(&body.league_path)
    .await
    .map_err(|e| ApiError::Scrape(Box::new(e)))?;

  let teams_added = state
    .store
    .add_teams(scrape.teams)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let players_added = state
    .store
    .add_players(scrape.players)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  info!(players_added, teams_added, "league ingestion complete");
  Ok(Json(json!({
    "status": "success",
    "players_added": players_added,
    "teams_added": teams_added,
    "message": "league data loaded successfully",
  })))
}
