//! Handlers for `/players`.

use axum::{Json, extract::State};
use touchline_core::{player::Player, source::LeagueSource, store::StatStore};

use crate::{ApiState, error::ApiError};

/// `GET /players`
pub async fn list<S, L>(
  State(state): State<ApiState<S, L>>,
) -> Result<Json<Vec<Player>>, ApiError>
where
  S: StatStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  L: LeagueSource,
{
  let players = state
    .store
    .list_players()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(players))
}
