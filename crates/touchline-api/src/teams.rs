//! Handlers for `/teams`.

use axum::{Json, extract::State};
use touchline_core::{source::LeagueSource, store::StatStore, team::Team};

use crate::{ApiState, error::ApiError};

/// `GET /teams`
pub async fn list<S, L>(
  State(state): State<ApiState<S, L>>,
) -> Result<Json<Vec<Team>>, ApiError>
where
  S: StatStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  L: LeagueSource,
{
  let teams = state
    .store
    .list_teams()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(teams))
}
