//! Handlers for `/matches`.

use axum::{Json, extract::State};
use touchline_core::{matches::Match, source::LeagueSource, store::StatStore};

use crate::{ApiState, error::ApiError};

/// `GET /matches`
pub async fn list<S, L>(
  State(state): State<ApiState<S, L>>,
) -> Result<Json<Vec<Match>>, ApiError>
where
  S: StatStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  L: LeagueSource,
{
  let matches = state
    .store
    .list_matches()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(matches))
}
