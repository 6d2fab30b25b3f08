//! JSON REST API for Touchline.
//!
//! Exposes an axum [`Router`] backed by any
//! [`touchline_core::store::StatStore`] +
//! [`touchline_core::source::LeagueSource`] pair. TLS and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", touchline_api::api_router(state))
//! ```

pub mod error;
pub mod fd;
pub mod ingest;
pub mod matches;
pub mod players;
pub mod predict;
pub mod squad;
pub mod teams;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, post},
};
use serde_json::{Value, json};
use touchline_core::{source::LeagueSource, store::StatStore};
use touchline_predict::MatchPredictor;

pub use error::ApiError;

/// Shared state threaded through all API handlers.
///
/// The predictor is injected here — constructed by the caller and passed
/// in, never process-wide shared state.
pub struct ApiState<S, L> {
  pub store:         Arc<S>,
  pub source:        Arc<L>,
  pub predictor:     Arc<MatchPredictor>,
  pub football_data: Arc<fd::FootballDataClient>,
}

impl<S, L> Clone for ApiState<S, L> {
  fn clone(&self) -> Self {
    Self {
      store:         Arc::clone(&self.store),
      source:        Arc::clone(&self.source),
      predictor:     Arc::clone(&self.predictor),
      football_data: Arc::clone(&self.football_data),
    }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S, L>(state: ApiState<S, L>) -> Router<()>
where
  S: StatStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
  L: LeagueSource + 'static,
  L::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/ping", get(ping))
    // Entities
    .route("/players", get(players::list::<S, L>))
    .route("/teams", get(teams::list::<S, L>))
    .route("/matches", get(matches::list::<S, L>))
    // Pipeline
    .route("/ingest", post(ingest::run::<S, L>))
    // Prediction
    .route("/predict", post(predict::run::<S, L>))
    .route("/squad/analyze", post(squad::analyze))
    // football-data.org passthrough
    .route("/competitions/{code}/teams", get(fd::competition_teams::<S, L>))
    .with_state(state)
}

/// `GET /ping`
async fn ping() -> Json<Value> {
  Json(json!({ "ok": true }))
}
