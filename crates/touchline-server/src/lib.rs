//! Touchline server assembly.
//!
//! Configuration types and the composed application router: the service
//! banner at `/` plus the JSON API under `/api`, with request tracing.

use std::{path::PathBuf, time::Duration};

use axum::{Json, Router, routing::get};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use touchline_api::{ApiState, api_router};
use touchline_core::{source::LeagueSource, store::StatStore};
use touchline_scrape::ScrapeConfig;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` with
/// `TOUCHLINE_*` environment overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:    String,
  pub port:    u16,
  pub db_path: PathBuf,
  pub scrape:  ScrapeSettings,
  /// football-data.org API token; the passthrough route fails without it.
  pub football_data_token: Option<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:    "127.0.0.1".to_string(),
      port:    5000,
      db_path: PathBuf::from("touchline.db"),
      scrape:  ScrapeSettings::default(),
      football_data_token: None,
    }
  }
}

/// Scraper knobs as they appear in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeSettings {
  pub base_url:     String,
  pub delay_secs:   u64,
  pub timeout_secs: u64,
  pub team_limit:   Option<usize>,
  pub season:       String,
}

impl Default for ScrapeSettings {
  fn default() -> Self {
    let defaults = ScrapeConfig::default();
    Self {
      base_url:     defaults.base_url,
      delay_secs:   defaults.delay.as_secs(),
      timeout_secs: defaults.timeout.as_secs(),
      team_limit:   defaults.team_limit,
      season:       defaults.season,
    }
  }
}

impl ScrapeSettings {
  pub fn to_scrape_config(&self) -> ScrapeConfig {
    ScrapeConfig {
      base_url:   self.base_url.clone(),
      delay:      Duration::from_secs(self.delay_secs),
      timeout:    Duration::from_secs(self.timeout_secs),
      team_limit: self.team_limit,
      season:     self.season.clone(),
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Compose the full application router for `state`.
pub fn app_router<S, L>(state: ApiState<S, L>) -> Router
where
  S: StatStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
  L: LeagueSource + 'static,
  L::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(home))
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http())
}

/// `GET /` — service banner.
async fn home() -> Json<Value> {
  Json(json!({ "message": "Touchline football statistics API", "status": "active" }))
}

// ─── Integration tests ───────────────────────────────────────────────────────
