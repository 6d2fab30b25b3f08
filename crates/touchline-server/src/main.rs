//! Touchline server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, and serves the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use touchline_api::{ApiState, fd::FootballDataClient};
use touchline_predict::MatchPredictor;
use touchline_scrape::LeagueScraper;
use touchline_server::{ServerConfig, app_router};
use touchline_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Touchline football statistics server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("TOUCHLINE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open SQLite store.
  let store = SqliteStore::open(&server_cfg.db_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.db_path))?;

  // The scraper, predictor, and external API client are constructed here
  // and injected through application state.
  let scraper = LeagueScraper::new(server_cfg.scrape.to_scrape_config())
    .context("failed to build scraper")?;
  let football_data = FootballDataClient::new(server_cfg.football_data_token.clone())
    .context("failed to build football-data client")?;

  let state = ApiState {
    store:         Arc::new(store),
    source:        Arc::new(scraper),
    predictor:     Arc::new(MatchPredictor::untrained()),
    football_data: Arc::new(football_data),
  };

  let app = app_router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
