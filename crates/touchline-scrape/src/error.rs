//! Error types for `touchline-scrape`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Transport-level failure (connect, timeout, body read).
  #[error("fetch failed for {url}: {source}")]
  Fetch {
    url:    String,
    #[source]
    source: reqwest::Error,
  },

  #[error("unexpected status {status} for {url}")]
  Status { url: String, status: reqwest::StatusCode },

  /// An anchor table was absent from the page. Optional enrichment tables
  /// are skipped instead of raising this.
  #[error("table not found: {0}")]
  TableMissing(String),

  #[error("invalid selector: {0}")]
  Selector(String),

  #[error("validation: {0}")]
  Validation(#[from] touchline_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
