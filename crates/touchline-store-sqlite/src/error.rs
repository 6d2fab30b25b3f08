//! Error type for `touchline-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The batch carried a `fbref_id` already present in the table (or twice
  /// within the batch). Nothing from the batch is stored.
  #[error("duplicate player id: {0}")]
  DuplicatePlayer(String),

  #[error("duplicate team id: {0}")]
  DuplicateTeam(String),

  /// A record in the batch failed to insert; the whole batch is rolled
  /// back.
  #[error("failed to ingest record {fbref_id}: {source}")]
  Ingest {
    fbref_id: String,
    #[source]
    source:   rusqlite::Error,
  },

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
