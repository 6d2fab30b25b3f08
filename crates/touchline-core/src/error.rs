//! Error types for `touchline-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid numeric field {field}: {value:?}")]
  Validation { field: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
