//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure leaves the service as
//! `{"status":"error","message":<string>}` with a non-2xx status. The
//! message is the error's `Display` output verbatim — acceptable for an
//! internal tool.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// A required credential is missing from the configuration.
  #[error("configuration error: {0}")]
  Config(String),

  /// The scrape pipeline failed.
  #[error("{0}")]
  Scrape(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The persistence layer rejected a batch.
  #[error("{0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// An upstream API rejected the call.
  #[error("{0}")]
  Upstream(String),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::Scrape(_) => StatusCode::BAD_GATEWAY,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
    };
    let body = Json(json!({ "status": "error", "message": self.to_string() }));
    (status, body).into_response()
  }
}
