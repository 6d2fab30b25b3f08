//! SQLite backend for the Touchline stat store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. Batch writes are wrapped in
//! a transaction per call, which also serializes concurrent ingestion
//! requests against the unique `fbref_id` constraint.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
