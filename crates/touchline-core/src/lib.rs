//! Core domain types for Touchline.
//!
//! Defines the three entities (player, team, match), the stat normalizer,
//! and the abstractions implemented by storage backends ([`store::StatStore`])
//! and scraping frontends ([`source::LeagueSource`]). This crate performs no
//! I/O of its own.

pub mod error;
pub mod matches;
pub mod norm;
pub mod player;
pub mod source;
pub mod store;
pub mod team;

pub use error::{Error, Result};
