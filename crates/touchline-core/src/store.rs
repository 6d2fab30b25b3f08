//! The `StatStore` trait — abstraction over the relational backend.
//!
//! Implemented by storage backends (e.g. `touchline-store-sqlite`). The
//! route layer depends on this abstraction, not on any concrete backend.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use crate::{
  matches::{Match, NewMatch},
  player::{NewPlayer, Player},
  team::{NewTeam, Team},
};

/// Abstraction over a Touchline statistics store backend.
///
/// Player and team writes are batch inserts with all-or-nothing semantics:
/// either every record in the batch is durably stored or none are. There are
/// no update or delete paths for players and teams.
pub trait StatStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Players ───────────────────────────────────────────────────────────

  /// Persist a batch of normalized player records in a single transaction.
  /// Returns the number of records stored. A duplicate `fbref_id` — within
  /// the batch or against existing rows — fails the whole batch.
  fn add_players(
    &self,
    players: Vec<NewPlayer>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// List all players.
  fn list_players(
    &self,
  ) -> impl Future<Output = Result<Vec<Player>, Self::Error>> + Send + '_;

  /// Retrieve a player by site identifier. Returns `None` if not found.
  fn get_player<'a>(
    &'a self,
    fbref_id: &'a str,
  ) -> impl Future<Output = Result<Option<Player>, Self::Error>> + Send + 'a;

  // ── Teams ─────────────────────────────────────────────────────────────

  /// Persist a batch of team records in a single transaction.
  fn add_teams(
    &self,
    teams: Vec<NewTeam>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// List all teams.
  fn list_teams(
    &self,
  ) -> impl Future<Output = Result<Vec<Team>, Self::Error>> + Send + '_;

  /// Retrieve a team by site identifier. Returns `None` if not found.
  fn get_team<'a>(
    &'a self,
    fbref_id: &'a str,
  ) -> impl Future<Output = Result<Option<Team>, Self::Error>> + Send + 'a;

  // ── Matches ───────────────────────────────────────────────────────────

  /// Record a match together with its prediction probabilities.
  fn record_match(
    &self,
    input: NewMatch,
  ) -> impl Future<Output = Result<Match, Self::Error>> + Send + '_;

  /// List all recorded matches.
  fn list_matches(
    &self,
  ) -> impl Future<Output = Result<Vec<Match>, Self::Error>> + Send + '_;
}
