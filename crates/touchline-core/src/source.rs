//! The `LeagueSource` trait — abstraction over the scraping frontend.
//!
//! Implemented by `touchline-scrape`; the route layer depends on this seam
//! so ingestion can be exercised without network access.

use std::future::Future;

use crate::{player::NewPlayer, team::NewTeam};

/// The result of scraping one league: the team list plus every visited
/// squad's normalized player records.
#[derive(Debug, Clone, Default)]
pub struct LeagueScrape {
  pub teams:   Vec<NewTeam>,
  pub players: Vec<NewPlayer>,
}

/// Abstraction over a league statistics source.
pub trait LeagueSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch and extract one league: the team list page, then each team's
  /// squad page in sequence. Runs to completion before returning; there is
  /// no incremental delivery.
  fn scrape_league<'a>(
    &'a self,
    league_path: &'a str,
  ) -> impl Future<Output = Result<LeagueScrape, Self::Error>> + Send + 'a;
}
