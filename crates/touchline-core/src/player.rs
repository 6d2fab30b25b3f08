//! Player — one row of scraped-and-normalized season statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted player record.
///
/// `fbref_id` is the site's own identifier and is unique across the table.
/// `games_played` is always derived from `minutes` by the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
  pub id:                  i64,
  pub fbref_id:            String,
  pub name:                String,
  pub position:            String,
  pub age:                 Option<u32>,
  pub nationality:         Option<String>,
  pub team:                Option<String>,
  pub league:              Option<String>,

  // Standard counting stats.
  pub minutes:             u32,
  pub games_played:        u32,
  pub starts:              Option<u32>,
  pub goals:               Option<u32>,
  pub assists:             Option<u32>,
  pub cards_yellow:        Option<u32>,
  pub cards_red:           Option<u32>,

  // Advanced metrics.
  pub xg:                  Option<f64>,
  pub xa:                  Option<f64>,
  pub progressive_passes:  Option<u32>,
  pub progressive_carries: Option<u32>,
  pub tackles:             Option<u32>,
  pub interceptions:       Option<u32>,

  // Synthetic 0-100 ratings.
  pub overall:             u32,
  pub potential:           Option<u32>,

  pub last_updated:        DateTime<Utc>,
}

/// A scraped player record, before persistence defaults are applied.
///
/// The store substitutes [`NewPlayer::fbref_id_or_slug`] for a missing
/// `fbref_id` and 70 for a missing `overall` at insert time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlayer {
  pub fbref_id:            Option<String>,
  pub name:                String,
  pub position:            String,
  pub age:                 Option<u32>,
  pub nationality:         Option<String>,
  pub team:                Option<String>,
  pub league:              Option<String>,
  pub minutes:             Option<u32>,
  pub games_played:        Option<u32>,
  pub starts:              Option<u32>,
  pub goals:               Option<u32>,
  pub assists:             Option<u32>,
  pub cards_yellow:        Option<u32>,
  pub cards_red:           Option<u32>,
  pub xg:                  Option<f64>,
  pub xa:                  Option<f64>,
  pub progressive_passes:  Option<u32>,
  pub progressive_carries: Option<u32>,
  pub tackles:             Option<u32>,
  pub interceptions:       Option<u32>,
  pub overall:             Option<u32>,
  pub potential:           Option<u32>,
}

impl NewPlayer {
  /// The site identifier, falling back to a slug of the player name when the
  /// stats table carried none.
  pub fn fbref_id_or_slug(&self) -> String {
    match self.fbref_id.as_deref() {
      Some(id) if !id.trim().is_empty() => id.to_string(),
      _ => name_slug(&self.name),
    }
  }
}

/// `"Bukayo Saka"` → `"player_bukayo_saka"`.
pub fn name_slug(name: &str) -> String {
  format!("player_{}", name.trim().to_lowercase().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slug_lowercases_and_underscores() {
    assert_eq!(name_slug("Bukayo Saka"), "player_bukayo_saka");
    assert_eq!(name_slug("  Erling Haaland "), "player_erling_haaland");
  }

  #[test]
  fn fbref_id_preferred_over_slug() {
    let p = NewPlayer {
      fbref_id: Some("bc7dc64d".into()),
      name: "Bukayo Saka".into(),
      ..Default::default()
    };
    assert_eq!(p.fbref_id_or_slug(), "bc7dc64d");
  }

  #[test]
  fn blank_fbref_id_falls_back_to_slug() {
    let p = NewPlayer { fbref_id: Some("  ".into()), name: "Declan Rice".into(), ..Default::default() };
    assert_eq!(p.fbref_id_or_slug(), "player_declan_rice");
  }
}
