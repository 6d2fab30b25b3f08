//! Team — aggregate season statistics plus the player relationship.

use serde::{Deserialize, Serialize};

/// A persisted team record. Players reference their team by name label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
  pub id:             i64,
  pub fbref_id:       String,
  pub name:           String,
  pub league:         Option<String>,
  pub country:        Option<String>,

  // Aggregate season stats.
  pub matches_played: Option<u32>,
  pub wins:           Option<u32>,
  pub draws:          Option<u32>,
  pub losses:         Option<u32>,
  pub goals_for:      Option<u32>,
  pub goals_against:  Option<u32>,
  pub xg:             Option<f64>,
  pub xga:            Option<f64>,
  pub possession:     Option<f64>,
}

/// A scraped team record. The league table only yields identity fields;
/// aggregate stats stay unset until a richer source fills them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTeam {
  pub fbref_id:       Option<String>,
  pub name:           String,
  pub league:         Option<String>,
  pub country:        Option<String>,
  pub matches_played: Option<u32>,
  pub wins:           Option<u32>,
  pub draws:          Option<u32>,
  pub losses:         Option<u32>,
  pub goals_for:      Option<u32>,
  pub goals_against:  Option<u32>,
  pub xg:             Option<f64>,
  pub xga:            Option<f64>,
  pub possession:     Option<f64>,
}

impl NewTeam {
  /// The site identifier, falling back to a slug of the team name.
  pub fn fbref_id_or_slug(&self) -> String {
    match self.fbref_id.as_deref() {
      Some(id) if !id.trim().is_empty() => id.to_string(),
      _ => format!("team_{}", self.name.trim().to_lowercase().replace(' ', "_")),
    }
  }
}
