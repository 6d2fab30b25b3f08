//! Handler for `POST /squad/analyze` — synthetic rating summary for a
//! hand-picked squad.

use axum::Json;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Default, Deserialize)]
pub struct SquadBody {
  #[serde(default)]
  pub squad:     Vec<SquadPlayer>,
  #[serde(default = "default_formation")]
  pub formation: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SquadPlayer {
  #[serde(default)]
  pub overall: f64,
}

fn default_formation() -> String {
  "4-4-2".to_string()
}

/// `POST /squad/analyze` — body: `{"squad":[{"overall":82},...]}`
pub async fn analyze(Json(body): Json<SquadBody>) -> Json<Value> {
  let total: f64 = body.squad.iter().map(|p| p.overall).sum();
  let average = if body.squad.is_empty() { 0.0 } else { total / body.squad.len() as f64 };
  let suitability = if body.squad.len() == 11 { "Good" } else { "Incomplete" };

  Json(json!({
    "average_rating": (average * 10.0).round() / 10.0,
    "total_rating": total,
    "formation": body.formation,
    "formation_suitability": suitability,
    "strengths": ["Attack", "Creativity"],
    "weaknesses": ["Defense", "Physicality"],
  }))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn eleven_players_are_a_complete_formation() {
    let squad = (0..11).map(|_| SquadPlayer { overall: 80.0 }).collect();
    let Json(value) = analyze(Json(SquadBody { squad, formation: default_formation() })).await;

    assert_eq!(value["formation_suitability"], "Good");
    assert_eq!(value["average_rating"], 80.0);
    assert_eq!(value["total_rating"], 880.0);
  }

  #[tokio::test]
  async fn empty_squad_is_incomplete_with_zero_rating() {
    let Json(value) = analyze(Json(SquadBody::default())).await;
    assert_eq!(value["formation_suitability"], "Incomplete");
    assert_eq!(value["average_rating"], 0.0);
  }
}
