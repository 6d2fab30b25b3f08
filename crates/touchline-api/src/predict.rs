//! Handler for `POST /predict`.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use touchline_core::{matches::NewMatch, source::LeagueSource, store::StatStore};
use touchline_predict::{MatchContext, TeamForm};

use crate::{ApiState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct PredictBody {
  #[serde(default)]
  pub home:    TeamForm,
  #[serde(default)]
  pub away:    TeamForm,
  #[serde(default)]
  pub context: MatchContext,

  /// When both team ids are present, the prediction is recorded as a
  /// match row.
  pub home_team_id: Option<i64>,
  pub away_team_id: Option<i64>,
}

/// `POST /predict` — body: home/away feature sets plus optional context.
///
/// Returns the probability triple and a `source` tag recording whether a
/// trained model produced it or the fixed fallback did. With both team ids
/// supplied, the prediction is also persisted and `match_id` is set.
pub async fn run<S, L>(
  State(state): State<ApiState<S, L>>,
  Json(body): Json<PredictBody>,
) -> Result<Json<Value>, ApiError>
where
  S: StatStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  L: LeagueSource,
{
  let prediction = state.predictor.predict(&body.home, &body.away, &body.context);

  let mut match_id = None;
  if let (Some(home_team_id), Some(away_team_id)) = (body.home_team_id, body.away_team_id) {
    let recorded = state
      .store
      .record_match(NewMatch {
        date:          None,
        season:        None,
        home_team_id,
        away_team_id,
        home_score:    None,
        away_score:    None,
        home_xg:       Some(body.home.xg),
        away_xg:       Some(body.away.xg),
        prob_home_win: prediction.home_win,
        prob_draw:     prediction.draw,
        prob_away_win: prediction.away_win,
      })
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?;
    match_id = Some(recorded.id);
  }

  Ok(Json(json!({
    "home_win": prediction.home_win,
    "draw": prediction.draw,
    "away_win": prediction.away_win,
    "confidence": prediction.confidence,
    "source": prediction.source,
    "match_id": match_id,
  })))
}
