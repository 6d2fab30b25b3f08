//! League orchestrator — fetches the league page, then each squad page in
//! sequence, yielding normalized team and player records.
//!
//! The whole scrape runs synchronously within one call: no parallel
//! fetches, no background workers. A fixed delay separates successive
//! squad fetches.

use tokio::time::sleep;
use tracing::{debug, info};

use touchline_core::{
  norm,
  player::NewPlayer,
  source::{LeagueScrape, LeagueSource},
  team::NewTeam,
};

use crate::{
  Result,
  extract::{self, TeamRow},
  fetch::{PageFetcher, ScrapeConfig},
};

// Cell positions of the enrichment columns within their tables.
const XG_CELL: usize = 8;
const XA_CELL: usize = 15;

// ─── Table identifiers ───────────────────────────────────────────────────────

fn league_table_id(season: &str, comp: &str) -> String {
  format!("results{season}{comp}1_overall")
}

fn standard_table_id(comp: &str) -> String {
  format!("stats_standard_{comp}")
}

fn shooting_table_id(comp: &str) -> String {
  format!("stats_shooting_{comp}")
}

fn passing_table_id(comp: &str) -> String {
  format!("stats_passing_{comp}")
}

// ─── Squad page ──────────────────────────────────────────────────────────────

/// Extract and normalize one squad page into player records.
///
/// The standard table anchors the page; shooting and passing tables line
/// up with it by row index, so a shorter enrichment table fills only its
/// own prefix and a longer one is truncated.
pub fn squad_players(
  html:      &str,
  comp:      &str,
  team_name: &str,
  league:    &str,
) -> Result<Vec<NewPlayer>> {
  let rows = extract::player_rows(html, &standard_table_id(comp))?;

  let mut players: Vec<NewPlayer> = rows
    .into_iter()
    .map(|r| NewPlayer {
      fbref_id: r.fbref_id,
      name:     r.name,
      position: r.position,
      age:      r.age,
      team:     Some(team_name.to_string()),
      league:   Some(league.to_string()),
      minutes:  Some(r.minutes),
      ..Default::default()
    })
    .collect();

  if let Some(xg) = extract::stat_column(html, &shooting_table_id(comp), "xg", XG_CELL)? {
    for (player, value) in players.iter_mut().zip(xg) {
      player.xg = Some(value);
    }
  } else {
    debug!(team = %team_name, "shooting table absent, skipping xG enrichment");
  }

  if let Some(xa) = extract::stat_column(html, &passing_table_id(comp), "xa", XA_CELL)? {
    for (player, value) in players.iter_mut().zip(xa) {
      player.xa = Some(value);
    }
  } else {
    debug!(team = %team_name, "passing table absent, skipping xA enrichment");
  }

  for player in &mut players {
    norm::normalize(player);
  }
  Ok(players)
}

/// The squad identifier is the path segment after `"squads"`,
/// e.g. `"/en/squads/18bb7c10/Arsenal-Stats"` → `"18bb7c10"`.
fn squad_id_from_url(url: &str) -> Option<String> {
  let mut segments = url.split('/');
  segments.find(|s| *s == "squads")?;
  segments.next().filter(|s| !s.is_empty()).map(str::to_string)
}

fn team_record(row: &TeamRow) -> NewTeam {
  NewTeam {
    fbref_id: squad_id_from_url(&row.url),
    name:     row.name.clone(),
    league:   Some(row.league.clone()),
    ..Default::default()
  }
}

// ─── Scraper ─────────────────────────────────────────────────────────────────

/// Drives the fetch → extract → normalize pipeline for one league.
pub struct LeagueScraper {
  fetcher: PageFetcher,
  config:  ScrapeConfig,
}

impl LeagueScraper {
  pub fn new(config: ScrapeConfig) -> Result<Self> {
    let fetcher = PageFetcher::new(&config)?;
    Ok(Self { fetcher, config })
  }
}

impl LeagueSource for LeagueScraper {
  type Error = crate::Error;

  async fn scrape_league(&self, league_path: &str) -> Result<LeagueScrape> {
    let comp = extract::league_label(league_path);

    let html = self.fetcher.get(league_path).await?;
    let rows =
      extract::team_rows(&html, &league_table_id(&self.config.season, &comp), league_path)?;
    info!(league = %league_path, teams = rows.len(), "extracted team list");

    let take = self.config.team_limit.unwrap_or(rows.len());

    let mut teams   = Vec::new();
    let mut players = Vec::new();
    for row in rows.iter().take(take) {
      let page  = self.fetcher.get(&row.url).await?;
      let squad = squad_players(&page, &comp, &row.name, &row.league)?;
      debug!(team = %row.name, players = squad.len(), "extracted squad page");

      players.extend(squad);
      teams.push(team_record(row));

      // Fixed politeness delay between squad fetches.
      sleep(self.config.delay).await;
    }

    info!(teams = teams.len(), players = players.len(), "league scrape complete");
    Ok(LeagueScrape { teams, players })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_ids_match_the_site_layout() {
    assert_eq!(league_table_id("2023-2024", "9"), "results2023-202491_overall");
    assert_eq!(standard_table_id("9"), "stats_standard_9");
    assert_eq!(shooting_table_id("9"), "stats_shooting_9");
    assert_eq!(passing_table_id("9"), "stats_passing_9");
  }

  #[test]
  fn squad_id_is_the_segment_after_squads() {
    assert_eq!(
      squad_id_from_url("/en/squads/18bb7c10/Arsenal-Stats").as_deref(),
      Some("18bb7c10")
    );
    assert_eq!(squad_id_from_url("/en/comps/9/Premier-League-Stats"), None);
  }

  fn standard_row(id: &str, name: &str, minutes: &str) -> String {
    format!(
      r#"<tr><th data-append-csv="{id}">{name}</th>
        <td>MF</td><td>24-001</td><td></td><td>10</td><td>{minutes}</td></tr>"#
    )
  }

  fn shooting_row(xg: &str) -> String {
    let tds = "<td></td>".repeat(7);
    format!("<tr><th>p</th>{tds}<td>{xg}</td></tr>")
  }

  fn passing_row(xa: &str) -> String {
    let tds = "<td></td>".repeat(14);
    format!("<tr><th>p</th>{tds}<td>{xa}</td></tr>")
  }

  fn squad_page(standard: &[String], shooting: &[String], passing: &[String]) -> String {
    let mut html = String::from("<html><body>");
    html.push_str(&format!(
      r#"<table id="stats_standard_9"><tbody>{}</tbody></table>"#,
      standard.join("")
    ));
    if !shooting.is_empty() {
      html.push_str(&format!(
        r#"<table id="stats_shooting_9"><tbody>{}</tbody></table>"#,
        shooting.join("")
      ));
    }
    if !passing.is_empty() {
      html.push_str(&format!(
        r#"<table id="stats_passing_9"><tbody>{}</tbody></table>"#,
        passing.join("")
      ));
    }
    html.push_str("</body></html>");
    html
  }

  #[test]
  fn squad_players_are_tagged_and_normalized() {
    let html = squad_page(
      &[standard_row("aaa", "One", "1,234")],
      &[shooting_row("0.7")],
      &[passing_row("0.3")],
    );
    let players = squad_players(&html, "9", "Arsenal", "9").unwrap();

    assert_eq!(players.len(), 1);
    let p = &players[0];
    assert_eq!(p.fbref_id.as_deref(), Some("aaa"));
    assert_eq!(p.team.as_deref(), Some("Arsenal"));
    assert_eq!(p.league.as_deref(), Some("9"));
    assert_eq!(p.minutes, Some(1234));
    assert_eq!(p.games_played, Some(14));
    assert_eq!(p.xg, Some(0.7));
    assert_eq!(p.xa, Some(0.3));
  }

  #[test]
  fn enrichment_is_by_row_index_over_the_shorter_length() {
    // Three standard rows, two shooting rows: only the first two enriched.
    let html = squad_page(
      &[
        standard_row("a", "One", "90"),
        standard_row("b", "Two", "90"),
        standard_row("c", "Three", "90"),
      ],
      &[shooting_row("0.1"), shooting_row("0.2")],
      &[],
    );
    let players = squad_players(&html, "9", "T", "9").unwrap();
    assert_eq!(players[0].xg, Some(0.1));
    assert_eq!(players[1].xg, Some(0.2));
    assert_eq!(players[2].xg, None);
  }

  #[test]
  fn surplus_enrichment_rows_are_ignored() {
    // Two standard rows, three shooting rows: the third value is dropped.
    let html = squad_page(
      &[standard_row("a", "One", "90"), standard_row("b", "Two", "90")],
      &[shooting_row("0.1"), shooting_row("0.2"), shooting_row("0.9")],
      &[],
    );
    let players = squad_players(&html, "9", "T", "9").unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].xg, Some(0.1));
    assert_eq!(players[1].xg, Some(0.2));
  }

  #[test]
  fn equal_lengths_enrich_every_row() {
    let html = squad_page(
      &[standard_row("a", "One", "90"), standard_row("b", "Two", "90")],
      &[shooting_row("0.1"), shooting_row("0.2")],
      &[],
    );
    let players = squad_players(&html, "9", "T", "9").unwrap();
    assert_eq!(players[0].xg, Some(0.1));
    assert_eq!(players[1].xg, Some(0.2));
  }

  #[test]
  fn absent_enrichment_tables_are_skipped_silently() {
    let html = squad_page(&[standard_row("a", "One", "450")], &[], &[]);
    let players = squad_players(&html, "9", "T", "9").unwrap();
    assert_eq!(players[0].xg, None);
    assert_eq!(players[0].xa, None);
    assert_eq!(players[0].games_played, Some(5));
  }
}
