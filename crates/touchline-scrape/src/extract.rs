//! Table extractor — locates known stats tables in raw markup and yields
//! their body rows as typed records.
//!
//! Extraction rules mirror the site's table layout and must stay stable:
//! a team row is one whose first hyperlink targets a squad page; a player
//! row qualifies only with more than 5 cells; advanced-stat columns line
//! up with the standard table by row index.

use scraper::{ElementRef, Html, Selector};

use touchline_core::norm;

use crate::{Error, Result};

// ─── Row records ─────────────────────────────────────────────────────────────

/// One row of the league results table.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
  pub name:   String,
  /// Site-relative squad page path.
  pub url:    String,
  pub league: String,
}

/// One qualifying row of the standard player stats table.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
  pub fbref_id: Option<String>,
  pub name:     String,
  pub position: String,
  pub age:      Option<u32>,
  pub minutes:  u32,
}

// ─── Selector helpers ────────────────────────────────────────────────────────

fn sel(css: &'static str) -> Result<Selector> {
  Selector::parse(css).map_err(|e| Error::Selector(e.to_string()))
}

fn find_table<'a>(doc: &'a Html, table_id: &str) -> Result<Option<ElementRef<'a>>> {
  let tables = sel("table")?;
  Ok(doc.select(&tables).find(|t| t.value().attr("id") == Some(table_id)))
}

fn cell_text(cell: ElementRef<'_>) -> String {
  cell.text().collect::<String>().trim().to_string()
}

// ─── Teams ───────────────────────────────────────────────────────────────────

/// The league label is the second-to-last path segment of the league URL,
/// e.g. `"/en/comps/9/Premier-League-Stats"` → `"9"`.
pub fn league_label(league_path: &str) -> String {
  let segments: Vec<&str> = league_path.split('/').collect();
  if segments.len() >= 2 {
    segments[segments.len() - 2].to_string()
  } else {
    String::new()
  }
}

/// Extract the team list from a league page.
///
/// A body row is a team iff its first hyperlink targets a squad page
/// (`href` contains `"squads"`); the team name is that link's text. The
/// results table is the anchor for the league page, so its absence is an
/// error.
pub fn team_rows(html: &str, table_id: &str, league_path: &str) -> Result<Vec<TeamRow>> {
  let doc = Html::parse_document(html);
  let table = find_table(&doc, table_id)?
    .ok_or_else(|| Error::TableMissing(table_id.to_string()))?;

  let row_sel  = sel("tbody tr")?;
  let link_sel = sel("a[href]")?;
  let league   = league_label(league_path);

  let mut teams = Vec::new();
  for row in table.select(&row_sel) {
    let Some(link) = row.select(&link_sel).next() else { continue };
    let Some(href) = link.value().attr("href") else { continue };
    if !href.contains("squads") {
      continue;
    }
    teams.push(TeamRow {
      name:   cell_text(link),
      url:    href.to_string(),
      league: league.clone(),
    });
  }
  Ok(teams)
}

// ─── Players ─────────────────────────────────────────────────────────────────

/// Extract qualifying player rows from the standard stats table.
///
/// The standard table anchors the squad page, so its absence is an error.
/// Positional fields: id from `data-append-csv` on cell 0, name from
/// cell 0, position from cell 1, age from cell 2, minutes from cell 5.
pub fn player_rows(html: &str, table_id: &str) -> Result<Vec<PlayerRow>> {
  let doc = Html::parse_document(html);
  let table = find_table(&doc, table_id)?
    .ok_or_else(|| Error::TableMissing(table_id.to_string()))?;

  let row_sel  = sel("tbody tr")?;
  let cell_sel = sel("th, td")?;

  let mut players = Vec::new();
  for row in table.select(&row_sel) {
    let cells: Vec<ElementRef<'_>> = row.select(&cell_sel).collect();
    // Header and spacer rows carry 5 cells or fewer.
    if cells.len() <= 5 {
      continue;
    }

    players.push(PlayerRow {
      fbref_id: cells[0].value().attr("data-append-csv").map(str::to_string),
      name:     cell_text(cells[0]),
      position: cell_text(cells[1]),
      age:      norm::parse_age("age", &cell_text(cells[2]))?,
      minutes:  norm::parse_count("minutes", &cell_text(cells[5]))?,
    });
  }
  Ok(players)
}

// ─── Advanced stats ──────────────────────────────────────────────────────────

/// Extract one numeric column from a stats table, one value per body row in
/// document order.
///
/// Returns `None` when the table is absent — enrichment tables are
/// optional. Blank and missing cells read as 0.0; malformed numerics are a
/// validation error.
pub fn stat_column(
  html:     &str,
  table_id: &str,
  field:    &'static str,
  cell:     usize,
) -> Result<Option<Vec<f64>>> {
  let doc = Html::parse_document(html);
  let Some(table) = find_table(&doc, table_id)? else {
    return Ok(None);
  };

  let row_sel  = sel("tbody tr")?;
  let cell_sel = sel("th, td")?;

  let mut values = Vec::new();
  for row in table.select(&row_sel) {
    let text = row.select(&cell_sel).nth(cell).map(cell_text).unwrap_or_default();
    values.push(norm::parse_metric(field, &text)?);
  }
  Ok(Some(values))
}
