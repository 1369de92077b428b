//! CSV sheets: roster import and standings export.

use crate::models::{League, LeagueError, StandingRow, TeamId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Row {row}: {source}")]
    Team { row: usize, source: LeagueError },
}

/// One roster line: `team_name,leader_name[,member_1..member_4]`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct RosterEntry {
    pub team_name: String,
    pub leader_name: String,
    #[serde(default)]
    pub member_1: Option<String>,
    #[serde(default)]
    pub member_2: Option<String>,
    #[serde(default)]
    pub member_3: Option<String>,
    #[serde(default)]
    pub member_4: Option<String>,
}

impl RosterEntry {
    /// Filled-in member columns, in column order.
    pub fn members(&self) -> Vec<String> {
        [&self.member_1, &self.member_2, &self.member_3, &self.member_4]
            .into_iter()
            .flatten()
            .filter(|m| !m.trim().is_empty())
            .cloned()
            .collect()
    }
}

/// Parse a roster sheet with a `team_name,leader_name` header; member columns are optional.
pub fn read_roster<R: std::io::Read>(reader: R) -> Result<Vec<RosterEntry>, SheetError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = Vec::new();
    for record in rdr.deserialize() {
        entries.push(record?);
    }
    Ok(entries)
}

/// Register every roster entry, or none of them.
///
/// Rows are applied to a copy of the league, which replaces `league` only once every row
/// is accepted. The first rejected row is reported with its 1-based position.
pub fn import_roster(league: &mut League, entries: &[RosterEntry]) -> Result<Vec<TeamId>, SheetError> {
    let mut staged = league.clone();
    let ids = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            staged
                .add_team_with_members(e.team_name.as_str(), e.leader_name.as_str(), &e.members())
                .map_err(|source| SheetError::Team { row: i + 1, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    *league = staged;
    Ok(ids)
}

#[derive(Serialize)]
struct StandingLine<'a> {
    rank: usize,
    team_id: TeamId,
    team_name: &'a str,
    points: u32,
    wins: u32,
    losses: u32,
    played: u32,
    bonus: u32,
}

const STANDINGS_HEADER: [&str; 8] = [
    "rank", "team_id", "team_name", "points", "wins", "losses", "played", "bonus",
];

/// Standings as CSV, ranks starting at 1 in table order. The header is always written.
pub fn standings_csv(rows: &[StandingRow]) -> Result<String, SheetError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(STANDINGS_HEADER)?;
    for (i, row) in rows.iter().enumerate() {
        wtr.serialize(StandingLine {
            rank: i + 1,
            team_id: row.team_id,
            team_name: &row.team_name,
            points: row.points,
            wins: row.wins,
            losses: row.losses,
            played: row.played,
            bonus: row.bonus,
        })?;
    }
    let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
