//! League: roster, current schedule, and the error type shared by all league operations.

use crate::models::game::{BonusCategory, Match, MatchId, Round};
use crate::models::team::{Team, TeamId, MAX_MEMBERS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during league operations. None of them leaves state half-changed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LeagueError {
    /// Fewer than two distinct teams to schedule.
    #[error("Need at least 2 teams to generate a schedule (found {found})")]
    InsufficientTeams { found: usize },
    /// Matches per round must be at least 1.
    #[error("Matches per round must be at least 1 (got {0})")]
    InvalidCapacity(usize),
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    /// The match result was already committed.
    #[error("Match {0} is locked")]
    AlreadyLocked(MatchId),
    #[error("Winner {team} must be team_a or team_b of match {match_id}")]
    InvalidWinner { match_id: MatchId, team: TeamId },
    #[error("Award team {team} for {category} must be among the two teams of match {match_id}")]
    InvalidBonusTeam {
        match_id: MatchId,
        category: BonusCategory,
        team: TeamId,
    },
    #[error("Team name must not be empty")]
    EmptyTeamName,
    #[error("Leader name must not be empty")]
    EmptyLeaderName,
    #[error("A team has at most {max} members (got {got})")]
    TooManyMembers { max: usize, got: usize },
    /// Team names are unique, case-insensitive.
    #[error("A team with this name already exists")]
    DuplicateTeamName,
}

/// The current set of match rows, replaced as a whole on regeneration.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Changes on every regeneration; lets clients notice a swapped schedule.
    pub version: Uuid,
    pub generated_at: Option<DateTime<Utc>>,
    /// Ordered by (round, slot); ids follow that order starting at 1.
    pub matches: Vec<Match>,
}

impl Schedule {
    /// Build match rows from packed rounds.
    pub fn from_rounds(rounds: &[Round]) -> Self {
        let matches = rounds
            .iter()
            .flat_map(|round| {
                round
                    .slots()
                    .map(move |(slot, pairing)| (round.number, slot, *pairing))
            })
            .zip(1..)
            .map(|((round, slot, pairing), id)| Match::new(id, round, slot, pairing))
            .collect();
        Self {
            version: Uuid::new_v4(),
            generated_at: Some(Utc::now()),
            matches,
        }
    }

    pub fn round_count(&self) -> usize {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0) as usize
    }

    /// Matches grouped by round number, each group ordered by slot.
    pub fn by_round(&self) -> BTreeMap<u32, Vec<&Match>> {
        let mut grouped: BTreeMap<u32, Vec<&Match>> = BTreeMap::new();
        for m in &self.matches {
            grouped.entry(m.round).or_default().push(m);
        }
        for group in grouped.values_mut() {
            group.sort_by_key(|m| (m.slot, m.id));
        }
        grouped
    }

    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }
}

/// Full league state: registered teams and the current schedule.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct League {
    pub teams: Vec<Team>,
    pub schedule: Schedule,
    next_team_id: TeamId,
}

impl Default for League {
    fn default() -> Self {
        Self::new()
    }
}

impl League {
    /// Empty league: no teams, empty schedule.
    pub fn new() -> Self {
        Self {
            teams: Vec::new(),
            schedule: Schedule::default(),
            next_team_id: 1,
        }
    }

    /// Register a team without members. See `add_team_with_members`.
    pub fn add_team(
        &mut self,
        team_name: impl Into<String>,
        leader_name: impl Into<String>,
    ) -> Result<TeamId, LeagueError> {
        self.add_team_with_members(team_name, leader_name, &[])
    }

    /// Register a team. Team and leader names are trimmed and must be non-empty; team names
    /// are unique (case-insensitive). Blank member names are skipped, the rest are capped
    /// at `MAX_MEMBERS`.
    pub fn add_team_with_members(
        &mut self,
        team_name: impl Into<String>,
        leader_name: impl Into<String>,
        members: &[String],
    ) -> Result<TeamId, LeagueError> {
        let team_name: String = team_name.into();
        let name = team_name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyTeamName);
        }
        let leader_name: String = leader_name.into();
        let leader = leader_name.trim();
        if leader.is_empty() {
            return Err(LeagueError::EmptyLeaderName);
        }
        let members: Vec<String> = members
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
        if members.len() > MAX_MEMBERS {
            return Err(LeagueError::TooManyMembers {
                max: MAX_MEMBERS,
                got: members.len(),
            });
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.team_name.eq_ignore_ascii_case(name));
        if is_duplicate {
            return Err(LeagueError::DuplicateTeamName);
        }
        let id = self.next_team_id;
        self.next_team_id += 1;
        self.teams
            .push(Team::new(id, name, leader).with_members(members));
        Ok(id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Team ids in ascending order (the order schedules are generated from).
    pub fn team_ids(&self) -> Vec<TeamId> {
        let mut ids: Vec<TeamId> = self.teams.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids
    }

    /// Swap in a new schedule built from `rounds`, dropping every prior match.
    ///
    /// The new schedule is fully built before the old one is replaced, so anyone holding
    /// the league lock sees either the old schedule or the new one.
    pub fn replace_schedule(&mut self, rounds: &[Round]) -> &Schedule {
        let next = Schedule::from_rounds(rounds);
        self.schedule = next;
        &self.schedule
    }
}
