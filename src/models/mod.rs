//! Data structures for the league: teams, matches, schedule, standings.

mod game;
mod league;
mod standing;
mod team;

pub use game::{BonusCategory, Bonuses, Match, MatchId, MatchResult, Pairing, Round};
pub use league::{League, LeagueError, Schedule};
pub use standing::StandingRow;
pub use team::{Team, TeamId, MAX_MEMBERS};
