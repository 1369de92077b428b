//! League day web app: library with models and business logic.

pub mod api_error;
pub mod config;
pub mod logic;
pub mod models;
pub mod sheets;

pub use api_error::ApiError;
pub use config::Config;
pub use logic::{
    commit_result, compute_standings, generate_pairs, generate_schedule, pack_rounds,
    regenerate_schedule, submit_match_result, validate_result,
};
pub use models::{
    BonusCategory, Bonuses, League, LeagueError, Match, MatchId, MatchResult, Pairing, Round,
    Schedule, StandingRow, Team, TeamId, MAX_MEMBERS,
};
