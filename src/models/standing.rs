//! StandingRow: derived per-team record, never stored.

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// One line of the standings table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
    pub bonus: u32,
}

impl StandingRow {
    /// Zeroed row for a team.
    pub fn for_team(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.team_name.clone(),
            ..Self::default()
        }
    }

    pub fn add_played(&mut self) {
        self.played += 1;
    }

    /// Record a win: +1 win, +3 points.
    pub fn add_win(&mut self) {
        self.wins += 1;
        self.points += 3;
    }

    /// Record a loss: +1 loss, +1 participation point.
    pub fn add_loss(&mut self) {
        self.losses += 1;
        self.points += 1;
    }

    /// Record a bonus award: +1 point, +1 bonus.
    pub fn add_bonus(&mut self) {
        self.points += 1;
        self.bonus += 1;
    }
}
