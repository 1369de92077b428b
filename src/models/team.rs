//! Team data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a registered team (assigned sequentially from 1).
pub type TeamId = u32;

/// Named members a team may register besides its leader.
pub const MAX_MEMBERS: usize = 4;

/// A registered team. Read-only to the scheduling and standings logic.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub team_name: String,
    pub leader_name: String,
    /// Member names, leader excluded; at most `MAX_MEMBERS`.
    #[serde(default)]
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn new(id: TeamId, team_name: impl Into<String>, leader_name: impl Into<String>) -> Self {
        Self {
            id,
            team_name: team_name.into(),
            leader_name: leader_name.into(),
            members: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.members = members;
        self
    }
}
