//! Match, pairing, round, and bonus-category types.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Identifier for a scheduled match (numbered from 1 on every regeneration).
pub type MatchId = u32;

/// Per-match award worth one extra point to the team it names.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusCategory {
    TopScore,
    TopKills,
    TopAssists,
}

impl BonusCategory {
    pub const ALL: [BonusCategory; 3] = [
        BonusCategory::TopScore,
        BonusCategory::TopKills,
        BonusCategory::TopAssists,
    ];
}

impl std::fmt::Display for BonusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BonusCategory::TopScore => "most score",
            BonusCategory::TopKills => "most kills",
            BonusCategory::TopAssists => "most assists",
        };
        f.write_str(label)
    }
}

/// Bonus awards of one match. Each category is independently optional.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bonuses {
    pub top_score: Option<TeamId>,
    pub top_kills: Option<TeamId>,
    pub top_assists: Option<TeamId>,
}

impl Bonuses {
    pub fn get(&self, category: BonusCategory) -> Option<TeamId> {
        match category {
            BonusCategory::TopScore => self.top_score,
            BonusCategory::TopKills => self.top_kills,
            BonusCategory::TopAssists => self.top_assists,
        }
    }

    pub fn set(&mut self, category: BonusCategory, team: Option<TeamId>) {
        let slot = match category {
            BonusCategory::TopScore => &mut self.top_score,
            BonusCategory::TopKills => &mut self.top_kills,
            BonusCategory::TopAssists => &mut self.top_assists,
        };
        *slot = team;
    }

    /// Builder-style `set`.
    pub fn with(mut self, category: BonusCategory, team: TeamId) -> Self {
        self.set(category, Some(team));
        self
    }

    /// Every category with its (possibly empty) award, in `BonusCategory::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (BonusCategory, Option<TeamId>)> + '_ {
        BonusCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Only the categories that were actually awarded.
    pub fn awarded(&self) -> impl Iterator<Item = (BonusCategory, TeamId)> + '_ {
        self.iter().filter_map(|(c, t)| t.map(|t| (c, t)))
    }
}

/// An unordered pairing of two distinct teams, in generation order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub team_a: TeamId,
    pub team_b: TeamId,
}

impl Pairing {
    pub fn new(team_a: TeamId, team_b: TeamId) -> Self {
        Self { team_a, team_b }
    }

    /// The pair with the smaller id first, for comparing pairings regardless of side.
    pub fn normalized(&self) -> (TeamId, TeamId) {
        if self.team_a <= self.team_b {
            (self.team_a, self.team_b)
        } else {
            (self.team_b, self.team_a)
        }
    }
}

/// One displayed round: up to `capacity` pairings. Slot numbers are position + 1.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number.
    pub number: u32,
    pub pairings: Vec<Pairing>,
}

impl Round {
    /// `(slot, pairing)` with 1-based slots.
    pub fn slots(&self) -> impl Iterator<Item = (u32, &Pairing)> + '_ {
        (1u32..).zip(self.pairings.iter())
    }
}

/// A proposed result: mandatory winner plus optional bonus awards.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: TeamId,
    #[serde(default)]
    pub bonuses: Bonuses,
}

impl MatchResult {
    pub fn new(winner: TeamId) -> Self {
        Self {
            winner,
            bonuses: Bonuses::default(),
        }
    }

    pub fn with_bonus(mut self, category: BonusCategory, team: TeamId) -> Self {
        self.bonuses.set(category, Some(team));
        self
    }
}

/// A scheduled match row. Either side may be absent (e.g. the team was removed).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub round: u32,
    pub slot: u32,
    pub team_a: Option<TeamId>,
    pub team_b: Option<TeamId>,
    /// None until a result is committed.
    pub winner: Option<TeamId>,
    pub bonuses: Bonuses,
    /// Set together with the result; once true the result never changes.
    pub locked: bool,
}

impl Match {
    pub fn new(id: MatchId, round: u32, slot: u32, pairing: Pairing) -> Self {
        Self {
            id,
            round,
            slot,
            team_a: Some(pairing.team_a),
            team_b: Some(pairing.team_b),
            winner: None,
            bonuses: Bonuses::default(),
            locked: false,
        }
    }

    /// True if `team` is one of the two sides of this match.
    pub fn is_participant(&self, team: TeamId) -> bool {
        self.team_a == Some(team) || self.team_b == Some(team)
    }
}
