//! Round-robin pairing by the circle method.

use crate::models::{LeagueError, Pairing, TeamId};

/// Generate every pairing of the given teams exactly once (circle method).
///
/// 1. Drop repeated ids (first occurrence wins) and require at least 2 teams.
/// 2. If the count is odd, append a bye placeholder so the working list is even (`n`).
/// 3. For `n - 1` iterations: pair element `i` with `n - 1 - i` for `i < n / 2`,
///    skipping any pair that touches the bye, then rotate everything but the
///    first element one step to the right.
///
/// The output order depends only on the input order; there is no randomness.
pub fn generate_pairs(team_ids: &[TeamId]) -> Result<Vec<Pairing>, LeagueError> {
    let mut working: Vec<Option<TeamId>> = Vec::with_capacity(team_ids.len() + 1);
    for &id in team_ids {
        if !working.contains(&Some(id)) {
            working.push(Some(id));
        }
    }

    let teams = working.len();
    if teams < 2 {
        return Err(LeagueError::InsufficientTeams { found: teams });
    }
    if teams % 2 == 1 {
        working.push(None);
    }

    let n = working.len();
    let mut pairs = Vec::with_capacity(teams * (teams - 1) / 2);
    for _ in 0..n - 1 {
        for i in 0..n / 2 {
            if let (Some(a), Some(b)) = (working[i], working[n - 1 - i]) {
                pairs.push(Pairing::new(a, b));
            }
        }
        working[1..].rotate_right(1);
    }

    log::debug!("Generated {} pairings for {} teams", pairs.len(), teams);
    Ok(pairs)
}
