//! Packing pairings into fixed-size displayed rounds.

use crate::logic::pairing::generate_pairs;
use crate::models::{League, LeagueError, Pairing, Round, Schedule, TeamId};

/// Split pairings into consecutive rounds of at most `capacity` matches, keeping order.
///
/// Round numbers and slots are 1-based; only the last round may be short.
pub fn pack_rounds(pairs: &[Pairing], capacity: usize) -> Result<Vec<Round>, LeagueError> {
    if capacity < 1 {
        return Err(LeagueError::InvalidCapacity(capacity));
    }
    let rounds = pairs
        .chunks(capacity)
        .zip(1u32..)
        .map(|(chunk, number)| Round {
            number,
            pairings: chunk.to_vec(),
        })
        .collect();
    Ok(rounds)
}

/// Full schedule for a roster: pairings from `generate_pairs`, packed by `pack_rounds`.
pub fn generate_schedule(team_ids: &[TeamId], capacity: usize) -> Result<Vec<Round>, LeagueError> {
    if capacity < 1 {
        return Err(LeagueError::InvalidCapacity(capacity));
    }
    let pairs = generate_pairs(team_ids)?;
    pack_rounds(&pairs, capacity)
}

/// Regenerate the league's schedule from its roster (ordered by team id) and swap it in.
///
/// All validation happens before the swap; on error the previous schedule is untouched.
pub fn regenerate_schedule(league: &mut League, capacity: usize) -> Result<&Schedule, LeagueError> {
    let rounds = generate_schedule(&league.team_ids(), capacity)?;
    let schedule = league.replace_schedule(&rounds);
    log::info!(
        "Schedule {} generated: {} matches in {} rounds",
        schedule.version,
        schedule.matches.len(),
        rounds.len()
    );
    Ok(schedule)
}
