//! Match result commit: Unplayed -> Locked, exactly once per match.

use crate::models::{League, LeagueError, Match, MatchId, MatchResult};

/// Check a proposed result against a match without changing anything.
///
/// Order of checks: lock flag, winner, then each bonus category in `BonusCategory::ALL` order.
pub fn validate_result(game: &Match, result: &MatchResult) -> Result<(), LeagueError> {
    if game.locked {
        return Err(LeagueError::AlreadyLocked(game.id));
    }
    if !game.is_participant(result.winner) {
        return Err(LeagueError::InvalidWinner {
            match_id: game.id,
            team: result.winner,
        });
    }
    for (category, team) in result.bonuses.awarded() {
        if !game.is_participant(team) {
            return Err(LeagueError::InvalidBonusTeam {
                match_id: game.id,
                category,
                team,
            });
        }
    }
    Ok(())
}

/// Validate `result` for match `match_id` and return the locked match record.
///
/// Pure: the caller persists the returned record. Winner, all three bonus fields,
/// and the lock flag are set together in the returned value.
pub fn commit_result(
    matches: &[Match],
    match_id: MatchId,
    result: &MatchResult,
) -> Result<Match, LeagueError> {
    let game = matches
        .iter()
        .find(|m| m.id == match_id)
        .ok_or(LeagueError::MatchNotFound(match_id))?;
    validate_result(game, result)?;
    Ok(Match {
        winner: Some(result.winner),
        bonuses: result.bonuses,
        locked: true,
        ..game.clone()
    })
}

/// Commit a result into the league's current schedule.
///
/// Takes `&mut League`, so under the host's write lock the locked-check and the write are
/// one step: of two submissions for the same match, the second sees `AlreadyLocked`.
pub fn submit_match_result(
    league: &mut League,
    match_id: MatchId,
    result: &MatchResult,
) -> Result<Match, LeagueError> {
    let updated = match commit_result(&league.schedule.matches, match_id, result) {
        Ok(m) => m,
        Err(e) => {
            log::warn!("Rejected result for match {}: {}", match_id, e);
            return Err(e);
        }
    };
    if let Some(slot) = league
        .schedule
        .matches
        .iter_mut()
        .find(|m| m.id == match_id)
    {
        *slot = updated.clone();
    }
    log::info!(
        "Match {} locked: winner {} (round {}, slot {})",
        updated.id,
        result.winner,
        updated.round,
        updated.slot
    );
    Ok(updated)
}
