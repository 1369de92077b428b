//! Standings: recomputed from scratch from the full match set on every call.

use crate::models::{Match, StandingRow, Team, TeamId};
use std::collections::HashMap;

/// Build the ranked standings table.
///
/// Only matches with a winner count. Both sides get +1 played; the winner +1 win and
/// +3 points, the loser +1 loss and +1 point. Each awarded bonus category gives its team
/// +1 point and +1 bonus. Matches with a side missing from `teams` are skipped, as are
/// bonus awards naming an unknown team.
///
/// Order: points desc, wins desc, team id asc.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = teams.iter().map(StandingRow::for_team).collect();
    let index: HashMap<TeamId, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.team_id, i))
        .collect();

    for game in matches {
        let Some(winner) = game.winner else {
            continue;
        };
        let (Some(a), Some(b)) = (
            game.team_a.and_then(|id| index.get(&id).copied()),
            game.team_b.and_then(|id| index.get(&id).copied()),
        ) else {
            continue;
        };

        rows[a].add_played();
        rows[b].add_played();
        if game.team_a == Some(winner) {
            rows[a].add_win();
            rows[b].add_loss();
        } else if game.team_b == Some(winner) {
            rows[b].add_win();
            rows[a].add_loss();
        }

        for (_, team) in game.bonuses.awarded() {
            if let Some(&i) = index.get(&team) {
                rows[i].add_bonus();
            }
        }
    }

    rows.sort_by(|x, y| {
        y.points
            .cmp(&x.points)
            .then_with(|| y.wins.cmp(&x.wins))
            .then_with(|| x.team_id.cmp(&y.team_id))
    });
    rows
}
