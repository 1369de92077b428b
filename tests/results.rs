//! Integration tests for committing match results.

use league_day_web::{
    commit_result, regenerate_schedule, submit_match_result, BonusCategory, Bonuses, League,
    LeagueError, Match, MatchResult, Pairing,
};
use std::sync::{Arc, RwLock};
use std::thread;

fn match_between(team_a: u32, team_b: u32) -> Match {
    Match::new(1, 1, 1, Pairing::new(team_a, team_b))
}

fn scheduled_league(teams: usize) -> League {
    let mut league = League::new();
    for i in 0..teams {
        league.add_team(format!("Team {i}"), format!("Leader {i}")).unwrap();
    }
    regenerate_schedule(&mut league, 2).unwrap();
    league
}

#[test]
fn commit_locks_winner_and_bonuses_together() {
    let matches = vec![match_between(5, 9)];
    let result = MatchResult::new(9)
        .with_bonus(BonusCategory::TopKills, 5)
        .with_bonus(BonusCategory::TopAssists, 9);

    let updated = commit_result(&matches, 1, &result).unwrap();
    assert!(updated.locked);
    assert_eq!(updated.winner, Some(9));
    assert_eq!(
        updated.bonuses,
        Bonuses {
            top_score: None,
            top_kills: Some(5),
            top_assists: Some(9),
        }
    );
    assert_eq!((updated.round, updated.slot), (1, 1));
    // pure: the input record is untouched
    assert!(!matches[0].locked);
}

#[test]
fn unknown_match_is_not_found() {
    let matches = vec![match_between(5, 9)];
    assert_eq!(
        commit_result(&matches, 42, &MatchResult::new(5)),
        Err(LeagueError::MatchNotFound(42))
    );
}

#[test]
fn winner_must_be_a_participant() {
    let mut league = League::new();
    league.schedule.matches = vec![match_between(5, 9)];
    let before = league.schedule.matches.clone();

    assert_eq!(
        submit_match_result(&mut league, 1, &MatchResult::new(7)),
        Err(LeagueError::InvalidWinner {
            match_id: 1,
            team: 7
        })
    );
    assert_eq!(league.schedule.matches, before);
}

#[test]
fn bonus_team_must_be_a_participant() {
    let mut league = League::new();
    league.schedule.matches = vec![match_between(5, 9)];
    let result = MatchResult::new(5)
        .with_bonus(BonusCategory::TopScore, 5)
        .with_bonus(BonusCategory::TopAssists, 3);

    assert_eq!(
        submit_match_result(&mut league, 1, &result),
        Err(LeagueError::InvalidBonusTeam {
            match_id: 1,
            category: BonusCategory::TopAssists,
            team: 3
        })
    );
    let m = &league.schedule.matches[0];
    assert!(!m.locked);
    assert_eq!(m.winner, None);
    assert_eq!(m.bonuses, Bonuses::default());
}

#[test]
fn bye_side_cannot_win() {
    let mut game = match_between(5, 9);
    game.team_b = None;
    assert!(matches!(
        commit_result(&[game], 1, &MatchResult::new(9)),
        Err(LeagueError::InvalidWinner { .. })
    ));
}

#[test]
fn second_commit_is_rejected_and_first_result_stays() {
    let mut league = scheduled_league(4);
    let game = league.schedule.matches[2].clone();
    let (a, b) = (game.team_a.unwrap(), game.team_b.unwrap());

    let first = MatchResult::new(a).with_bonus(BonusCategory::TopScore, a);
    submit_match_result(&mut league, game.id, &first).unwrap();

    let second = MatchResult::new(b).with_bonus(BonusCategory::TopKills, b);
    assert_eq!(
        submit_match_result(&mut league, game.id, &second),
        Err(LeagueError::AlreadyLocked(game.id))
    );

    let stored = league.schedule.get(game.id).unwrap();
    assert!(stored.locked);
    assert_eq!(stored.winner, Some(a));
    assert_eq!(stored.bonuses.get(BonusCategory::TopScore), Some(a));
    assert_eq!(stored.bonuses.get(BonusCategory::TopKills), None);
}

#[test]
fn locked_check_comes_before_winner_check() {
    let mut game = match_between(5, 9);
    game.locked = true;
    game.winner = Some(5);
    assert_eq!(
        commit_result(&[game], 1, &MatchResult::new(7)),
        Err(LeagueError::AlreadyLocked(1))
    );
}

#[test]
fn commit_leaves_other_matches_alone() {
    let mut league = scheduled_league(4);
    let target = league.schedule.matches[0].clone();
    submit_match_result(&mut league, target.id, &MatchResult::new(target.team_b.unwrap())).unwrap();

    assert!(league.schedule.matches[0].locked);
    assert!(league.schedule.matches[1..].iter().all(|m| !m.locked));
}

#[test]
fn concurrent_commits_on_one_match_have_a_single_winner() {
    let league = Arc::new(RwLock::new(scheduled_league(4)));
    let target = league.read().unwrap().schedule.matches[0].clone();
    let sides = [target.team_a.unwrap(), target.team_b.unwrap()];

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let league = Arc::clone(&league);
            let winner = sides[i % 2];
            thread::spawn(move || {
                let mut g = league.write().unwrap();
                submit_match_result(&mut g, target.id, &MatchResult::new(winner))
            })
        })
        .collect();
    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes: Vec<&Match> = outcomes.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(successes.len(), 1);
    assert!(outcomes
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == LeagueError::AlreadyLocked(target.id)));

    let stored = league.read().unwrap().schedule.get(target.id).cloned().unwrap();
    assert_eq!(stored.winner, successes[0].winner);
}
