//! Tests for mapping league errors onto HTTP responses.

use actix_web::http::StatusCode;
use actix_web::ResponseError;
use league_day_web::{ApiError, BonusCategory, LeagueError};

#[test]
fn league_errors_map_to_status_codes() {
    let cases = [
        (LeagueError::MatchNotFound(3), StatusCode::NOT_FOUND),
        (LeagueError::AlreadyLocked(3), StatusCode::CONFLICT),
        (LeagueError::DuplicateTeamName, StatusCode::CONFLICT),
        (LeagueError::InsufficientTeams { found: 1 }, StatusCode::BAD_REQUEST),
        (LeagueError::InvalidCapacity(0), StatusCode::BAD_REQUEST),
        (LeagueError::EmptyLeaderName, StatusCode::BAD_REQUEST),
        (LeagueError::TooManyMembers { max: 4, got: 5 }, StatusCode::BAD_REQUEST),
        (
            LeagueError::InvalidWinner {
                match_id: 1,
                team: 7,
            },
            StatusCode::BAD_REQUEST,
        ),
        (
            LeagueError::InvalidBonusTeam {
                match_id: 1,
                category: BonusCategory::TopKills,
                team: 7,
            },
            StatusCode::BAD_REQUEST,
        ),
    ];
    for (err, status) in cases {
        assert_eq!(ApiError::from(err).status_code(), status);
    }
    assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::Lock.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn error_body_carries_the_message() {
    let resp = ApiError::from(LeagueError::AlreadyLocked(4)).error_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let err = ApiError::from(LeagueError::InvalidBonusTeam {
        match_id: 2,
        category: BonusCategory::TopKills,
        team: 9,
    });
    assert_eq!(
        err.to_string(),
        "Award team 9 for most kills must be among the two teams of match 2"
    );
}
