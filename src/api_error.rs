//! HTTP error type for the web binary.

use crate::models::LeagueError;
use crate::sheets::SheetError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    League(#[from] LeagueError),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Session error: {0}")]
    Session(String),

    #[error("lock error")]
    Lock,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::League(e) => match e {
                LeagueError::MatchNotFound(_) => StatusCode::NOT_FOUND,
                LeagueError::AlreadyLocked(_) | LeagueError::DuplicateTeamName => StatusCode::CONFLICT,
                LeagueError::InsufficientTeams { .. }
                | LeagueError::InvalidCapacity(_)
                | LeagueError::InvalidWinner { .. }
                | LeagueError::InvalidBonusTeam { .. }
                | LeagueError::EmptyTeamName
                | LeagueError::EmptyLeaderName
                | LeagueError::TooManyMembers { .. } => StatusCode::BAD_REQUEST,
            },
            ApiError::Sheet(_) | ApiError::Session(_) | ApiError::Lock => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
