use serde::Serialize;
use thiserror::Error;

use crate::models::PlayerId;
use crate::session::clock::ClockState;

/// Coarse rejection taxonomy for callers that only route failures
/// (e.g. the JSON surface). Every [`SessionError`] maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    InvalidTransition,
}

/// Command rejection. All errors are local and non-fatal: the failing
/// command leaves session state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("required field is empty: {field}")]
    EmptyField { field: &'static str },

    #[error("roster is full: {max} players maximum")]
    RosterFull { max: usize },

    #[error("player not found: {id}")]
    PlayerNotFound { id: PlayerId },

    #[error("player {id} is not on the field")]
    PlayerNotOnField { id: PlayerId },

    #[error("player {id} is already on the field")]
    PlayerAlreadyOnField { id: PlayerId },

    #[error("invalid clock transition: {from:?} -> {to:?}")]
    InvalidTransition { from: ClockState, to: ClockState },

    #[error("summary is only available after the match is finished")]
    SummaryNotReady,
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::EmptyField { .. } | SessionError::RosterFull { .. } => {
                ErrorKind::Validation
            }
            SessionError::PlayerNotFound { .. } => ErrorKind::NotFound,
            SessionError::PlayerNotOnField { .. }
            | SessionError::PlayerAlreadyOnField { .. }
            | SessionError::InvalidTransition { .. }
            | SessionError::SummaryNotReady => ErrorKind::InvalidTransition,
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
