//! Error types.
//!
//! Business-rule violations are ordinary values, never panics. Every
//! operation that can be rejected returns one of these and leaves the
//! session exactly as it was.

use thiserror::Error;

use super::ids::{PlayerId, SessionId};
use super::status::GameStatus;
use crate::cards::StoreKind;

/// Rejection of a gameplay action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("game is not active (status: {0})")]
    NotActive(GameStatus),

    #[error("session has no players")]
    NoPlayers,

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("slot {index} is out of range ({len} visible)")]
    InvalidSlot { index: usize, len: usize },

    #[error("slot {0} is empty")]
    EmptySlot(usize),

    #[error("owned store index {index} is out of range ({len} owned)")]
    InvalidStoreIndex { index: usize, len: usize },

    #[error("discard index {index} is out of range ({len} in discard pile)")]
    InvalidDiscardIndex { index: usize, len: usize },

    #[error("{0} is already built")]
    AlreadyBuilt(StoreKind),

    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("store capacity of {0} reached")]
    StoreCapacityReached(usize),

    #[error("unknown dish type `{0}`")]
    UnknownDish(String),
}

/// Rejection of a roster or lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("player {0} has already joined")]
    DuplicatePlayer(PlayerId),

    #[error("session is full ({0} players)")]
    RosterFull(usize),

    #[error("session is not waiting for players (status: {0})")]
    NotWaiting(GameStatus),

    #[error("session needs exactly {required} players, has {joined}")]
    RosterIncomplete { required: usize, joined: usize },

    #[error("player {0} is not in this session")]
    UnknownPlayer(PlayerId),

    #[error("session has ended")]
    Ended,
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid session config: {0}")]
    Invalid(String),
}

/// Error surfaced at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    #[error("player count must be between {min} and {max}, got {got}")]
    InvalidPlayerCount { min: usize, max: usize, got: usize },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ActionError::InsufficientFunds { needed: 6, available: 2 };
        assert_eq!(err.to_string(), "insufficient funds: need 6, have 2");

        let err = ActionError::AlreadyBuilt(StoreKind::DogPark);
        assert_eq!(err.to_string(), "Dog Park is already built");

        let err = SessionError::RosterIncomplete { required: 3, joined: 2 };
        assert_eq!(err.to_string(), "session needs exactly 3 players, has 2");
    }

    #[test]
    fn test_service_error_wraps_transparently() {
        let err: ServiceError = ActionError::NoPlayers.into();
        assert_eq!(err.to_string(), "session has no players");

        let err: ServiceError = SessionError::Ended.into();
        assert!(matches!(err, ServiceError::Session(SessionError::Ended)));
    }
}
