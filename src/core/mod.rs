//! Core engine types: ids, status, actions, configuration, errors, RNG.
//!
//! Everything here is independent of the card catalog's contents and of
//! how sessions are stored or reached.

pub mod action;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod status;

pub use action::{Action, ActionRecord};
pub use config::SessionConfig;
pub use error::{ActionError, ConfigError, ServiceError, SessionError};
pub use ids::{PlayerId, PlayerOrdinal, SessionId};
pub use rng::{shuffle, ConstantSource, GameRng, GameRngState, RandomSource, DIE_FACES};
pub use status::GameStatus;
