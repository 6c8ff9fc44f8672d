//! Transport-facing entry points.
//!
//! `GameService` is what a request router or socket handler calls. It
//! resolves sessions through the shared `SessionRegistry`, locks one
//! session per call, and answers with the `Broadcast` the transport should
//! fan out to the session's connected parties.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::registry::SessionRegistry;
use super::view::{SessionView, WaitingRoomView};
use crate::cards::DishKind;
use crate::core::action::Action;
use crate::core::config::SessionConfig;
use crate::core::error::{ActionError, ConfigError, ServiceError, SessionError};
use crate::core::ids::{PlayerId, PlayerOrdinal, SessionId};
use crate::core::status::GameStatus;

/// A gameplay event received from a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    #[serde(rename_all = "camelCase")]
    BuyDish {
        session_id: SessionId,
        player_id: PlayerId,
        /// Dish wire id, e.g. `"level-2"`.
        dish_type: String,
    },
    #[serde(rename_all = "camelCase")]
    RemoveDish {
        session_id: SessionId,
        player_id: PlayerId,
        discard_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    BuyStore {
        session_id: SessionId,
        player_id: PlayerId,
        slot_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    BuildStore {
        session_id: SessionId,
        player_id: PlayerId,
        owned_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    HostVisitor {
        session_id: SessionId,
        player_id: PlayerId,
        slot_index: usize,
    },
}

impl GameEvent {
    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        match self {
            GameEvent::BuyDish { session_id, .. }
            | GameEvent::RemoveDish { session_id, .. }
            | GameEvent::BuyStore { session_id, .. }
            | GameEvent::BuildStore { session_id, .. }
            | GameEvent::HostVisitor { session_id, .. } => session_id,
        }
    }

    #[must_use]
    pub fn player_id(&self) -> &PlayerId {
        match self {
            GameEvent::BuyDish { player_id, .. }
            | GameEvent::RemoveDish { player_id, .. }
            | GameEvent::BuyStore { player_id, .. }
            | GameEvent::BuildStore { player_id, .. }
            | GameEvent::HostVisitor { player_id, .. } => player_id,
        }
    }

    /// The engine action this event asks for.
    pub fn to_action(&self) -> Result<Action, ActionError> {
        Ok(match self {
            GameEvent::BuyDish { dish_type, .. } => Action::BuyDish {
                dish: DishKind::from_id(dish_type)
                    .ok_or_else(|| ActionError::UnknownDish(dish_type.clone()))?,
            },
            GameEvent::RemoveDish { discard_index, .. } => Action::RemoveDish {
                discard_index: *discard_index,
            },
            GameEvent::BuyStore { slot_index, .. } => Action::BuyStore {
                slot_index: *slot_index,
            },
            GameEvent::BuildStore { owned_index, .. } => Action::BuildStore {
                owned_index: *owned_index,
            },
            GameEvent::HostVisitor { slot_index, .. } => Action::HostVisitor {
                slot_index: *slot_index,
            },
        })
    }
}

/// State pushed to every connected party of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum Broadcast {
    WaitingRoomUpdate(WaitingRoomView),
    GameUpdate(SessionView),
}

/// Answer to a successful join.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinReceipt {
    pub player_id: PlayerId,
    pub ordinal: PlayerOrdinal,
    pub name: String,
    pub required_players: usize,
}

/// Session lifecycle and gameplay over a shared registry.
#[derive(Clone, Debug)]
pub struct GameService {
    registry: Arc<SessionRegistry>,
    config: SessionConfig,
}

impl GameService {
    /// Service with the standard rules.
    #[must_use]
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self {
            registry,
            config: SessionConfig::default(),
        }
    }

    /// Service whose new sessions use `config`.
    pub fn with_config(
        registry: Arc<SessionRegistry>,
        config: SessionConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// Create a waiting session for `required_players` players.
    pub fn create_game(&self, required_players: usize) -> Result<SessionId, ServiceError> {
        if !self.config.allows_player_count(required_players) {
            return Err(ServiceError::InvalidPlayerCount {
                min: self.config.min_players,
                max: self.config.max_players,
                got: required_players,
            });
        }
        let (id, _) = self.registry.create(required_players, self.config.clone());
        Ok(id)
    }

    /// Join a waiting session under a fresh player id.
    ///
    /// A missing or blank name becomes `Player-<n>`, `n` being the roster
    /// size after joining.
    pub fn join_game(
        &self,
        session_id: &SessionId,
        name: Option<&str>,
        avatar: Option<String>,
    ) -> Result<JoinReceipt, ServiceError> {
        let shared = self.registry.get(session_id)?;
        let mut session = shared.lock();

        if session.status() != GameStatus::Waiting {
            return Err(SessionError::NotWaiting(session.status()).into());
        }
        if session.is_full() {
            return Err(SessionError::RosterFull(session.required_players()).into());
        }

        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Player-{}", session.player_count() + 1),
        };
        let player_id = PlayerId::generate();
        let ordinal = session.add_player(player_id.clone(), name.clone(), avatar)?;

        Ok(JoinReceipt {
            player_id,
            ordinal,
            name,
            required_players: session.required_players(),
        })
    }

    /// Leave a session. Answers with the state the remaining players see.
    pub fn leave_game(
        &self,
        session_id: &SessionId,
        player_id: &PlayerId,
    ) -> Result<Broadcast, ServiceError> {
        let shared = self.registry.get(session_id)?;
        let mut session = shared.lock();
        session.remove_player(player_id)?;

        Ok(match session.status() {
            GameStatus::Waiting => Broadcast::WaitingRoomUpdate(session.waiting_room()),
            GameStatus::Active | GameStatus::Ended => Broadcast::GameUpdate(session.view()),
        })
    }

    /// Attach a joined player to a live session.
    pub fn connect(
        &self,
        session_id: &SessionId,
        player_id: &PlayerId,
    ) -> Result<Broadcast, ServiceError> {
        let shared = self.registry.get(session_id)?;
        let session = shared.lock();

        if !session.contains_player(player_id) {
            return Err(SessionError::UnknownPlayer(player_id.clone()).into());
        }
        match session.status() {
            GameStatus::Ended => Err(SessionError::Ended.into()),
            GameStatus::Waiting => Ok(Broadcast::WaitingRoomUpdate(session.waiting_room())),
            GameStatus::Active => Ok(Broadcast::GameUpdate(session.view())),
        }
    }

    /// Start a session on behalf of one of its players.
    pub fn start_game(
        &self,
        session_id: &SessionId,
        player_id: &PlayerId,
    ) -> Result<Broadcast, ServiceError> {
        let shared = self.registry.get(session_id)?;
        let mut session = shared.lock();

        if !session.contains_player(player_id) {
            return Err(SessionError::UnknownPlayer(player_id.clone()).into());
        }
        session.start_game()?;

        info!(session = %session_id, player = %player_id, "start requested");
        Ok(Broadcast::GameUpdate(session.view()))
    }

    /// Apply a gameplay event from the player whose turn it is.
    pub fn handle_event(&self, event: &GameEvent) -> Result<Broadcast, ServiceError> {
        let result = self.apply_event(event);
        if let Err(err) = &result {
            warn!(
                session = %event.session_id(),
                player = %event.player_id(),
                event = ?event,
                error = %err,
                "event rejected"
            );
        }
        result
    }

    fn apply_event(&self, event: &GameEvent) -> Result<Broadcast, ServiceError> {
        let shared = self.registry.get(event.session_id())?;
        let action = event.to_action()?;
        let mut session = shared.lock();
        session.apply(event.player_id(), action)?;
        Ok(Broadcast::GameUpdate(session.view()))
    }

    /// Current game view of a session.
    pub fn snapshot(&self, session_id: &SessionId) -> Result<SessionView, ServiceError> {
        let shared = self.registry.get(session_id)?;
        let view = shared.lock().view();
        Ok(view)
    }
}
