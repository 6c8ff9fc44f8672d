//! Process-wide keyed store of live sessions.
//!
//! The map sits behind a `RwLock`; every session sits behind its own
//! `Mutex`, so actions on one session never wait on another. Hold a
//! session lock only for the duration of one action.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use tracing::info;

use super::game::GameSession;
use crate::core::config::SessionConfig;
use crate::core::error::ServiceError;
use crate::core::ids::SessionId;
use crate::core::rng::GameRng;

/// A session shared between the registry and its callers.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Keyed store of live sessions.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<FxHashMap<SessionId, SharedSession>>,
    seed: Option<u64>,
}

impl SessionRegistry {
    /// Registry whose sessions draw from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose sessions are reproducible: each session's RNG is
    /// derived from `seed` and its own id.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            sessions: RwLock::default(),
            seed: Some(seed),
        }
    }

    /// Create and register a new waiting session with a fresh id.
    pub fn create(&self, required_players: usize, config: SessionConfig) -> (SessionId, SharedSession) {
        let id = SessionId::generate();
        let rng = self.session_rng(&id);
        let session = GameSession::with_rng(id.clone(), required_players, config, rng);
        let shared = self.insert(session);

        info!(session = %id, required_players, "session created");
        (id, shared)
    }

    fn session_rng(&self, id: &SessionId) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed).for_context(id.as_str()),
            None => GameRng::from_entropy(),
        }
    }

    /// Register an existing session, replacing any session with the same id.
    pub fn insert(&self, session: GameSession) -> SharedSession {
        let id = session.id().clone();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.write().insert(id, Arc::clone(&shared));
        shared
    }

    /// Look a session up.
    pub fn get(&self, id: &SessionId) -> Result<SharedSession, ServiceError> {
        self.sessions
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::SessionNotFound(id.clone()))
    }

    /// Drop a session. Callers still holding it keep a working handle.
    pub fn remove(&self, id: &SessionId) -> Option<SharedSession> {
        let removed = self.sessions.write().remove(id);
        if removed.is_some() {
            info!(session = %id, "session removed");
        }
        removed
    }

    /// Drop every session created before `cutoff`. Returns how many went.
    pub fn evict_created_before(&self, cutoff: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|id, session| {
            let keep = session.lock().created_at() >= cutoff;
            if !keep {
                info!(session = %id, "session evicted");
            }
            keep
        });
        before - sessions.len()
    }

    /// Drop every session older than `max_age`.
    pub fn evict_older_than(&self, max_age: Duration) -> usize {
        self.evict_created_before(Utc::now() - max_age)
    }

    /// Ids of all live sessions.
    #[must_use]
    pub fn ids(&self) -> Vec<SessionId> {
        self.sessions.read().keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let registry = SessionRegistry::new();
        let (id, _) = registry.create(2, SessionConfig::default());

        let session = registry.get(&id).unwrap();
        assert_eq!(session.lock().required_players(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_session() {
        let registry = SessionRegistry::new();
        let id = SessionId::new("nope");
        assert_eq!(
            registry.get(&id).unwrap_err(),
            ServiceError::SessionNotFound(id)
        );
    }

    #[test]
    fn test_remove() {
        let registry = SessionRegistry::new();
        let (id, handle) = registry.create(2, SessionConfig::default());

        assert!(registry.remove(&id).is_some());
        assert!(registry.remove(&id).is_none());
        assert!(registry.is_empty());
        // Existing handles stay usable
        assert_eq!(handle.lock().player_count(), 0);
    }

    #[test]
    fn test_eviction() {
        let registry = SessionRegistry::new();
        registry.create(2, SessionConfig::default());
        registry.create(3, SessionConfig::default());

        assert_eq!(registry.evict_older_than(Duration::hours(1)), 0);
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.evict_created_before(Utc::now() + Duration::seconds(1)), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_seeded_registry_derives_rng_from_id() {
        let id = SessionId::new("game-1");
        let a = SessionRegistry::with_seed(7).session_rng(&id);
        let b = SessionRegistry::with_seed(7).session_rng(&id);
        let other = SessionRegistry::with_seed(7).session_rng(&SessionId::new("game-2"));

        assert_eq!(a.state(), b.state());
        assert_ne!(a.state(), other.state());
    }
}
