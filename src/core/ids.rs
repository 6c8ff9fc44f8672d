//! Session and player identification.
//!
//! ## SessionId / PlayerId
//!
//! Opaque string identifiers. Live ids are random v4 UUIDs; tests and
//! callers may use any string.
//!
//! ## PlayerOrdinal
//!
//! The 1-based join ordinal handed to clients. Views key players by
//! ordinal so raw player ids never leave the server.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a game session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Unique identifier of a player within the process.
///
/// ```
/// use doggo_engine::core::PlayerId;
///
/// let alice = PlayerId::new("alice");
/// assert_eq!(alice.as_str(), "alice");
/// assert_ne!(PlayerId::generate(), PlayerId::generate());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Join ordinal of a player (1-based, never reused within a session).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerOrdinal(pub u32);

impl PlayerOrdinal {
    /// The ordinal assigned to the first player to join.
    pub const FIRST: Self = Self(1);

    /// The ordinal following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for PlayerOrdinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerId::new("p-1").to_string(), "p-1");
        assert_eq!(SessionId::from("s-1").to_string(), "s-1");
        assert_eq!(PlayerOrdinal(3).to_string(), "3");
    }

    #[test]
    fn test_ordinal_sequence() {
        assert_eq!(PlayerOrdinal::FIRST, PlayerOrdinal(1));
        assert_eq!(PlayerOrdinal::FIRST.next(), PlayerOrdinal(2));
    }

    #[test]
    fn test_transparent_serialization() {
        let id = PlayerId::new("alice");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"alice\"");

        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
