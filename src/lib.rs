//! # doggo-engine
//!
//! In-memory session engine for Doggo, a turn-based multiplayer economic
//! board game. Players buy and build stores, collect dishes, and host
//! visiting dogs that spend money at their stores. First to hold enough
//! money with a full street of built stores wins.
//!
//! ## Design Principles
//!
//! 1. **Errors Are Values**: Every rejected action returns an error and
//!    leaves the session exactly as it was.
//!
//! 2. **Injectable Randomness**: Every shuffle and dice roll goes through a
//!    `RandomSource`. A seeded `GameRng` replays a match; a
//!    `ConstantSource` pins outcomes in tests.
//!
//! 3. **Closed Catalog**: Dishes, stores, visitors, and special effects are
//!    enums over static tables, never runtime data.
//!
//! ## Modules
//!
//! - `core`: ids, status, actions, configuration, errors, RNG
//! - `cards`: card catalog and instances
//! - `effects`: special-effect tags and their resolution
//! - `rules`: pricing curves and the win condition
//! - `market`: shared visitor and store markets
//! - `session`: player accounts, game sessions, views, registry, service

pub mod cards;
pub mod core;
pub mod effects;
pub mod market;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    shuffle, Action, ActionError, ActionRecord, ConfigError, ConstantSource, GameRng,
    GameRngState, GameStatus, PlayerId, PlayerOrdinal, RandomSource, ServiceError,
    SessionConfig, SessionError, SessionId,
};

pub use crate::cards::{
    CardCatalog, CardId, DishInstance, DishKind, StoreInstance, StoreKind, VisitorKind,
};

pub use crate::effects::{EffectResolver, HostPayout, SpecialEffect};

pub use crate::market::{Market, StorePool, VisitorPool};

pub use crate::session::{
    Broadcast, GameEvent, GameService, GameSession, HostReport, JoinReceipt, PlayerAccount,
    SessionRegistry, SessionView, WaitingRoomView,
};
