//! Session orchestration.
//!
//! ## Key Types
//!
//! - `PlayerAccount`: one player's ledger and dish piles
//! - `GameSession`: roster, turn order, markets, action dispatch
//! - `SessionView` / `WaitingRoomView`: client-facing snapshots
//! - `SessionRegistry`: keyed store of live sessions
//! - `GameService`: transport-facing lifecycle and gameplay entry points

pub mod account;
pub mod game;
pub mod registry;
pub mod service;
pub mod view;

pub use account::{HostReport, PlayerAccount};
pub use game::GameSession;
pub use registry::{SessionRegistry, SharedSession};
pub use service::{Broadcast, GameEvent, GameService, JoinReceipt};
pub use view::{
    DishView, PlayerSummary, PlayerView, SessionView, StoreMarketView, StoreView,
    VisitorMarketView, WaitingRoomEntry, WaitingRoomView,
};
