//! Gameplay actions and the action log.
//!
//! An `Action` is what the current player asks the session to do on their
//! turn. Accepted actions are appended to the session history as
//! `ActionRecord`s.

use serde::{Deserialize, Serialize};

use super::ids::PlayerId;
use crate::cards::DishKind;

/// A gameplay action taken by the current player.
///
/// Only `HostVisitor` ends the turn; every other action leaves the turn
/// with the same player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Buy a dish card into the owned collection.
    #[serde(rename_all = "camelCase")]
    BuyDish { dish: DishKind },

    /// Remove a dish card from the private discard pile.
    #[serde(rename_all = "camelCase")]
    RemoveDish { discard_index: usize },

    /// Acquire the store card in a visible market slot.
    #[serde(rename_all = "camelCase")]
    BuyStore { slot_index: usize },

    /// Build one of the player's owned stores.
    #[serde(rename_all = "camelCase")]
    BuildStore { owned_index: usize },

    /// Host the visitor in a visible slot (ends the turn).
    #[serde(rename_all = "camelCase")]
    HostVisitor { slot_index: usize },
}

impl Action {
    /// Does accepting this action pass the turn?
    #[must_use]
    pub const fn ends_turn(&self) -> bool {
        matches!(self, Action::HostVisitor { .. })
    }

    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::BuyDish { .. } => "buy_dish",
            Action::RemoveDish { .. } => "remove_dish",
            Action::BuyStore { .. } => "buy_store",
            Action::BuildStore { .. } => "build_store",
            Action::HostVisitor { .. } => "host_visitor",
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number within the turn (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
