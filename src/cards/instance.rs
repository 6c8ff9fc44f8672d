//! Card instances - runtime card state.
//!
//! A `StoreInstance` is one physical store card: it moves from the market
//! into a player's collection and is later built. A `DishInstance` is one
//! dish card cycling through a player's private piles.

use super::definition::{DishKind, DishType, StoreKind, StoreType};
use crate::effects::SpecialEffect;

/// Identity of a physical store card: its kind plus the copy number.
///
/// Displays as `"<store-id>_<copy>"`, e.g. `"dog-park_2"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardId {
    kind: StoreKind,
    copy: u16,
}

impl CardId {
    /// Create a card id.
    #[must_use]
    pub const fn new(kind: StoreKind, copy: u16) -> Self {
        Self { kind, copy }
    }

    /// Copy number within the supply.
    #[must_use]
    pub const fn copy(self) -> u16 {
        self.copy
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.kind.id(), self.copy)
    }
}

/// A store card in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StoreInstance {
    kind: StoreKind,
    card_id: CardId,
    built: bool,
}

impl StoreInstance {
    /// Create an unbuilt store card.
    #[must_use]
    pub const fn new(kind: StoreKind, card_id: CardId) -> Self {
        Self {
            kind,
            card_id,
            built: false,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StoreKind {
        self.kind
    }

    #[must_use]
    pub const fn card_id(&self) -> CardId {
        self.card_id
    }

    /// The static definition of this card.
    #[must_use]
    pub fn definition(&self) -> &'static StoreType {
        self.kind.definition()
    }

    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.built
    }

    /// Mark the store built.
    pub fn build(&mut self) {
        self.built = true;
    }

    /// One-time build cost.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.definition().build_cost
    }

    /// Base income per hosted visit.
    #[must_use]
    pub fn income(&self) -> i64 {
        self.definition().income_per_visit
    }

    #[must_use]
    pub fn special_effect(&self) -> SpecialEffect {
        self.definition().special_effect
    }
}

/// A dish card owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DishInstance {
    kind: DishKind,
}

impl DishInstance {
    #[must_use]
    pub const fn new(kind: DishKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub const fn kind(&self) -> DishKind {
        self.kind
    }

    #[must_use]
    pub fn definition(&self) -> &'static DishType {
        self.kind.definition()
    }

    /// Money credited when this dish is drawn.
    #[must_use]
    pub fn income(&self) -> i64 {
        self.definition().income
    }

    /// Price of buying this dish.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.definition().build_cost
    }
}
