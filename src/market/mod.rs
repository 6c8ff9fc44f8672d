//! Shared card markets.
//!
//! A session owns exactly one `Market`, built when the game starts:
//!
//! - `VisitorPool`: visible visitor slots with escrow, draw and discard
//! - `StorePool`: visible store slots over a non-recycling supply

mod store_pool;
mod visitor_pool;

pub use store_pool::StorePool;
pub use visitor_pool::VisitorPool;

use crate::cards::CardCatalog;
use crate::core::config::SessionConfig;
use crate::core::rng::RandomSource;

/// Both shared markets of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Market {
    pub visitors: VisitorPool,
    pub stores: StorePool,
}

impl Market {
    /// Empty markets sized by `config`, used before the game starts.
    #[must_use]
    pub fn empty(config: &SessionConfig) -> Self {
        Self {
            visitors: VisitorPool::new(config.visible_visitor_slots),
            stores: StorePool::new(config.visible_store_slots),
        }
    }

    /// Draw the visitor deck, then the store supply, and deal both.
    pub fn deal<R: RandomSource + ?Sized>(config: &SessionConfig, rng: &mut R) -> Self {
        let deck = CardCatalog::visitor_deck(config.visitor_deck_size, rng);
        let supply = CardCatalog::store_supply(config.store_copies_per_type, rng);

        Self {
            visitors: VisitorPool::with_deck(config.visible_visitor_slots, deck),
            stores: StorePool::with_supply(config.visible_store_slots, supply),
        }
    }
}
