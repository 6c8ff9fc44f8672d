//! The shared store market.
//!
//! A fixed number of visible slots over a face-down supply. Buying a store
//! refills its slot from the supply; once the supply is exhausted the slot
//! stays empty. Store cards never come back to the market.

use smallvec::SmallVec;

use crate::cards::StoreInstance;
use crate::core::error::ActionError;

/// Visible store slots plus the remaining supply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorePool {
    slots: SmallVec<[Option<StoreInstance>; 4]>,
    draw: Vec<StoreInstance>,
}

impl StorePool {
    /// Create an empty market with `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: SmallVec::from_elem(None, capacity),
            draw: Vec::new(),
        }
    }

    /// Create a market over `supply`, dealing one card into every slot.
    ///
    /// Cards are dealt from the end of `supply`.
    #[must_use]
    pub fn with_supply(capacity: usize, supply: Vec<StoreInstance>) -> Self {
        let mut pool = Self::new(capacity);
        pool.draw = supply;
        for slot in pool.slots.iter_mut() {
            *slot = pool.draw.pop();
        }
        pool
    }

    /// Visible slots; `None` marks a slot the supply could not refill.
    #[must_use]
    pub fn slots(&self) -> &[Option<StoreInstance>] {
        &self.slots
    }

    /// The store card in `slot`.
    pub fn get(&self, slot: usize) -> Result<&StoreInstance, ActionError> {
        match self.slots.get(slot) {
            Some(Some(store)) => Ok(store),
            Some(None) => Err(ActionError::EmptySlot(slot)),
            None => Err(ActionError::InvalidSlot {
                index: slot,
                len: self.slots.len(),
            }),
        }
    }

    /// Remove the card in `slot` and refill the slot from the supply.
    pub fn take(&mut self, slot: usize) -> Result<StoreInstance, ActionError> {
        let store = *self.get(slot)?;
        self.slots[slot] = self.draw.pop();
        Ok(store)
    }

    /// Cards left in the face-down supply.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    /// Occupied visible slots.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Cards still in the market (visible plus supply).
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.visible_count() + self.draw.len()
    }
}
