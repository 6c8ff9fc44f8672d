//! The shared visitor (doggo) pool.
//!
//! Visible slots, a draw pile, a discard pile, and a per-slot escrow of
//! extra money. The escrow is indexed by slot position: whatever card
//! occupies a slot inherits the money sitting on it.
//!
//! `visible + draw + discard` is constant for the lifetime of the pool.
//! When the draw pile runs out the discard pile is shuffled back into it.

use smallvec::{smallvec, SmallVec};

use crate::cards::VisitorKind;
use crate::core::error::ActionError;
use crate::core::rng::{shuffle, RandomSource};
use crate::rules::slot_subsidy;

/// Visible slots, draw and discard piles, and slot escrow for visitors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitorPool {
    capacity: usize,
    visible: SmallVec<[VisitorKind; 4]>,
    draw: Vec<VisitorKind>,
    discard: Vec<VisitorKind>,
    escrow: SmallVec<[i64; 4]>,
}

impl VisitorPool {
    /// Create an empty pool with `capacity` visible slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            visible: SmallVec::new(),
            draw: Vec::new(),
            discard: Vec::new(),
            escrow: smallvec![0; capacity],
        }
    }

    /// Create a pool from a deck and fill the visible slots from it.
    ///
    /// Cards are dealt from the end of `deck`.
    #[must_use]
    pub fn with_deck(capacity: usize, deck: Vec<VisitorKind>) -> Self {
        let mut pool = Self::new(capacity);
        pool.draw = deck;
        pool.fill_visible();
        pool
    }

    /// Deal from the draw pile until the visible slots are full or the draw
    /// pile is empty.
    pub fn fill_visible(&mut self) {
        while self.visible.len() < self.capacity {
            match self.draw.pop() {
                Some(card) => self.visible.push(card),
                None => break,
            }
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cards in the visible slots, slot 0 first.
    #[must_use]
    pub fn visible(&self) -> &[VisitorKind] {
        &self.visible
    }

    /// The card in `slot`, validated against the visible slots.
    pub fn get(&self, slot: usize) -> Result<VisitorKind, ActionError> {
        self.visible
            .get(slot)
            .copied()
            .ok_or(ActionError::InvalidSlot {
                index: slot,
                len: self.visible.len(),
            })
    }

    /// Escrowed extra money per slot position.
    #[must_use]
    pub fn escrow(&self) -> &[i64] {
        &self.escrow
    }

    /// Escrowed extra money on `slot` (0 for positions past capacity).
    #[must_use]
    pub fn escrow_at(&self, slot: usize) -> i64 {
        self.escrow.get(slot).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn draw_pile(&self) -> &[VisitorKind] {
        &self.draw
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[VisitorKind] {
        &self.discard
    }

    /// `visible + draw + discard`.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.visible.len() + self.draw.len() + self.discard.len()
    }

    /// Pay the subsidy for picking `slot`: every cheaper slot `i < slot`
    /// gains `i + 1` escrow.
    pub fn subsidize_below(&mut self, slot: usize) {
        for (i, extra) in self.escrow.iter_mut().enumerate().take(slot) {
            *extra += slot_subsidy(i);
        }
    }

    /// Retire the card in `slot` after it was hosted.
    ///
    /// The slot is refilled from the draw pile (recycling the discard pile
    /// first if needed), its escrow is cleared, and the hosted card goes to
    /// the discard pile. If no replacement exists the hosted card stays in
    /// its slot. Returns the hosted card.
    pub fn retire<R: RandomSource + ?Sized>(
        &mut self,
        slot: usize,
        rng: &mut R,
    ) -> Result<VisitorKind, ActionError> {
        let hosted = self.get(slot)?;
        if let Some(next) = self.draw_card(rng) {
            self.visible[slot] = next;
            self.discard.push(hosted);
        }
        if let Some(extra) = self.escrow.get_mut(slot) {
            *extra = 0;
        }
        Ok(hosted)
    }

    fn draw_card<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<VisitorKind> {
        if self.draw.is_empty() {
            self.recycle_discard(rng);
        }
        self.draw.pop()
    }

    fn recycle_discard<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.discard, rng);
        self.draw.append(&mut self.discard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{ConstantSource, GameRng};

    fn full_deck() -> Vec<VisitorKind> {
        VisitorKind::ALL.to_vec()
    }

    #[test]
    fn test_with_deck_fills_visible_from_the_end() {
        let pool = VisitorPool::with_deck(4, full_deck());

        assert_eq!(
            pool.visible(),
            &[
                VisitorKind::Pomeranian,
                VisitorKind::Husky,
                VisitorKind::Bulldog,
                VisitorKind::Dachshund
            ]
        );
        assert_eq!(pool.draw_pile().len(), 2);
        assert!(pool.discard_pile().is_empty());
        assert_eq!(pool.escrow(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_small_deck_leaves_slots_unfilled() {
        let pool = VisitorPool::with_deck(4, vec![VisitorKind::Poodle, VisitorKind::Husky]);
        assert_eq!(pool.visible().len(), 2);
        assert!(pool.get(2).is_err());
    }

    #[test]
    fn test_get_validates_slot() {
        let pool = VisitorPool::with_deck(4, full_deck());
        assert_eq!(pool.get(0), Ok(VisitorKind::Pomeranian));
        assert_eq!(
            pool.get(4),
            Err(ActionError::InvalidSlot { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_subsidize_below() {
        let mut pool = VisitorPool::with_deck(4, full_deck());

        pool.subsidize_below(3);
        assert_eq!(pool.escrow(), &[1, 2, 3, 0]);

        pool.subsidize_below(1);
        assert_eq!(pool.escrow(), &[2, 2, 3, 0]);

        pool.subsidize_below(0);
        assert_eq!(pool.escrow(), &[2, 2, 3, 0]);
    }

    #[test]
    fn test_retire_refills_and_discards() {
        let mut pool = VisitorPool::with_deck(4, full_deck());
        pool.subsidize_below(3);

        let hosted = pool.retire(1, &mut ConstantSource(0)).unwrap();

        assert_eq!(hosted, VisitorKind::Husky);
        assert_eq!(pool.visible()[1], VisitorKind::Poodle);
        assert_eq!(pool.discard_pile(), &[VisitorKind::Husky]);
        assert_eq!(pool.escrow(), &[1, 0, 3, 0]);
        assert_eq!(pool.total_cards(), 6);
    }

    #[test]
    fn test_retire_recycles_discard_when_draw_is_empty() {
        let mut pool = VisitorPool::with_deck(4, full_deck());
        let mut rng = GameRng::new(5);

        pool.retire(0, &mut rng).unwrap();
        pool.retire(0, &mut rng).unwrap();
        assert!(pool.draw_pile().is_empty());
        assert_eq!(pool.discard_pile().len(), 2);

        // Third retire must pull from the recycled discard pile
        pool.retire(0, &mut rng).unwrap();
        assert_eq!(pool.draw_pile().len() + pool.discard_pile().len(), 2);
        assert_eq!(pool.total_cards(), 6);
    }

    #[test]
    fn test_retire_without_replacement_keeps_card() {
        let mut pool = VisitorPool::with_deck(4, vec![VisitorKind::Poodle, VisitorKind::Husky]);
        pool.subsidize_below(1);

        let hosted = pool.retire(0, &mut ConstantSource(0)).unwrap();

        assert_eq!(hosted, VisitorKind::Husky);
        assert_eq!(pool.visible(), &[VisitorKind::Husky, VisitorKind::Poodle]);
        assert!(pool.discard_pile().is_empty());
        assert_eq!(pool.escrow_at(0), 0);
        assert_eq!(pool.total_cards(), 2);
    }

    #[test]
    fn test_conservation_over_many_retires() {
        let mut pool = VisitorPool::with_deck(4, full_deck());
        let mut rng = GameRng::new(11);

        for i in 0..50 {
            pool.retire(i % 4, &mut rng).unwrap();
            assert_eq!(pool.total_cards(), 6);
            assert_eq!(pool.visible().len(), 4);
        }
    }
}
