//! Card catalog lookup.
//!
//! `CardCatalog` is the read-only entry point to the static card tables.
//! It also materializes the per-session card supplies (store supply,
//! visitor deck, starting dishes) from the tables.

use super::definition::{
    DishKind, DishType, StoreKind, StoreType, VisitorKind, VisitorType,
};
use super::instance::{CardId, DishInstance, StoreInstance};
use crate::core::rng::{shuffle, RandomSource};

/// Static lookup over all card definitions.
///
/// ## Example
///
/// ```
/// use doggo_engine::cards::{CardCatalog, StoreKind};
///
/// let park = CardCatalog::find_store("dog-park").unwrap();
/// assert_eq!(park.kind, StoreKind::DogPark);
/// assert_eq!(park.build_cost, 7);
/// assert_eq!(CardCatalog::stores().count(), 12);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CardCatalog;

impl CardCatalog {
    /// All dish definitions.
    pub fn dishes() -> impl Iterator<Item = &'static DishType> {
        DishKind::ALL.into_iter().map(DishKind::definition)
    }

    /// All store definitions.
    pub fn stores() -> impl Iterator<Item = &'static StoreType> {
        StoreKind::ALL.into_iter().map(StoreKind::definition)
    }

    /// All visitor definitions.
    pub fn visitors() -> impl Iterator<Item = &'static VisitorType> {
        VisitorKind::ALL.into_iter().map(VisitorKind::definition)
    }

    /// Find a dish by wire id.
    #[must_use]
    pub fn find_dish(id: &str) -> Option<&'static DishType> {
        DishKind::from_id(id).map(DishKind::definition)
    }

    /// Find a store by wire id.
    #[must_use]
    pub fn find_store(id: &str) -> Option<&'static StoreType> {
        StoreKind::from_id(id).map(StoreKind::definition)
    }

    /// Find a visitor by wire id.
    #[must_use]
    pub fn find_visitor(id: &str) -> Option<&'static VisitorType> {
        VisitorKind::from_id(id).map(VisitorKind::definition)
    }

    /// Build the shuffled store supply: `copies` unbuilt instances of every
    /// store kind.
    pub fn store_supply<R: RandomSource + ?Sized>(copies: usize, rng: &mut R) -> Vec<StoreInstance> {
        let mut supply = Vec::with_capacity(StoreKind::ALL.len() * copies);
        for kind in StoreKind::ALL {
            for copy in 0..copies {
                supply.push(StoreInstance::new(kind, CardId::new(kind, copy as u16)));
            }
        }
        shuffle(&mut supply, rng);
        supply
    }

    /// Pick `count` distinct visitor kinds at random.
    ///
    /// `count` is capped at the number of visitor kinds.
    pub fn visitor_deck<R: RandomSource + ?Sized>(count: usize, rng: &mut R) -> Vec<VisitorKind> {
        let mut kinds = VisitorKind::ALL.to_vec();
        shuffle(&mut kinds, rng);
        kinds.truncate(count);
        kinds
    }

    /// Materialize a fresh dish collection from a list of kinds.
    #[must_use]
    pub fn dish_collection(kinds: &[DishKind]) -> Vec<DishInstance> {
        kinds.iter().copied().map(DishInstance::new).collect()
    }
}
