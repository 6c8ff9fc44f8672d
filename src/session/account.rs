//! Per-player ledger.
//!
//! A `PlayerAccount` owns one player's money, store cards, dish collection,
//! and the private dish draw/discard piles consumed when hosting visitors.
//!
//! Every fallible method checks all of its preconditions before touching
//! any field, so an `Err` always leaves the account unchanged.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{CardCatalog, DishInstance, StoreInstance, StoreKind, VisitorKind};
use crate::core::config::SessionConfig;
use crate::core::error::ActionError;
use crate::core::ids::PlayerId;
use crate::core::rng::{shuffle, RandomSource};
use crate::effects::{EffectResolver, HostContext, HostPayout};
use crate::rules::store_acquisition_cost;

/// Breakdown of the money a player earned by hosting one visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostReport {
    /// The visitor that was hosted.
    pub visitor: VisitorKind,
    /// Escrow collected from the slot.
    pub extra_money: i64,
    /// Income of every dish drawn for the visitor's meal.
    pub dish_income: i64,
    /// Base income plus per-type bonus of every visited built store.
    pub store_income: i64,
    /// Money from host-time store effects, including extra dish draws.
    pub effect_income: i64,
    /// Dish cards actually drawn (meal plus effect draws).
    pub dishes_drawn: u32,
}

impl HostReport {
    fn new(visitor: VisitorKind, extra_money: i64) -> Self {
        Self {
            visitor,
            extra_money,
            dish_income: 0,
            store_income: 0,
            effect_income: 0,
            dishes_drawn: 0,
        }
    }

    /// Total money credited.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.extra_money + self.dish_income + self.store_income + self.effect_income
    }
}

/// One player's ledger, stores, and dish piles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerAccount {
    id: PlayerId,
    name: String,
    avatar: Option<String>,
    money: i64,
    stores: Vec<StoreInstance>,
    max_stores: usize,
    dishes: Vec<DishInstance>,
    dish_draw: Vec<DishInstance>,
    dish_discard: Vec<DishInstance>,
    stores_built: usize,
    store_bonuses: FxHashMap<StoreKind, i64>,
}

impl PlayerAccount {
    /// Create an account seeded from `config`.
    ///
    /// The owned dish collection and the draw pile are materialized
    /// separately from the same list of starting dishes.
    #[must_use]
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        avatar: Option<String>,
        config: &SessionConfig,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            avatar,
            money: config.starting_money,
            stores: Vec::with_capacity(config.max_owned_stores),
            max_stores: config.max_owned_stores,
            dishes: CardCatalog::dish_collection(&config.starting_dishes),
            dish_draw: CardCatalog::dish_collection(&config.starting_dishes),
            dish_discard: Vec::new(),
            stores_built: 0,
            store_bonuses: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    #[must_use]
    pub fn money(&self) -> i64 {
        self.money
    }

    /// Owned store cards, in acquisition order.
    #[must_use]
    pub fn stores(&self) -> &[StoreInstance] {
        &self.stores
    }

    #[must_use]
    pub fn stores_built(&self) -> usize {
        self.stores_built
    }

    /// Owned dish collection.
    #[must_use]
    pub fn dishes(&self) -> &[DishInstance] {
        &self.dishes
    }

    #[must_use]
    pub fn dish_draw_pile(&self) -> &[DishInstance] {
        &self.dish_draw
    }

    #[must_use]
    pub fn dish_discard_pile(&self) -> &[DishInstance] {
        &self.dish_discard
    }

    /// Accumulated permanent income bonus for stores of `kind`.
    #[must_use]
    pub fn store_bonus(&self, kind: StoreKind) -> i64 {
        self.store_bonuses.get(&kind).copied().unwrap_or(0)
    }

    /// Unconditionally adjust money. A negative `amount` may drive the
    /// balance below zero.
    pub fn add_money(&mut self, amount: i64) {
        self.money += amount;
    }

    /// Subtract `amount` if the player can afford it.
    pub fn remove_money(&mut self, amount: i64) -> Result<(), ActionError> {
        if self.money < amount {
            return Err(ActionError::InsufficientFunds {
                needed: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        Ok(())
    }

    /// Pay for and take ownership of an unbuilt store card.
    ///
    /// Returns the price paid.
    pub fn acquire_store_card(&mut self, store: StoreInstance) -> Result<i64, ActionError> {
        if self.stores.len() >= self.max_stores {
            return Err(ActionError::StoreCapacityReached(self.max_stores));
        }
        let cost = store_acquisition_cost(self.stores.len());
        self.remove_money(cost)?;
        self.stores.push(store);
        Ok(cost)
    }

    /// Build the owned store at `index` and apply its build-time bonus.
    pub fn build_store(&mut self, index: usize) -> Result<StoreKind, ActionError> {
        let store = *self
            .stores
            .get(index)
            .ok_or(ActionError::InvalidStoreIndex {
                index,
                len: self.stores.len(),
            })?;
        if store.is_built() {
            return Err(ActionError::AlreadyBuilt(store.kind()));
        }
        self.remove_money(store.cost())?;

        self.stores[index].build();
        self.stores_built += 1;
        for &(kind, bonus) in EffectResolver::resolve_build(store.special_effect()) {
            *self.store_bonuses.entry(kind).or_insert(0) += bonus;
        }

        debug!(player = %self.id, store = %store.kind(), built = self.stores_built, "store built");
        Ok(store.kind())
    }

    /// Host `visitor`, crediting `extra_money` escrow, the visitor's meal,
    /// and every built store the visitor visits.
    pub fn host_visitor<R: RandomSource + ?Sized>(
        &mut self,
        visitor: VisitorKind,
        extra_money: i64,
        rng: &mut R,
    ) -> HostReport {
        let visitor_type = visitor.definition();
        let mut report = HostReport::new(visitor, extra_money);
        self.money += extra_money;

        for _ in 0..visitor_type.dishes_eaten {
            if let Some(income) = self.draw_dish_card(rng) {
                report.dish_income += income;
                report.dishes_drawn += 1;
            }
        }

        let context = HostContext {
            dishes_eaten: visitor_type.dishes_eaten,
            built_stores: self.stores_built,
        };
        let visited: SmallVec<[StoreInstance; 8]> = self
            .stores
            .iter()
            .filter(|store| store.is_built() && visitor_type.visits(store.kind()))
            .copied()
            .collect();

        for store in visited {
            let income = store.income() + self.store_bonus(store.kind());
            self.money += income;
            report.store_income += income;

            match EffectResolver::resolve_host(store.special_effect(), &context, rng) {
                HostPayout::Nothing => {}
                HostPayout::Money(amount) => {
                    self.money += amount;
                    report.effect_income += amount;
                }
                HostPayout::DrawDishes(count) => {
                    for _ in 0..count {
                        if let Some(income) = self.draw_dish_card(rng) {
                            report.effect_income += income;
                            report.dishes_drawn += 1;
                        }
                    }
                }
            }
        }

        report
    }

    /// Add a dish card to the owned collection.
    pub fn add_dish_card(&mut self, dish: DishInstance) {
        self.dishes.push(dish);
    }

    /// Remove the dish at `index` from the private discard pile.
    pub fn remove_dish_card_from_discard_pile(
        &mut self,
        index: usize,
    ) -> Result<DishInstance, ActionError> {
        if index >= self.dish_discard.len() {
            return Err(ActionError::InvalidDiscardIndex {
                index,
                len: self.dish_discard.len(),
            });
        }
        Ok(self.dish_discard.remove(index))
    }

    /// Draw one dish, credit its income, and discard it. Returns the income,
    /// or `None` when both piles are empty.
    fn draw_dish_card<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<i64> {
        if self.dish_draw.is_empty() {
            self.shuffle_discard_into_draw(rng);
        }
        let dish = self.dish_draw.pop()?;
        self.money += dish.income();
        self.dish_discard.push(dish);
        Some(dish.income())
    }

    fn shuffle_discard_into_draw<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.dish_discard, rng);
        self.dish_draw.append(&mut self.dish_discard);
    }
}
