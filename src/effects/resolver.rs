//! Effect resolution.
//!
//! `EffectResolver` is pure: it maps an effect tag plus context to the
//! side effect to apply, and the caller (the player account) applies it.
//! Randomness comes in through the injected `RandomSource`.

use crate::cards::StoreKind;
use crate::core::rng::RandomSource;

use super::effect::SpecialEffect;

/// Context available when a store effect fires during hosting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostContext {
    /// Dishes eaten by the visitor being hosted.
    pub dishes_eaten: u32,
    /// Stores the host has built so far.
    pub built_stores: usize,
}

/// Immediate side effect of a host-time effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostPayout {
    /// Nothing to apply.
    Nothing,
    /// Credit this much money.
    Money(i64),
    /// Draw this many additional dish cards.
    DrawDishes(u32),
}

/// Dish cards drawn by the draw-two-extra effect.
pub const EXTRA_DISH_DRAWS: u32 = 2;

/// Resolves special effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve an effect at build time.
    ///
    /// Returns the permanent per-store-type bonuses to add. Host-time
    /// effects and `None` yield nothing.
    #[must_use]
    pub fn resolve_build(effect: SpecialEffect) -> &'static [(StoreKind, i64)] {
        effect.build_bonuses()
    }

    /// Resolve an effect at host time.
    ///
    /// Only the dice roll consumes randomness.
    pub fn resolve_host<R: RandomSource + ?Sized>(
        effect: SpecialEffect,
        context: &HostContext,
        rng: &mut R,
    ) -> HostPayout {
        match effect {
            SpecialEffect::DiceRoll => HostPayout::Money(rng.roll_die()),
            SpecialEffect::DrawTwoExtraDishes => HostPayout::DrawDishes(EXTRA_DISH_DRAWS),
            SpecialEffect::EarnPerDishEaten => HostPayout::Money(i64::from(context.dishes_eaten)),
            SpecialEffect::EarnPerBuiltStore => HostPayout::Money(context.built_stores as i64),
            SpecialEffect::None
            | SpecialEffect::IceCreamParlorPlusTwo
            | SpecialEffect::DogBarDogParkSwimmingPoolPlusOne
            | SpecialEffect::ToyShopPlusTwo
            | SpecialEffect::PetHotelTreatCafePetFineDiningPlusOne
            | SpecialEffect::BoneBakeryPlusTwo => HostPayout::Nothing,
        }
    }
}
