//! Special-effect tags.
//!
//! A closed set of tags declared by catalog entries. Each tag is resolved
//! at exactly one point of the game:
//!
//! - **Build**: a permanent, additive income bonus for one or more store
//!   types, recorded on the player when the store is built.
//! - **Host**: an immediate payout while the store is being visited.
//!
//! `SpecialEffect::None` is an explicit no-op and resolves nowhere.

use serde::{Deserialize, Serialize};

use crate::cards::StoreKind;

/// A catalog-declared special effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialEffect {
    /// No effect.
    #[default]
    None,

    // === Host time ===
    /// Credit a uniform roll in `1..=6`.
    DiceRoll,
    /// Draw two additional dish cards.
    #[serde(rename = "draw_extra_two_doggo_cards")]
    DrawTwoExtraDishes,
    /// Credit the visitor's dishes-eaten count.
    #[serde(rename = "earn_money_as_amount_dishes_eaten")]
    EarnPerDishEaten,
    /// Credit the host's built-store count.
    #[serde(rename = "earn_money_as_amount_built_stores")]
    EarnPerBuiltStore,

    // === Build time ===
    #[serde(rename = "ice_cream_parlor_plus_two_coins")]
    IceCreamParlorPlusTwo,
    #[serde(rename = "dog_bar_dog_park_swimming_pool_plus_one_coin")]
    DogBarDogParkSwimmingPoolPlusOne,
    #[serde(rename = "toy_shop_plus_two_coins")]
    ToyShopPlusTwo,
    #[serde(rename = "pet_hotel_treat_cafe_pet_fine_dining_plus_one_coin")]
    PetHotelTreatCafePetFineDiningPlusOne,
    #[serde(rename = "bone_bakery_plus_two_coins")]
    BoneBakeryPlusTwo,
}

/// The point of the game at which an effect is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionPoint {
    /// Never resolved (`SpecialEffect::None`).
    Never,
    /// Resolved once when the store is built.
    Build,
    /// Resolved each time the store is visited.
    Host,
}

impl SpecialEffect {
    /// Every tag.
    pub const ALL: [SpecialEffect; 10] = [
        SpecialEffect::None,
        SpecialEffect::DiceRoll,
        SpecialEffect::DrawTwoExtraDishes,
        SpecialEffect::EarnPerDishEaten,
        SpecialEffect::EarnPerBuiltStore,
        SpecialEffect::IceCreamParlorPlusTwo,
        SpecialEffect::DogBarDogParkSwimmingPoolPlusOne,
        SpecialEffect::ToyShopPlusTwo,
        SpecialEffect::PetHotelTreatCafePetFineDiningPlusOne,
        SpecialEffect::BoneBakeryPlusTwo,
    ];

    /// When this effect is resolved.
    #[must_use]
    pub const fn resolution_point(self) -> ResolutionPoint {
        match self {
            SpecialEffect::None => ResolutionPoint::Never,
            SpecialEffect::DiceRoll
            | SpecialEffect::DrawTwoExtraDishes
            | SpecialEffect::EarnPerDishEaten
            | SpecialEffect::EarnPerBuiltStore => ResolutionPoint::Host,
            SpecialEffect::IceCreamParlorPlusTwo
            | SpecialEffect::DogBarDogParkSwimmingPoolPlusOne
            | SpecialEffect::ToyShopPlusTwo
            | SpecialEffect::PetHotelTreatCafePetFineDiningPlusOne
            | SpecialEffect::BoneBakeryPlusTwo => ResolutionPoint::Build,
        }
    }

    /// Per-store-type bonuses granted when a store with this effect is
    /// built. Empty for every non-build effect.
    #[must_use]
    pub const fn build_bonuses(self) -> &'static [(StoreKind, i64)] {
        match self {
            SpecialEffect::IceCreamParlorPlusTwo => &[(StoreKind::IceCreamParlor, 2)],
            SpecialEffect::DogBarDogParkSwimmingPoolPlusOne => &[
                (StoreKind::DogBar, 1),
                (StoreKind::DogPark, 1),
                (StoreKind::SwimmingPool, 1),
            ],
            SpecialEffect::ToyShopPlusTwo => &[(StoreKind::ToyShop, 2)],
            SpecialEffect::PetHotelTreatCafePetFineDiningPlusOne => &[
                (StoreKind::PetHotel, 1),
                (StoreKind::TreatCafe, 1),
                (StoreKind::PetFineDining, 1),
            ],
            SpecialEffect::BoneBakeryPlusTwo => &[(StoreKind::BoneBakery, 2)],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tag_resolves_at_both_points() {
        for effect in SpecialEffect::ALL {
            let has_bonuses = !effect.build_bonuses().is_empty();
            match effect.resolution_point() {
                ResolutionPoint::Build => assert!(has_bonuses, "{effect:?}"),
                ResolutionPoint::Host | ResolutionPoint::Never => {
                    assert!(!has_bonuses, "{effect:?}")
                }
            }
        }
    }

    #[test]
    fn test_four_host_and_five_build_tags() {
        let host = SpecialEffect::ALL
            .iter()
            .filter(|e| e.resolution_point() == ResolutionPoint::Host)
            .count();
        let build = SpecialEffect::ALL
            .iter()
            .filter(|e| e.resolution_point() == ResolutionPoint::Build)
            .count();

        assert_eq!(host, 4);
        assert_eq!(build, 5);
        assert_eq!(SpecialEffect::None.resolution_point(), ResolutionPoint::Never);
    }

    #[test]
    fn test_bonus_tables() {
        assert_eq!(
            SpecialEffect::IceCreamParlorPlusTwo.build_bonuses(),
            &[(StoreKind::IceCreamParlor, 2)]
        );
        assert_eq!(
            SpecialEffect::DogBarDogParkSwimmingPoolPlusOne.build_bonuses().len(),
            3
        );
        assert!(SpecialEffect::DiceRoll.build_bonuses().is_empty());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&SpecialEffect::DiceRoll).unwrap(),
            "\"dice_roll\""
        );
        assert_eq!(
            serde_json::to_string(&SpecialEffect::DrawTwoExtraDishes).unwrap(),
            "\"draw_extra_two_doggo_cards\""
        );
    }
}
