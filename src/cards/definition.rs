//! Card definitions - static card data.
//!
//! Each card family is a closed enum (`DishKind`, `StoreKind`,
//! `VisitorKind`) backed by a compile-time table of its definition
//! (`DishType`, `StoreType`, `VisitorType`). Definitions are never mutated;
//! per-game state lives in `StoreInstance` / `DishInstance`.
//!
//! Kinds serialize as their wire ids (`"level-2"`, `"dog-park"`,
//! `"doggo_004"`).

use serde::{Deserialize, Serialize};

use crate::effects::SpecialEffect;

/// Dish card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DishKind {
    #[serde(rename = "level-1")]
    Level1,
    #[serde(rename = "level-2")]
    Level2,
    #[serde(rename = "level-3")]
    Level3,
    #[serde(rename = "level-4")]
    Level4,
}

/// Static definition of a dish card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DishType {
    pub kind: DishKind,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Price of buying one more copy.
    pub build_cost: i64,
    /// Money credited each time the dish is drawn.
    pub income: i64,
    /// Catalog tag only: dish effects are not resolved anywhere.
    pub special_effect: SpecialEffect,
}

static DISH_TYPES: [DishType; 4] = [
    DishType {
        kind: DishKind::Level1,
        id: "level-1",
        name: "Basic Dish",
        description: "A simple dish that's easy to prepare and serve",
        build_cost: 0,
        income: 1,
        special_effect: SpecialEffect::None,
    },
    DishType {
        kind: DishKind::Level2,
        id: "level-2",
        name: "Standard Dish",
        description: "A well-prepared dish with good quality ingredients",
        build_cost: 3,
        income: 2,
        special_effect: SpecialEffect::None,
    },
    DishType {
        kind: DishKind::Level3,
        id: "level-3",
        name: "Premium Dish",
        description: "A high-quality dish made with premium ingredients",
        build_cost: 6,
        income: 3,
        special_effect: SpecialEffect::None,
    },
    DishType {
        kind: DishKind::Level4,
        id: "level-4",
        name: "Specialty Dish",
        description: "A unique dish with bonus income based on dice roll",
        build_cost: 9,
        income: 2,
        special_effect: SpecialEffect::DiceRoll,
    },
];

impl DishKind {
    /// Every dish kind, in catalog order.
    pub const ALL: [DishKind; 4] = [
        DishKind::Level1,
        DishKind::Level2,
        DishKind::Level3,
        DishKind::Level4,
    ];

    /// The static definition of this kind.
    #[must_use]
    pub fn definition(self) -> &'static DishType {
        &DISH_TYPES[self as usize]
    }

    /// Wire id.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.definition().id
    }

    /// Look a kind up by wire id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl std::fmt::Display for DishKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.definition().name)
    }
}

/// Store card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreKind {
    ToyShop,
    GroomingSpa,
    BoneBakery,
    DogPark,
    TreatCafe,
    PetClinic,
    PetFineDining,
    SwimmingPool,
    PetHotel,
    IceCreamParlor,
    DogAtm,
    DogBar,
}

/// Static definition of a store card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreType {
    pub kind: StoreKind,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// One-time cost of building the store.
    pub build_cost: i64,
    /// Base income each time a visiting visitor is hosted.
    pub income_per_visit: i64,
    pub special_effect: SpecialEffect,
}

static STORE_TYPES: [StoreType; 12] = [
    StoreType {
        kind: StoreKind::ToyShop,
        id: "toy-shop",
        name: "Toy Shop",
        description: "A fun store filled with squeaky toys and interactive games",
        build_cost: 6,
        income_per_visit: 0,
        special_effect: SpecialEffect::DiceRoll,
    },
    StoreType {
        kind: StoreKind::GroomingSpa,
        id: "grooming-spa",
        name: "Grooming Spa",
        description: "A luxurious spa for pampering and grooming services",
        build_cost: 6,
        income_per_visit: 0,
        special_effect: SpecialEffect::DrawTwoExtraDishes,
    },
    StoreType {
        kind: StoreKind::BoneBakery,
        id: "bone-bakery",
        name: "Bone Bakery",
        description: "A bakery specializing in fresh-baked dog treats and bones",
        build_cost: 6,
        income_per_visit: 3,
        special_effect: SpecialEffect::None,
    },
    StoreType {
        kind: StoreKind::DogPark,
        id: "dog-park",
        name: "Dog Park",
        description: "An outdoor park with agility equipment and play areas",
        build_cost: 7,
        income_per_visit: 1,
        special_effect: SpecialEffect::EarnPerDishEaten,
    },
    StoreType {
        kind: StoreKind::TreatCafe,
        id: "treat-cafe",
        name: "Treat Cafe",
        description: "A cozy cafe serving gourmet dog treats and refreshments",
        build_cost: 7,
        income_per_visit: 4,
        special_effect: SpecialEffect::None,
    },
    StoreType {
        kind: StoreKind::PetClinic,
        id: "pet-clinic",
        name: "Pet Clinic",
        description: "A medical clinic providing health care and check-ups",
        build_cost: 8,
        income_per_visit: 0,
        special_effect: SpecialEffect::EarnPerBuiltStore,
    },
    StoreType {
        kind: StoreKind::PetFineDining,
        id: "pet-fine-dining",
        name: "Pet Fine Dining",
        description: "A fine dining restaurant for dogs",
        build_cost: 9,
        income_per_visit: 6,
        special_effect: SpecialEffect::None,
    },
    StoreType {
        kind: StoreKind::SwimmingPool,
        id: "swimming-pool",
        name: "Swimming Pool",
        description: "An indoor pool for swimming lessons and water fun",
        build_cost: 5,
        income_per_visit: 2,
        special_effect: SpecialEffect::IceCreamParlorPlusTwo,
    },
    StoreType {
        kind: StoreKind::PetHotel,
        id: "pet-hotel",
        name: "Pet Hotel",
        description: "A luxury hotel for overnight stays and boarding",
        build_cost: 5,
        income_per_visit: 2,
        special_effect: SpecialEffect::DogBarDogParkSwimmingPoolPlusOne,
    },
    StoreType {
        kind: StoreKind::IceCreamParlor,
        id: "ice-cream-parlor",
        name: "Ice Cream Parlor",
        description: "A sweet shop serving dog-friendly ice cream and frozen treats",
        build_cost: 5,
        income_per_visit: 2,
        special_effect: SpecialEffect::ToyShopPlusTwo,
    },
    StoreType {
        kind: StoreKind::DogAtm,
        id: "dog-atm",
        name: "Dog ATM",
        description: "A machine that dispenses dog money",
        build_cost: 5,
        income_per_visit: 2,
        special_effect: SpecialEffect::PetHotelTreatCafePetFineDiningPlusOne,
    },
    StoreType {
        kind: StoreKind::DogBar,
        id: "dog-bar",
        name: "Dog Bar",
        description: "A bar for dogs to socialize and relax",
        build_cost: 5,
        income_per_visit: 2,
        special_effect: SpecialEffect::BoneBakeryPlusTwo,
    },
];

impl StoreKind {
    /// Every store kind, in catalog order.
    pub const ALL: [StoreKind; 12] = [
        StoreKind::ToyShop,
        StoreKind::GroomingSpa,
        StoreKind::BoneBakery,
        StoreKind::DogPark,
        StoreKind::TreatCafe,
        StoreKind::PetClinic,
        StoreKind::PetFineDining,
        StoreKind::SwimmingPool,
        StoreKind::PetHotel,
        StoreKind::IceCreamParlor,
        StoreKind::DogAtm,
        StoreKind::DogBar,
    ];

    /// The static definition of this kind.
    #[must_use]
    pub fn definition(self) -> &'static StoreType {
        &STORE_TYPES[self as usize]
    }

    /// Wire id.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.definition().id
    }

    /// Look a kind up by wire id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.definition().name)
    }
}

/// Visitor (NPC doggo) card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VisitorKind {
    #[serde(rename = "doggo_001")]
    GoldenRetriever,
    #[serde(rename = "doggo_002")]
    Poodle,
    #[serde(rename = "doggo_003")]
    Dachshund,
    #[serde(rename = "doggo_004")]
    Bulldog,
    #[serde(rename = "doggo_005")]
    Husky,
    #[serde(rename = "doggo_006")]
    Pomeranian,
}

/// Static definition of a visitor card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitorType {
    pub kind: VisitorKind,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Dish cards drawn by the host for this visitor.
    pub dishes_eaten: u32,
    /// Store types that pay out when this visitor is hosted.
    pub stores_visited: &'static [StoreKind],
}

impl VisitorType {
    /// Does this visitor visit stores of `kind`?
    #[must_use]
    pub fn visits(&self, kind: StoreKind) -> bool {
        self.stores_visited.contains(&kind)
    }
}

static VISITOR_TYPES: [VisitorType; 6] = [
    VisitorType {
        kind: VisitorKind::GoldenRetriever,
        id: "doggo_001",
        name: "Golden Retriever",
        description: "A friendly and energetic dog who loves to play and eat hearty meals",
        dishes_eaten: 2,
        stores_visited: &[StoreKind::ToyShop, StoreKind::BoneBakery, StoreKind::DogPark],
    },
    VisitorType {
        kind: VisitorKind::Poodle,
        id: "doggo_002",
        name: "Poodle",
        description: "An elegant and sophisticated dog who enjoys fancy treats and grooming",
        dishes_eaten: 1,
        stores_visited: &[StoreKind::GroomingSpa, StoreKind::TreatCafe],
    },
    VisitorType {
        kind: VisitorKind::Dachshund,
        id: "doggo_003",
        name: "Dachshund",
        description: "A small but mighty dog who loves small snacks and cozy spaces",
        dishes_eaten: 1,
        stores_visited: &[StoreKind::BoneBakery, StoreKind::ToyShop],
    },
    VisitorType {
        kind: VisitorKind::Bulldog,
        id: "doggo_004",
        name: "Bulldog",
        description: "A strong and loyal dog who enjoys hearty meals and relaxation",
        dishes_eaten: 2,
        stores_visited: &[StoreKind::BoneBakery, StoreKind::DogPark, StoreKind::TreatCafe],
    },
    VisitorType {
        kind: VisitorKind::Husky,
        id: "doggo_005",
        name: "Husky",
        description: "An adventurous and active dog who loves outdoor activities and protein-rich food",
        dishes_eaten: 2,
        stores_visited: &[StoreKind::DogPark, StoreKind::BoneBakery, StoreKind::ToyShop],
    },
    VisitorType {
        kind: VisitorKind::Pomeranian,
        id: "doggo_006",
        name: "Pomeranian",
        description: "A tiny and fluffy dog who adores fancy treats and pampering",
        dishes_eaten: 1,
        stores_visited: &[StoreKind::GroomingSpa, StoreKind::TreatCafe, StoreKind::ToyShop],
    },
];

impl VisitorKind {
    /// Every visitor kind, in catalog order.
    pub const ALL: [VisitorKind; 6] = [
        VisitorKind::GoldenRetriever,
        VisitorKind::Poodle,
        VisitorKind::Dachshund,
        VisitorKind::Bulldog,
        VisitorKind::Husky,
        VisitorKind::Pomeranian,
    ];

    /// The static definition of this kind.
    #[must_use]
    pub fn definition(self) -> &'static VisitorType {
        &VISITOR_TYPES[self as usize]
    }

    /// Wire id.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.definition().id
    }

    /// Look a kind up by wire id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl std::fmt::Display for VisitorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.definition().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_indexed_by_kind() {
        for kind in DishKind::ALL {
            assert_eq!(kind.definition().kind, kind);
        }
        for kind in StoreKind::ALL {
            assert_eq!(kind.definition().kind, kind);
        }
        for kind in VisitorKind::ALL {
            assert_eq!(kind.definition().kind, kind);
        }
    }

    #[test]
    fn test_serde_names_match_wire_ids() {
        for kind in StoreKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
        for kind in DishKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
        for kind in VisitorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(DishKind::from_id("level-4"), Some(DishKind::Level4));
        assert_eq!(DishKind::from_id("level-5"), None);
        assert_eq!(StoreKind::from_id("dog-atm"), Some(StoreKind::DogAtm));
        assert_eq!(VisitorKind::from_id("doggo_005"), Some(VisitorKind::Husky));
        assert_eq!(VisitorKind::from_id("cat_001"), None);
    }

    #[test]
    fn test_visitor_visits() {
        let poodle = VisitorKind::Poodle.definition();
        assert!(poodle.visits(StoreKind::GroomingSpa));
        assert!(poodle.visits(StoreKind::TreatCafe));
        assert!(!poodle.visits(StoreKind::ToyShop));
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(StoreKind::IceCreamParlor.to_string(), "Ice Cream Parlor");
        assert_eq!(DishKind::Level2.to_string(), "Standard Dish");
        assert_eq!(VisitorKind::Bulldog.to_string(), "Bulldog");
    }
}
