//! Session configuration.
//!
//! Every tunable of a match lives in `SessionConfig`. The defaults are the
//! standard rules; tests and alternative modes override single fields via
//! the `with_*` builders or by deserializing a partial document (missing
//! fields fall back to the defaults).

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{DishKind, VisitorKind};

/// Configuration for a single session.
///
/// ## Example
///
/// ```
/// use doggo_engine::core::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_starting_money(10)
///     .with_winning_money(30);
///
/// assert_eq!(config.starting_money, 10);
/// assert_eq!(config.winning_built_stores, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Money every player starts with (before turn-order compensation).
    pub starting_money: i64,

    /// Dish cards every player owns at join time. The private draw pile is
    /// seeded from an independent copy of the same list.
    pub starting_dishes: Vec<DishKind>,

    /// Visible visitor slots (also the length of the escrow array).
    pub visible_visitor_slots: usize,

    /// Visible store slots.
    pub visible_store_slots: usize,

    /// Distinct visitor types drawn into the session at start.
    pub visitor_deck_size: usize,

    /// Copies of every store type in the store supply.
    pub store_copies_per_type: usize,

    /// Maximum stores a player may own (built or not).
    pub max_owned_stores: usize,

    /// Money required to win.
    pub winning_money: i64,

    /// Exact built-store count required to win.
    pub winning_built_stores: usize,

    /// Smallest roster a session may be created with.
    pub min_players: usize,

    /// Largest roster a session may be created with.
    pub max_players: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let mut starting_dishes = vec![DishKind::Level1; 6];
        starting_dishes.extend([DishKind::Level2; 2]);

        Self {
            starting_money: 5,
            starting_dishes,
            visible_visitor_slots: 4,
            visible_store_slots: 4,
            visitor_deck_size: 6,
            store_copies_per_type: 3,
            max_owned_stores: 8,
            winning_money: 50,
            winning_built_stores: 8,
            min_players: 2,
            max_players: 6,
        }
    }
}

impl SessionConfig {
    /// Set the starting money.
    #[must_use]
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    /// Replace the starting dish collection.
    #[must_use]
    pub fn with_starting_dishes(mut self, dishes: impl IntoIterator<Item = DishKind>) -> Self {
        self.starting_dishes = dishes.into_iter().collect();
        self
    }

    /// Set the number of distinct visitor types drawn at start.
    #[must_use]
    pub fn with_visitor_deck_size(mut self, size: usize) -> Self {
        self.visitor_deck_size = size;
        self
    }

    /// Set the copies of each store type in the supply.
    #[must_use]
    pub fn with_store_copies_per_type(mut self, copies: usize) -> Self {
        self.store_copies_per_type = copies;
        self
    }

    /// Set the money threshold of the win condition.
    #[must_use]
    pub fn with_winning_money(mut self, money: i64) -> Self {
        self.winning_money = money;
        self
    }

    /// Set the built-store count of the win condition.
    #[must_use]
    pub fn with_winning_built_stores(mut self, count: usize) -> Self {
        self.winning_built_stores = count;
        self
    }

    /// Set the allowed roster size range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Check whether `count` is an allowed roster size.
    #[must_use]
    pub fn allows_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_visitor_slots == 0 || self.visible_store_slots == 0 {
            return Err(ConfigError::Invalid(
                "visible slot counts must be at least 1".to_string(),
            ));
        }
        if self.visitor_deck_size == 0 || self.visitor_deck_size > VisitorKind::ALL.len() {
            return Err(ConfigError::Invalid(format!(
                "visitor deck size must be between 1 and {}",
                VisitorKind::ALL.len()
            )));
        }
        if self.min_players == 0 || self.min_players > self.max_players {
            return Err(ConfigError::Invalid(format!(
                "invalid player range {}..={}",
                self.min_players, self.max_players
            )));
        }
        if self.winning_built_stores > self.max_owned_stores {
            return Err(ConfigError::Invalid(format!(
                "winning built stores ({}) exceeds store capacity ({})",
                self.winning_built_stores, self.max_owned_stores
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();

        assert_eq!(config.starting_money, 5);
        assert_eq!(config.starting_dishes.len(), 8);
        assert_eq!(
            config.starting_dishes.iter().filter(|d| **d == DishKind::Level1).count(),
            6
        );
        assert_eq!(
            config.starting_dishes.iter().filter(|d| **d == DishKind::Level2).count(),
            2
        );
        assert_eq!(config.visible_visitor_slots, 4);
        assert_eq!(config.visitor_deck_size, 6);
        assert_eq!(config.store_copies_per_type, 3);
        assert_eq!(config.max_owned_stores, 8);
        assert_eq!(config.winning_money, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_player_range() {
        let config = SessionConfig::default();
        assert!(!config.allows_player_count(1));
        assert!(config.allows_player_count(2));
        assert!(config.allows_player_count(6));
        assert!(!config.allows_player_count(7));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SessionConfig::default().with_visitor_deck_size(0).validate().is_err());
        assert!(SessionConfig::default().with_visitor_deck_size(7).validate().is_err());
        assert!(SessionConfig::default().with_player_range(4, 2).validate().is_err());
        assert!(SessionConfig::default().with_winning_built_stores(9).validate().is_err());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "startingMoney": 12, "winningMoney": 20 }"#).unwrap();

        assert_eq!(config.starting_money, 12);
        assert_eq!(config.winning_money, 20);
        assert_eq!(config.visible_store_slots, 4);
        assert_eq!(config.starting_dishes, SessionConfig::default().starting_dishes);
    }

    #[test]
    fn test_dish_ids_in_document() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "startingDishes": ["level-3", "level-1"] }"#).unwrap();
        assert_eq!(config.starting_dishes, vec![DishKind::Level3, DishKind::Level1]);
    }
}
