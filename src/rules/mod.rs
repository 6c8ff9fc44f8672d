//! Game rules that are independent of session bookkeeping.
//!
//! - `pricing`: hosting cost, slot escrow subsidy, store acquisition cost
//! - `is_winner`: the win condition checked after every hosted visitor

pub mod pricing;

pub use pricing::{
    hosting_cost, slot_subsidy, store_acquisition_cost, STORE_SURCHARGE,
    STORE_SURCHARGE_THRESHOLD,
};

use crate::core::SessionConfig;

/// Does a player with `money` and `built_stores` meet the win condition?
///
/// The built-store count must match exactly; the money is a floor.
#[must_use]
pub fn is_winner(money: i64, built_stores: usize, config: &SessionConfig) -> bool {
    money >= config.winning_money && built_stores == config.winning_built_stores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_condition() {
        let config = SessionConfig::default();

        assert!(is_winner(50, 8, &config));
        assert!(is_winner(75, 8, &config));
        assert!(!is_winner(49, 8, &config));
        assert!(!is_winner(80, 7, &config));
    }
}
