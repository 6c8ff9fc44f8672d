//! Pricing curves.
//!
//! ## Hosting
//!
//! Slot 0 is free; slot `k` costs the triangular number `k(k+1)/2`. Paying
//! for slot `k` escrows `i + 1` onto every cheaper slot `i < k`.
//!
//! ## Store acquisition
//!
//! The first store is free, the `n`-th further store costs `n + 1`, and a
//! flat surcharge applies once four stores are owned.

/// Surcharge added to store acquisition once this many stores are owned.
pub const STORE_SURCHARGE_THRESHOLD: usize = 4;

/// Size of the store acquisition surcharge.
pub const STORE_SURCHARGE: i64 = 2;

/// Cost of hosting the visitor in `slot`.
///
/// ```
/// use doggo_engine::rules::hosting_cost;
///
/// assert_eq!(hosting_cost(0), 0);
/// assert_eq!(hosting_cost(1), 1);
/// assert_eq!(hosting_cost(3), 6);
/// ```
#[must_use]
pub const fn hosting_cost(slot: usize) -> i64 {
    (slot * (slot + 1) / 2) as i64
}

/// Escrow added to the cheaper `slot` when a costlier slot is picked.
#[must_use]
pub const fn slot_subsidy(slot: usize) -> i64 {
    slot as i64 + 1
}

/// Cost of acquiring a store for a player who already owns `owned` stores.
///
/// ```
/// use doggo_engine::rules::store_acquisition_cost;
///
/// let costs: Vec<i64> = (0..8).map(store_acquisition_cost).collect();
/// assert_eq!(costs, vec![0, 2, 3, 4, 7, 8, 9, 10]);
/// ```
#[must_use]
pub const fn store_acquisition_cost(owned: usize) -> i64 {
    if owned == 0 {
        return 0;
    }
    let base = owned as i64 + 1;
    if owned >= STORE_SURCHARGE_THRESHOLD {
        base + STORE_SURCHARGE
    } else {
        base
    }
}
