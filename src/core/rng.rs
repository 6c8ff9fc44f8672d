//! Injectable randomness for shuffles and dice rolls.
//!
//! ## Key Types
//!
//! - `RandomSource`: the strategy every random decision goes through
//! - `GameRng`: deterministic ChaCha8 source used by live sessions
//! - `ConstantSource`: always yields the same value (pins outcomes in tests)
//!
//! ## Usage
//!
//! ```
//! use doggo_engine::core::{shuffle, GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5];
//! shuffle(&mut deck, &mut rng);
//!
//! deck.sort();
//! assert_eq!(deck, vec![1, 2, 3, 4, 5]);
//!
//! let roll = rng.roll_die();
//! assert!((1..=6).contains(&roll));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Number of faces on the die used by dice-roll effects.
pub const DIE_FACES: usize = 6;

/// Source of uniform random integers.
///
/// Sessions never call a global RNG: shuffles and dice rolls are routed
/// through an implementation of this trait so tests can fix outcomes.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Roll a six-sided die, returning a value in `1..=6`.
    fn roll_die(&mut self) -> i64 {
        self.next_below(DIE_FACES) as i64 + 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

/// Fisher-Yates shuffle of `items` in place.
///
/// The output is always a permutation of the input.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

/// Deterministic RNG for live sessions.
///
/// Uses ChaCha8 for speed while keeping the stream reproducible from its
/// seed. Supports forking and context-based independent streams so one
/// registry seed can drive many sessions.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The registry uses the session id as the context.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn next_below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture and restore are O(1)
/// regardless of how many values were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// A source that always returns the same value, clamped into range.
///
/// `ConstantSource(0)` makes every shuffle a fixed permutation and every
/// die roll a 1; `ConstantSource(5)` rolls 6.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstantSource(pub usize);

impl RandomSource for ConstantSource {
    fn next_below(&mut self, bound: usize) -> usize {
        self.0.min(bound.saturating_sub(1))
    }
}
