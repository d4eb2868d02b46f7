//! Layered LCG random number generator
//!
//! Each exposed 64-bit word is the result of iterating the LCG transition
//! `layers` times. A single LCG step has strongly correlated low bits;
//! iterating before exposing output trades generation cost for better
//! local independence. It is NOT cryptographically secure.
//!
//! # Determinism
//!
//! Same seed → same sequence of outputs for the same sequence of calls.
//!
//! # Concurrency
//!
//! Every draw reads and writes `state`, so all draws take `&mut self`.
//! Sharing one generator across threads requires external locking
//! (e.g. `Mutex<NestedPrng>`); the usual pattern is one generator per thread.

use super::lcg::layered_step;
use crate::error::{PrngError, PrngResult};

/// Seed used by [`NestedPrng::default`]
pub const DEFAULT_SEED: u64 = 123_456_789;

/// LCG iterations per exposed word unless the caller says otherwise
pub const DEFAULT_LAYERS: u32 = 8;

/// Deterministic generator built on a layered 64-bit LCG
///
/// # Example
/// ```
/// use nested_prng::NestedPrng;
///
/// let mut rng = NestedPrng::new(12345);
/// let word = rng.raw_next(8);
/// let dice = rng.next_int_in_range(1, 6, 8).unwrap(); // [1, 6]
/// assert!((1..=6).contains(&dice));
/// # let _ = word;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedPrng {
    /// Internal state (64-bit)
    state: u64,
}

impl NestedPrng {
    /// Create a new generator with the given seed
    ///
    /// Any `u64` is a valid seed, including zero (the increment keeps
    /// the LCG moving).
    ///
    /// # Example
    /// ```
    /// use nested_prng::NestedPrng;
    ///
    /// let rng = NestedPrng::new(12345);
    /// assert_eq!(rng.state(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        tracing::debug!(seed, "initialising nested prng");
        Self { state: seed }
    }

    /// Create a generator from a seed wider than 64 bits
    ///
    /// The seed is reduced modulo 2^64. Since the transition itself works
    /// mod 2^64, this yields the same output sequence as carrying the
    /// unreduced seed into the first step.
    ///
    /// # Example
    /// ```
    /// use nested_prng::NestedPrng;
    ///
    /// let rng = NestedPrng::from_wide_seed((1u128 << 64) + 7);
    /// assert_eq!(rng.state(), 7);
    /// ```
    pub fn from_wide_seed(seed: u128) -> Self {
        Self::new(seed as u64)
    }

    /// Get current state (for replay)
    ///
    /// `NestedPrng::new(rng.state())` continues the exact same sequence.
    ///
    /// # Example
    /// ```
    /// use nested_prng::NestedPrng;
    ///
    /// let mut rng = NestedPrng::new(12345);
    /// rng.raw_next(8);
    ///
    /// let mut replay = NestedPrng::new(rng.state());
    /// assert_eq!(rng.raw_next(8), replay.raw_next(8));
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Generate the next 64-bit word
    ///
    /// Applies the LCG transition `layers` times, stores the result as the
    /// new state and returns it. `layers == 0` leaves the state unchanged
    /// and returns it as-is.
    ///
    /// # Example
    /// ```
    /// use nested_prng::NestedPrng;
    ///
    /// let mut rng = NestedPrng::default();
    /// assert_eq!(rng.raw_next(8), 16_381_114_972_111_820_637);
    /// ```
    pub fn raw_next(&mut self, layers: u32) -> u64 {
        self.state = layered_step(self.state, layers);
        self.state
    }

    /// Generate the next 64-bit word with [`DEFAULT_LAYERS`]
    pub fn next_u64(&mut self) -> u64 {
        self.raw_next(DEFAULT_LAYERS)
    }

    /// Generate an integer in `[low, high]` (both inclusive)
    ///
    /// The span is computed in 128-bit arithmetic, so the full `i64`
    /// range is accepted. `low == high` always returns `low`.
    ///
    /// # Errors
    /// [`PrngError::InvalidRange`] if `high < low`. The state is not
    /// advanced in that case.
    ///
    /// # Example
    /// ```
    /// use nested_prng::{NestedPrng, PrngError};
    ///
    /// let mut rng = NestedPrng::new(12345);
    /// let amount = rng.next_int_in_range(-100_000, 100_000, 8).unwrap();
    /// assert!((-100_000..=100_000).contains(&amount));
    ///
    /// assert!(matches!(
    ///     rng.next_int_in_range(5, 3, 8),
    ///     Err(PrngError::InvalidRange { .. })
    /// ));
    /// ```
    pub fn next_int_in_range(&mut self, low: i64, high: i64, layers: u32) -> PrngResult<i64> {
        if high < low {
            return Err(PrngError::invalid_range(low, high));
        }
        tracing::trace!(low, high, layers, "drawing bounded integer");

        let value = self.raw_next(layers);
        // high - low + 1 is at most 2^64, which u128 holds exactly
        let span = (high as i128 - low as i128 + 1) as u128;
        let offset = value as u128 % span;
        Ok((low as i128 + offset as i128) as i64)
    }
}

impl Default for NestedPrng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
