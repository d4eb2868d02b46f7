//! Deterministic random number generation
//!
//! Uses a layered (iterated) 64-bit LCG as the single entropy source.
//! Integer, big-integer and decimal draws are all built on top of
//! [`NestedPrng::raw_next`]; there is no other randomness in the crate.

mod lcg;
mod nested;
mod wide;

pub use lcg::{layered_step, lcg_step, LCG_INCREMENT, LCG_MULTIPLIER};
pub use nested::{NestedPrng, DEFAULT_LAYERS, DEFAULT_SEED};
pub use wide::{DEFAULT_BLOCKS, DEFAULT_PRECISION};
