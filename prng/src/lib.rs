//! Nested PRNG - layered LCG random number generation
//!
//! Deterministic generator producing 64-bit words, bounded integers,
//! arbitrary-width big integers and high-precision decimals from a single
//! seeded 64-bit state.
//!
//! # Architecture
//!
//! - **rng**: LCG primitive, the layered generator and its wide (multi-block) draws
//! - **config**: Serializable generator defaults (seed, layers, blocks, precision)
//! - **error**: Error taxonomy for contract violations
//!
//! # Critical Invariants
//!
//! 1. All state arithmetic wraps modulo 2^64
//! 2. Same seed + same call sequence → same outputs
//! 3. Bounded draws never leave their inclusive range
//! 4. Decimal precision is an explicit argument, never process-wide state

// Module declarations
pub mod config;
pub mod error;
pub mod rng;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use error::{PrngError, PrngResult};
pub use rng::{
    NestedPrng, DEFAULT_BLOCKS, DEFAULT_LAYERS, DEFAULT_PRECISION, DEFAULT_SEED, LCG_INCREMENT,
    LCG_MULTIPLIER,
};

// Arbitrary-precision types used in the public API
pub use bigdecimal::BigDecimal;
pub use num_bigint::{BigInt, BigUint};
