//! Single-step LCG transition
//!
//! `state = (a * state + c) mod 2^64` with the MMIX constants. Native
//! `u64` wrapping arithmetic is exactly the `mod 2^64` reduction, so no
//! wider intermediate is needed.

/// LCG multiplier `a`
pub const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// LCG increment `c`
pub const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Apply one LCG transition
///
/// # Example
/// ```
/// use nested_prng::rng::lcg_step;
///
/// assert_eq!(lcg_step(0), 1_442_695_040_888_963_407);
/// ```
#[inline]
pub fn lcg_step(state: u64) -> u64 {
    state
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT)
}

/// Apply the LCG transition `layers` times, each step feeding the next
///
/// `layers == 0` returns `state` unchanged.
#[inline]
pub fn layered_step(state: u64, layers: u32) -> u64 {
    (0..layers).fold(state, |s, _| lcg_step(s))
}
