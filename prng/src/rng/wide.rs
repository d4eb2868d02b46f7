//! Multi-block draws: big integers and high-precision decimals
//!
//! Wide values are built by concatenating raw 64-bit words
//! most-significant-word-first:
//!
//! ```text
//! val = w1
//! val = (val << 64) | w2
//! ...                      // blocks words, 64 * blocks bits total
//! ```
//!
//! # Sizing
//!
//! Callers pick `blocks`. If `64 * blocks` bits do not exceed the bit width
//! of the requested span, results are biased toward the low end of the
//! range. This is kept as-is (only logged), never auto-sized.
//!
//! # Decimal precision
//!
//! `val / 2^n` is computed exactly as `val * 5^n / 10^n`. Each arithmetic
//! step is then rounded half-even to the working precision passed in by
//! the caller. No process-wide decimal context is involved, so generators
//! with different precision needs can coexist.

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, BigUint};

use super::nested::NestedPrng;
use crate::error::{PrngError, PrngResult};

/// 64-bit words concatenated per wide draw unless the caller says otherwise
pub const DEFAULT_BLOCKS: usize = 4;

/// Significant decimal digits carried by [`NestedPrng::next_float_in_range`]
pub const DEFAULT_PRECISION: u64 = 200;

const BLOCK_BITS: u64 = 64;

const WORKING_PRECISION: NonZeroU64 = match NonZeroU64::new(DEFAULT_PRECISION) {
    Some(precision) => precision,
    None => panic!("DEFAULT_PRECISION must be positive"),
};

impl NestedPrng {
    /// Draw `blocks` raw words and concatenate them big-endian
    ///
    /// `blocks == 0` yields zero without touching the state.
    ///
    /// # Example
    /// ```
    /// use nested_prng::NestedPrng;
    ///
    /// let mut rng = NestedPrng::new(1);
    /// let wide = rng.next_blocks(4, 8);
    /// assert!(wide.bits() <= 256);
    /// ```
    pub fn next_blocks(&mut self, blocks: usize, layers: u32) -> BigUint {
        (0..blocks).fold(BigUint::default(), |acc, _| {
            (acc << BLOCK_BITS) | BigUint::from(self.raw_next(layers))
        })
    }

    /// Generate a big integer in `[low, high]` (both inclusive)
    ///
    /// # Errors
    /// [`PrngError::InvalidRange`] if `high < low`. The state is not
    /// advanced in that case.
    ///
    /// # Example
    /// ```
    /// use nested_prng::{BigInt, NestedPrng};
    ///
    /// let mut rng = NestedPrng::new(12345);
    /// let bound = BigInt::from(10u32).pow(50);
    /// let low = -bound.clone();
    ///
    /// let value = rng.next_bigint_in_range(&low, &bound, 4, 8).unwrap();
    /// assert!(value >= low && value <= bound);
    /// ```
    pub fn next_bigint_in_range(
        &mut self,
        low: &BigInt,
        high: &BigInt,
        blocks: usize,
        layers: u32,
    ) -> PrngResult<BigInt> {
        if high < low {
            return Err(PrngError::invalid_range(low, high));
        }

        let span: BigInt = high - low + 1u32;
        warn_if_undersized(&span, blocks);
        tracing::trace!(%low, %high, blocks, layers, "drawing bounded big integer");

        let value = BigInt::from(self.next_blocks(blocks, layers));
        Ok(low + value % &span)
    }

    /// Generate a decimal in `[min_val, max_val]` at [`DEFAULT_PRECISION`] digits
    ///
    /// # Errors
    /// [`PrngError::InvalidRange`] if `max_val < min_val`.
    ///
    /// # Example
    /// ```
    /// use std::str::FromStr;
    /// use nested_prng::{BigDecimal, NestedPrng};
    ///
    /// let mut rng = NestedPrng::new(12345);
    /// let min = BigDecimal::from_str("-1e50").unwrap();
    /// let max = BigDecimal::from_str("1e50").unwrap();
    ///
    /// let value = rng.next_float_in_range(&min, &max, 4, 8).unwrap();
    /// assert!(value >= min && value <= max);
    /// ```
    pub fn next_float_in_range(
        &mut self,
        min_val: &BigDecimal,
        max_val: &BigDecimal,
        blocks: usize,
        layers: u32,
    ) -> PrngResult<BigDecimal> {
        self.next_float_in_range_with_precision(min_val, max_val, blocks, layers, WORKING_PRECISION)
    }

    /// Generate a decimal in `[min_val, max_val]` carrying `precision`
    /// significant digits
    ///
    /// `min_val == max_val` always returns `min_val`. The result is
    /// clamped into the inclusive range, so rounding at the last digit
    /// can reach `max_val` but never exceed it.
    ///
    /// # Errors
    /// [`PrngError::InvalidRange`] if `max_val < min_val`. The state is not
    /// advanced in that case.
    pub fn next_float_in_range_with_precision(
        &mut self,
        min_val: &BigDecimal,
        max_val: &BigDecimal,
        blocks: usize,
        layers: u32,
        precision: NonZeroU64,
    ) -> PrngResult<BigDecimal> {
        if max_val < min_val {
            return Err(PrngError::invalid_range(min_val, max_val));
        }
        tracing::trace!(
            %min_val,
            %max_val,
            blocks,
            layers,
            precision = precision.get(),
            "drawing bounded decimal"
        );

        let value = self.next_blocks(blocks, layers);
        let frac = round(&unit_fraction(value, blocks), precision);

        let width = round(&(max_val - min_val), precision);
        let scaled = round(&(&width * &frac), precision);
        let result = round(&(min_val + &scaled), precision);

        Ok(if result > *max_val {
            max_val.clone()
        } else if result < *min_val {
            min_val.clone()
        } else {
            result
        })
    }
}

/// Exact `value / 2^(64 * blocks)` as a decimal
///
/// `1 / 2^n == 5^n / 10^n`, so the quotient is a finite decimal with
/// scale `n`.
fn unit_fraction(value: BigUint, blocks: usize) -> BigDecimal {
    let bits = BLOCK_BITS * blocks as u64;
    let five_pow = BigUint::from(5u32).pow(bits as u32);
    BigDecimal::new(BigInt::from(value * five_pow), bits as i64)
}

fn round(value: &BigDecimal, precision: NonZeroU64) -> BigDecimal {
    value.with_precision_round(precision, RoundingMode::HalfEven)
}

fn warn_if_undersized(span: &BigInt, blocks: usize) {
    let available = BLOCK_BITS * blocks as u64;
    if available <= span.bits() {
        tracing::warn!(
            span_bits = span.bits(),
            available_bits = available,
            "block count too small for span, results are biased toward the low end"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_next_blocks_concatenates_big_endian() {
        let mut rng = NestedPrng::new(31337);
        let mut replay = rng.clone();

        let wide = rng.next_blocks(3, 8);
        let w1 = BigUint::from(replay.raw_next(8));
        let w2 = BigUint::from(replay.raw_next(8));
        let w3 = BigUint::from(replay.raw_next(8));
        assert_eq!(wide, (w1 << 128u32) + (w2 << 64u32) + w3);
        assert_eq!(rng.state(), replay.state());
    }

    #[test]
    fn test_zero_blocks() {
        let mut rng = NestedPrng::new(5);
        assert_eq!(rng.next_blocks(0, 8), BigUint::default());
        assert_eq!(rng.state(), 5);
    }

    #[test]
    fn test_unit_fraction_is_exact() {
        // 2^63 / 2^64 == 0.5
        let half = unit_fraction(BigUint::from(1u64 << 63), 1);
        assert_eq!(half, dec("0.5"));

        // (2^64 - 1) / 2^64 is strictly below one
        let max = unit_fraction(BigUint::from(u64::MAX), 1);
        assert!(max < dec("1"));
        assert_eq!(max, dec("0.9999999999999999999457898913757247782996273599565029144287109375"));
    }

    #[test]
    fn test_degenerate_bigint_range() {
        let mut rng = NestedPrng::new(11);
        let point = BigInt::from(-42);
        for _ in 0..20 {
            assert_eq!(rng.next_bigint_in_range(&point, &point, 4, 8), Ok(point.clone()));
        }
    }

    #[test]
    fn test_degenerate_float_range() {
        let mut rng = NestedPrng::new(11);
        let point = dec("3.14159");
        for _ in 0..20 {
            assert_eq!(rng.next_float_in_range(&point, &point, 4, 8), Ok(point.clone()));
        }
    }

    #[test]
    fn test_invalid_ranges_leave_state() {
        let mut rng = NestedPrng::new(8);

        let err = rng
            .next_bigint_in_range(&BigInt::from(10), &BigInt::from(-10), 4, 8)
            .unwrap_err();
        assert_eq!(err, PrngError::invalid_range(10, -10));

        let err = rng
            .next_float_in_range(&dec("1.5"), &dec("-1.5"), 4, 8)
            .unwrap_err();
        assert!(matches!(err, PrngError::InvalidRange { .. }));

        assert_eq!(rng.state(), 8);
    }

    #[test]
    fn test_lower_precision_is_rounded() {
        let mut rng = NestedPrng::new(2718);
        let precision = NonZeroU64::new(10).unwrap();
        let value = rng
            .next_float_in_range_with_precision(&dec("0"), &dec("1"), 4, 8, precision)
            .unwrap();
        assert_eq!(value, dec("0.6136163784"));
        assert!(value.digits() <= 10, "got {} digits", value.digits());
    }
}
