//! Generator configuration
//!
//! Holds the defaults a driver applies to every draw. The generator
//! itself never reads this; callers pass layers, blocks and precision
//! explicitly to each operation.
//!
//! # Example
//! ```
//! use nested_prng::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_json(r#"{ "seed": 42, "layers": 4 }"#).unwrap();
//! assert_eq!(config.seed, 42);
//! assert_eq!(config.layers, 4);
//! assert_eq!(config.blocks, 4); // default
//! ```

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::error::{PrngError, PrngResult};
use crate::rng::{NestedPrng, DEFAULT_BLOCKS, DEFAULT_LAYERS, DEFAULT_PRECISION, DEFAULT_SEED};

/// Seed and per-draw defaults for a generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed, reduced modulo 2^64 when the generator is built
    pub seed: u128,

    /// LCG iterations per raw word
    pub layers: u32,

    /// 64-bit words per big-integer or decimal draw
    pub blocks: usize,

    /// Significant digits for decimal draws
    pub precision: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED as u128,
            layers: DEFAULT_LAYERS,
            blocks: DEFAULT_BLOCKS,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a JSON configuration
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_json(json: &str) -> PrngResult<Self> {
        let config: GeneratorConfig =
            serde_json::from_str(json).map_err(|e| PrngError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configured defaults are usable
    ///
    /// A zero-block draw is legal at the API level (it always yields the
    /// lower bound) but is rejected as a configured default.
    pub fn validate(&self) -> PrngResult<()> {
        if self.precision == 0 {
            return Err(PrngError::InvalidConfig(
                "precision must be positive".to_string(),
            ));
        }
        if self.blocks == 0 {
            return Err(PrngError::InvalidConfig(
                "blocks must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Working precision for decimal draws
    pub fn precision(&self) -> PrngResult<NonZeroU64> {
        NonZeroU64::new(self.precision)
            .ok_or_else(|| PrngError::InvalidConfig("precision must be positive".to_string()))
    }

    /// Build a generator seeded from this config
    pub fn build(&self) -> NestedPrng {
        NestedPrng::from_wide_seed(self.seed)
    }
}
