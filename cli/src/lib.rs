//! Sampling driver for the nested PRNG
//!
//! Seeds one generator, draws a fixed number of integers, big integers and
//! decimals from fixed ranges, and reports how many distinct values of each
//! kind came out.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use nested_prng::{BigDecimal, BigInt, GeneratorConfig, PrngError};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_ITERATIONS: usize = 10;

static TRACING_GUARD: OnceLock<()> = OnceLock::new();

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Message(String),
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Prng(#[from] PrngError),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

/// Initialise global tracing subscriber, `RUST_LOG` overrides the `info` default.
pub fn init_tracing() -> CliResult<()> {
    if TRACING_GUARD.get().is_some() {
        return Ok(());
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::Message(format!("failed to initialise tracing: {err}")))?;
    let _ = TRACING_GUARD.set(());
    Ok(())
}

#[derive(Debug, Parser)]
#[command(name = "nested-prng", about = "Draw sample values from a layered LCG generator")]
pub struct CliArgs {
    /// Optional path to a JSON generator configuration.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the seed (values wider than 64 bits are reduced mod 2^64).
    #[arg(long)]
    pub seed: Option<u128>,

    /// Number of iterations; each draws one value of every kind.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Override LCG iterations per raw word.
    #[arg(long)]
    pub layers: Option<u32>,

    /// Override 64-bit words per big-integer and decimal draw.
    #[arg(long)]
    pub blocks: Option<usize>,

    /// Override significant digits for decimal draws.
    #[arg(long)]
    pub precision: Option<u64>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Resolve the generator config: file (or defaults), then flag overrides
    pub fn resolve_config(&self) -> CliResult<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                    path: path.clone(),
                    source,
                })?;
                GeneratorConfig::from_json(&raw)?
            }
            None => GeneratorConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(layers) = self.layers {
            config.layers = layers;
        }
        if let Some(blocks) = self.blocks {
            config.blocks = blocks;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Inclusive ranges drawn from on every iteration
#[derive(Debug, Clone)]
pub struct SampleRanges {
    pub int: (i64, i64),
    pub bigint: (BigInt, BigInt),
    pub decimal: (BigDecimal, BigDecimal),
}

impl Default for SampleRanges {
    /// `[-10^5, 10^5]` for integers, `[-10^50, 10^50]` for big integers and decimals
    fn default() -> Self {
        let big = BigInt::from(10u32).pow(50);
        let decimal = BigDecimal::new(BigInt::from(1), -50);
        Self {
            int: (-100_000, 100_000),
            bigint: (-big.clone(), big),
            decimal: (-decimal.clone(), decimal),
        }
    }
}

/// Values drawn in one iteration, in draw order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub int: i64,
    pub bigint: String,
    pub decimal: String,
}

/// Samples plus distinct-value counts per kind
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub seed: String,
    pub samples: Vec<Sample>,
    pub unique_ints: usize,
    pub unique_bigints: usize,
    pub unique_decimals: usize,
}

/// Run the sampling loop against a freshly seeded generator
pub fn run_sampling(
    config: &GeneratorConfig,
    iterations: usize,
    ranges: &SampleRanges,
) -> CliResult<SampleReport> {
    let precision = config.precision()?;
    let mut rng = config.build();

    let mut ints = HashSet::new();
    let mut bigints = HashSet::new();
    let mut decimals = HashSet::new();
    let mut samples = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let int = rng.next_int_in_range(ranges.int.0, ranges.int.1, config.layers)?;
        let bigint = rng.next_bigint_in_range(
            &ranges.bigint.0,
            &ranges.bigint.1,
            config.blocks,
            config.layers,
        )?;
        let decimal = rng.next_float_in_range_with_precision(
            &ranges.decimal.0,
            &ranges.decimal.1,
            config.blocks,
            config.layers,
            precision,
        )?;

        ints.insert(int);
        bigints.insert(bigint.clone());
        decimals.insert(decimal.normalized());
        samples.push(Sample {
            int,
            bigint: bigint.to_string(),
            decimal: decimal.to_string(),
        });
    }

    tracing::info!(
        iterations,
        unique_ints = ints.len(),
        unique_bigints = bigints.len(),
        unique_decimals = decimals.len(),
        "sampling completed"
    );

    Ok(SampleReport {
        seed: config.seed.to_string(),
        samples,
        unique_ints: ints.len(),
        unique_bigints: bigints.len(),
        unique_decimals: decimals.len(),
    })
}

/// Render the report the way the binary prints it in text mode
pub fn render_text(report: &SampleReport) -> String {
    let mut out = String::new();
    for (i, sample) in report.samples.iter().enumerate() {
        out.push_str(&format!("===== Iteration {} =====\n", i + 1));
        out.push_str(&format!("64-bit int: {}\n", sample.int));
        out.push_str(&format!("Big int: {}\n", sample.bigint));
        out.push_str(&format!("High precision decimal: {}\n", sample.decimal));
    }
    out.push_str("\n===== Unique Values Summary =====\n");
    out.push_str(&format!("Unique 64-bit ints: {}\n", report.unique_ints));
    out.push_str(&format!("Unique big ints: {}\n", report.unique_bigints));
    out.push_str(&format!("Unique high-precision decimals: {}\n", report.unique_decimals));
    out
}
