//! Golden vectors captured once from a correct reference run
//!
//! These pin the exact output sequence so any port or refactor can be
//! checked against it value for value.

use std::str::FromStr;

use nested_prng::{BigDecimal, BigInt, NestedPrng, DEFAULT_BLOCKS, DEFAULT_LAYERS};

const CONFORMANCE_SEED: u128 = 92_345_432_345_698_767_761;

fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

#[test]
fn test_default_seed_raw_words() {
    let mut rng = NestedPrng::default();
    assert_eq!(rng.raw_next(DEFAULT_LAYERS), 16_381_114_972_111_820_637);
    assert_eq!(rng.raw_next(DEFAULT_LAYERS), 10_031_308_330_231_550_629);
    assert_eq!(rng.raw_next(DEFAULT_LAYERS), 818_535_066_950_262_509);
}

#[test]
fn test_default_seed_single_layer() {
    let mut rng = NestedPrng::default();
    assert_eq!(rng.raw_next(1), 18_192_599_831_048_943_872);
}

#[test]
fn test_conformance_sequence() {
    let mut rng = NestedPrng::from_wide_seed(CONFORMANCE_SEED);

    let int_val = rng
        .next_int_in_range(-100_000, 100_000, DEFAULT_LAYERS)
        .unwrap();
    assert_eq!(int_val, 97_700);

    let bigint_val = rng
        .next_bigint_in_range(&-pow10(50), &pow10(50), DEFAULT_BLOCKS, DEFAULT_LAYERS)
        .unwrap();
    assert_eq!(
        bigint_val,
        BigInt::from_str("-83280654546182137019788369262341469932164001889851").unwrap()
    );

    let float_val = rng
        .next_float_in_range(&dec("-1e50"), &dec("1e50"), DEFAULT_BLOCKS, DEFAULT_LAYERS)
        .unwrap();
    assert_eq!(
        float_val,
        dec("26389957116206833749480533972369409234561680803910.\
             66177882871995103495292168287545262258429000841656\
             28307306399339507646539169619478348595046535843708\
             2112198377264290382009217465393957031021302809742")
    );
}

#[test]
fn test_conformance_int_sequence() {
    let mut rng = NestedPrng::from_wide_seed(CONFORMANCE_SEED);
    let first = rng.next_int_in_range(-100_000, 100_000, 8).unwrap();
    let second = rng.next_int_in_range(-100_000, 100_000, 8).unwrap();
    assert_eq!((first, second), (97_700, -65_632));
}

#[test]
fn test_unit_interval_carries_full_precision() {
    let mut rng = NestedPrng::from_wide_seed(CONFORMANCE_SEED);
    let value = rng
        .next_float_in_range(&dec("0"), &dec("1"), DEFAULT_BLOCKS, DEFAULT_LAYERS)
        .unwrap();

    assert_eq!(
        value,
        dec("0.69700214142540585991805474101269822651875025386830\
             59303986005792856828380420540161120236706040088928\
             29814847923151188570552510221107055261723834593087\
             72444186914077946965190663368386556509748790306463")
    );

    // An f64 round-trip keeps ~17 significant digits; this must keep far more
    assert!(value.digits() >= 150, "only {} digits", value.digits());
    let as_f64 = dec(&format!("{}", 0.697_002_141_425_405_9_f64));
    assert_ne!(value, as_f64);
}
