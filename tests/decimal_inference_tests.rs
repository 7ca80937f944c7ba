// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for liquidity decimal inference against realistic token layouts

mod helpers;

use helpers::{mint, scaled_mint};
use liqscan::{
    infer_decimal_exponent, DecimalInferenceEngine, DecimalInferenceError, LiquidityDecimals,
    TickRange, TokenDecimals,
};
use proptest::prelude::*;

fn ranges() -> Vec<TickRange> {
    vec![
        TickRange::new(-600, 600),
        TickRange::new(-60, 180),
        TickRange::new(1_200, 4_800),
        TickRange::new(-887_220, 887_220),
        TickRange::new(-12_000, -6_000),
    ]
}

#[test]
fn test_majority_exponent_with_off_by_one_noise() {
    let (d0, d1) = (TokenDecimals::DAI, TokenDecimals::STANDARD);
    let mut mints = Vec::new();
    for i in 0..100 {
        let range = ranges()[i % 5];
        // 80 events at 10^12, 20 events one decade off either way
        let exponent = match i % 10 {
            0 => 11,
            5 => 13,
            _ => 12,
        };
        mints.push(scaled_mint(i as i64, range, 3.0, 2.0, exponent, d0, d1));
    }

    let decimals = infer_decimal_exponent(&mints, d0, d1).unwrap();
    assert_eq!(decimals, LiquidityDecimals::new(12));
}

#[test]
fn test_mixed_decimals_pair() {
    // USDC/WETH style pair: price adjustment of 10^-12
    let (d0, d1) = (TokenDecimals::USDC, TokenDecimals::STANDARD);
    let mints: Vec<_> = (0..10)
        .map(|i| scaled_mint(i, TickRange::new(190_000, 200_000), 1_000.0, 0.5, 0, d0, d1))
        .collect();

    let histogram = DecimalInferenceEngine::default()
        .histogram(&mints, d0, d1)
        .unwrap();
    assert_eq!(histogram.mode(), Some(0));
    assert_eq!(histogram.usable(), 10);
}

#[test]
fn test_single_sided_positions_are_usable() {
    let (d0, d1) = (TokenDecimals::WBTC, TokenDecimals::STANDARD);
    let range = TickRange::new(-1_000, 1_000);
    let mints = vec![
        scaled_mint(1, range, 0.0, 5.0, 9, d0, d1),
        scaled_mint(2, range, 5.0, 0.0, 9, d0, d1),
    ];
    assert_eq!(
        infer_decimal_exponent(&mints, d0, d1).unwrap(),
        LiquidityDecimals::new(9)
    );
}

#[test]
fn test_zero_token_amounts_are_insufficient() {
    let d = TokenDecimals::STANDARD;
    let mints = vec![mint(1, 0, 10, 1_000), mint(2, 0, 10, 2_000)];
    let err = infer_decimal_exponent(&mints, d, d).unwrap_err();
    assert_eq!(err, DecimalInferenceError::insufficient_data(2, 0));
}

#[test]
fn test_tie_resolves_to_smaller_exponent() {
    let d = TokenDecimals::STANDARD;
    let range = TickRange::new(-600, 600);
    let mints = vec![
        scaled_mint(1, range, 1.0, 1.0, 14, d, d),
        scaled_mint(2, range, 1.0, 1.0, 10, d, d),
        scaled_mint(3, range, 1.0, 1.0, 14, d, d),
        scaled_mint(4, range, 1.0, 1.0, 10, d, d),
    ];
    assert_eq!(
        infer_decimal_exponent(&mints, d, d).unwrap(),
        LiquidityDecimals::new(10)
    );
}

proptest! {
    /// Property: a clear majority exponent is always recovered
    #[test]
    fn prop_recovers_planted_exponent(
        exponent in 0i32..20,
        amount0 in 0.01f64..1_000.0,
        amount1 in 0.01f64..1_000.0,
        majority in 6usize..12,
    ) {
        let d = TokenDecimals::STANDARD;
        let mut mints: Vec<_> = (0..majority)
            .map(|i| scaled_mint(i as i64, ranges()[i % 5], amount0, amount1, exponent, d, d))
            .collect();
        mints.push(scaled_mint(99, ranges()[0], amount0, amount1, exponent + 1, d, d));

        prop_assert_eq!(
            infer_decimal_exponent(&mints, d, d).unwrap(),
            LiquidityDecimals::new(exponent)
        );
    }
}
