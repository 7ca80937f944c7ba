// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for liqscan integration tests
//!
//! Provides event builders and on-disk pool fixtures so tests can exercise
//! inference, reconstruction and the batch pipeline without real exports.

#![allow(dead_code)]

use std::path::Path;

use alloy_primitives::U256;
use liqscan::{
    ImpliedPriceEstimator, LiquidityEstimator, LiquidityEvent, PoolMetadata, SwapEvent,
    TableKind, TickRange, TokenDecimals, UnixTimestamp,
};

pub fn mint(t: i64, lower: i32, upper: i32, raw: u64) -> LiquidityEvent {
    LiquidityEvent::mint(UnixTimestamp(t), lower, upper, U256::from(raw))
}

pub fn burn(t: i64, lower: i32, upper: i32, raw: u64) -> LiquidityEvent {
    LiquidityEvent::burn(UnixTimestamp(t), lower, upper, U256::from(raw))
}

pub fn swap(t: i64, tick: i32) -> SwapEvent {
    SwapEvent::new(UnixTimestamp(t), tick)
}

/// Reference liquidity of a position as computed by the default estimator
pub fn reference_liquidity(
    range: TickRange,
    amount0: f64,
    amount1: f64,
    decimals0: TokenDecimals,
    decimals1: TokenDecimals,
) -> f64 {
    ImpliedPriceEstimator.reference_liquidity(
        amount0,
        amount1,
        range.price_bounds(decimals0, decimals1),
    )
}

/// A mint whose raw magnitude equals its reference liquidity × 10^exponent
pub fn scaled_mint(
    t: i64,
    range: TickRange,
    amount0: f64,
    amount1: f64,
    exponent: i32,
    decimals0: TokenDecimals,
    decimals1: TokenDecimals,
) -> LiquidityEvent {
    let reference = reference_liquidity(range, amount0, amount1, decimals0, decimals1);
    let raw = (reference * 10f64.powi(exponent)).round() as u128;
    LiquidityEvent::mint(UnixTimestamp(t), range.lower, range.upper, U256::from(raw))
        .with_token_amounts(amount0, amount1)
}

pub fn dai_weth_pool() -> PoolMetadata {
    PoolMetadata {
        id: "0xc2e9f25be6257c210d7adf0d4cd6e3e881ba25f8".to_string(),
        fee_tier: 3000,
        token0_symbol: "DAI".to_string(),
        token0_decimals: 18,
        token1_symbol: "WETH".to_string(),
        token1_decimals: 18,
        volume_usd: 1_000_000.0,
    }
}

/// Write one input table of `pool` under `data_dir`
pub fn write_table(data_dir: &Path, pool: &PoolMetadata, kind: TableKind, contents: &str) {
    let path = pool.table_path(data_dir, kind);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}
