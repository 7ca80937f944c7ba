// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Historical liquidity-state reconstruction for concentrated-liquidity pools.
//!
//! Given a pool's mint, burn and swap tables, liqscan infers the decimal
//! scale of raw liquidity magnitudes and attaches to every swap the total
//! liquidity and the in-range liquidity visible at its timestamp.

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod events;
pub mod features;
pub mod inference;
pub mod pipeline;
pub mod pools;
pub mod reconstruct;
pub mod tables;
mod tracing;
pub mod types;

pub use config::{LiqscanConfig, LiqscanConfigBuilder};
pub use errors::{ConfigError, DecimalInferenceError, EventError, LiqscanError, TableError};
pub use events::{AugmentedSwap, LiquidityEvent, LiquidityEventKind, LiquidityState, SwapEvent};
pub use features::{swap_prices, ForwardPriceWindow, ForwardPrices};
pub use inference::{
    infer_decimal_exponent, DecimalInferenceEngine, ExponentHistogram, ImpliedPriceEstimator,
    LiquidityEstimator,
};
pub use pipeline::{process_pool, run_batch, BatchSummary, PoolOutcome, PoolResult};
pub use pools::{load_pools, select_pools, PoolFilter, PoolMetadata};
pub use reconstruct::{reconstruct, reconstruct_brute_force, LiquidityStateReconstructor};
pub use tables::{PoolReport, SwapTable, TableKind};
pub use types::tick::{tick_to_price, PriceBounds, TickRange};
pub use types::timestamp::UnixTimestamp;
pub use types::tokens::{LiquidityDecimals, TokenDecimals};
