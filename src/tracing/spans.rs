// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for liqscan operations.
//!
//! This module provides span creation functions following an orthogonal design pattern
//! where telemetry concerns are separated from business logic. Instead of using
//! `#[instrument]` attributes directly on functions, each instrumented operation has
//! a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::{Level, Span};

/// Create span for inferring the liquidity decimal exponent of one pool.
///
/// Parent: process_pool span (or none when called directly)
/// Children: None
#[inline]
pub(crate) fn infer_decimal_exponent(
    mint_count: usize,
    token0_decimals: u8,
    token1_decimals: u8,
) -> Span {
    tracing::debug_span!(
        "liqscan.infer_decimal_exponent",
        mint_count = mint_count,
        token0_decimals = token0_decimals,
        token1_decimals = token1_decimals,
    )
}

/// Create span for the as-of join of liquidity events onto swaps.
///
/// Parent: process_pool span (or none when called directly)
/// Children: None
#[inline]
pub(crate) fn reconstruct(liquidity_event_count: usize, swap_count: usize) -> Span {
    tracing::debug_span!(
        "liqscan.reconstruct",
        liquidity_event_count = liquidity_event_count,
        swap_count = swap_count,
    )
}

/// Create span for loading one event table from disk.
///
/// Parent: process_pool span
/// Children: None
#[inline]
pub(crate) fn load_table(kind: &'static str, path: &std::path::Path) -> Span {
    tracing::trace_span!(
        "liqscan.load_table",
        kind = kind,
        path = %path.display(),
    )
}

/// Create span for processing a single pool end to end.
///
/// This is the main entry point for per-pool work in a batch.
///
/// Parent: None (root span for this operation)
/// Children: load_table, infer_decimal_exponent, reconstruct spans
#[inline]
pub(crate) fn process_pool(pool_id: &str, pair: &str, fee_tier: u32) -> Span {
    tracing::span!(
        Level::INFO,
        "liqscan.process_pool",
        pool_id = pool_id,
        pair = pair,
        fee_tier = fee_tier,
    )
}
