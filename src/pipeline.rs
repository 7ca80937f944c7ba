// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-pool processing and the concurrent batch runner
//!
//! One pool runs load → infer exponent → rescale → reconstruct → features →
//! persist, sequentially. Pools are independent, so a batch runs them on the
//! blocking thread pool with a bounded number in flight.
//!
//! # Example
//!
//! ```rust,no_run
//! use liqscan::{load_pools, run_batch, select_pools, LiqscanConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LiqscanConfig::from_env()?;
//! let pools = select_pools(load_pools(config.pools_path())?, config.pool_filter.as_ref(), config.max_pools);
//!
//! for result in run_batch(config, pools).await {
//!     println!("{}: {:?}", result.pool.label(), result.outcome.is_ok());
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{error, info, warn};

use crate::config::LiqscanConfig;
use crate::errors::LiqscanError;
use crate::events::LiquidityEventKind;
use crate::features::swap_prices;
use crate::inference::infer_decimal_exponent;
use crate::pools::PoolMetadata;
use crate::reconstruct::LiquidityStateReconstructor;
use crate::tables::{self, PoolReport, TableKind};
use crate::tracing::spans;

/// How a pool run ended, when it did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum PoolOutcome {
    /// Output table and report were written
    Completed(PoolReport),
    /// An input table is missing; nothing was written
    Skipped { reason: String },
}

/// A pool together with the result of processing it
#[derive(Debug)]
pub struct PoolResult {
    pub pool: PoolMetadata,
    pub outcome: Result<PoolOutcome, LiqscanError>,
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub completed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[PoolResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                match &result.outcome {
                    Ok(PoolOutcome::Completed(_)) => summary.completed += 1,
                    Ok(PoolOutcome::Skipped { .. }) => summary.skipped += 1,
                    Err(_) => summary.failed += 1,
                }
                summary
            })
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Process one pool end to end
///
/// A missing input table skips the pool. Any error aborts the pool before
/// output is written.
pub fn process_pool(
    config: &LiqscanConfig,
    pool: &PoolMetadata,
) -> Result<PoolOutcome, LiqscanError> {
    let span = spans::process_pool(&pool.id, &pool.pair(), pool.fee_tier);
    let _guard = span.enter();

    for kind in [TableKind::Swaps, TableKind::Mints, TableKind::Burns] {
        let path = config.table_path(pool, kind);
        if !path.is_file() {
            warn!(path = %path.display(), "Table not found, skipping pool");
            return Ok(PoolOutcome::Skipped {
                reason: format!("{kind} table not found at {}", path.display()),
            });
        }
    }

    let swap_table = tables::read_swaps(config.table_path(pool, TableKind::Swaps))?;
    let mut mints = tables::read_liquidity_events(
        config.table_path(pool, TableKind::Mints),
        LiquidityEventKind::Mint,
    )?;
    let mut burns = tables::read_liquidity_events(
        config.table_path(pool, TableKind::Burns),
        LiquidityEventKind::Burn,
    )?;
    info!(
        swaps = swap_table.swaps.len(),
        mints = mints.len(),
        burns = burns.len(),
        "Loaded pool tables"
    );

    for token in [pool.decimals0(), pool.decimals1()] {
        if !token.is_reasonable() {
            warn!(decimals = token.as_u8(), "Unusual token decimals in registry");
        }
    }

    let decimals = infer_decimal_exponent(&mints, pool.decimals0(), pool.decimals1())?;
    for event in mints.iter_mut().chain(burns.iter_mut()) {
        event.apply_decimals(decimals);
    }

    let reconstructor = LiquidityStateReconstructor::new(&mints, &burns)?;
    let augmented = reconstructor.augment(swap_table.swaps)?;

    let forward = config.forward_window.map(|window| {
        window.compute(&swap_prices(&augmented, pool.decimals0(), pool.decimals1()))
    });

    let output_path = config.output_path(pool);
    tables::write_augmented_swaps(
        &output_path,
        &swap_table.header,
        &augmented,
        forward.as_deref(),
    )?;

    let report = PoolReport {
        pool: pool.clone(),
        liquidity_decimals: decimals,
        swap_count: augmented.len(),
        liquidity_event_count: mints.len() + burns.len(),
        dropped_zero_events: reconstructor.dropped_zero_events(),
        first_swap: augmented.first().and_then(|s| s.swap.timestamp.to_datetime()),
        last_swap: augmented.last().and_then(|s| s.swap.timestamp.to_datetime()),
        output_path,
    };
    tables::write_report(config.report_path(pool), &report)?;

    info!(
        swaps = report.swap_count,
        liquidity_decimals = decimals.exponent(),
        output = %report.output_path.display(),
        "Pool processed"
    );
    Ok(PoolOutcome::Completed(report))
}

/// Process pools concurrently on the blocking thread pool
///
/// At most `config.max_concurrent_pools` pools run at once. Results come
/// back in completion order; a failing pool does not stop the others.
pub async fn run_batch(config: LiqscanConfig, pools: Vec<PoolMetadata>) -> Vec<PoolResult> {
    let concurrency = config.max_concurrent_pools.max(1);
    let config = Arc::new(config);
    info!(pools = pools.len(), concurrency, "Starting batch");

    let mut results = Vec::with_capacity(pools.len());
    let mut stream = stream::iter(pools.into_iter().map(|pool| {
        let config = Arc::clone(&config);
        async move {
            let task_pool = pool.clone();
            let outcome =
                tokio::task::spawn_blocking(move || process_pool(&config, &task_pool))
                    .await
                    .unwrap_or_else(|e| {
                        Err(LiqscanError::Task {
                            pool: pool.label(),
                            details: e.to_string(),
                        })
                    });
            PoolResult { pool, outcome }
        }
    }))
    .buffer_unordered(concurrency);

    while let Some(result) = stream.next().await {
        match &result.outcome {
            Ok(PoolOutcome::Completed(report)) => info!(
                pool = %result.pool.label(),
                liquidity_decimals = report.liquidity_decimals.exponent(),
                "Pool completed"
            ),
            Ok(PoolOutcome::Skipped { reason }) => {
                warn!(pool = %result.pool.label(), reason = %reason, "Pool skipped")
            }
            Err(e) => error!(pool = %result.pool.label(), error = %e, "Pool failed"),
        }
        results.push(result);
    }

    let summary = BatchSummary::from_results(&results);
    info!(
        completed = summary.completed,
        skipped = summary.skipped,
        failed = summary.failed,
        "Batch finished"
    );
    results
}
