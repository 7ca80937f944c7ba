// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use crate::{
    config::LiqscanConfig,
    pipeline::{run_batch, BatchSummary},
    pools::{load_pools, select_pools},
};

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = LiqscanConfig::from_env().context("invalid liqscan configuration")?;
    let pools_path = config.pools_path();
    let registry = load_pools(&pools_path)
        .with_context(|| format!("failed to load pool registry {}", pools_path.display()))?;

    let pools = select_pools(registry, config.pool_filter.as_ref(), config.max_pools);
    info!(
        selected = pools.len(),
        filter = ?config.pool_filter,
        data_dir = %config.data_dir.display(),
        output_dir = %config.output_dir.display(),
        "Selected pools"
    );

    let results = run_batch(config, pools).await;
    let summary = BatchSummary::from_results(&results);
    if summary.has_failures() {
        anyhow::bail!(
            "{} of {} pools failed",
            summary.failed,
            results.len()
        );
    }

    Ok(())
}
