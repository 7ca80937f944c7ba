// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pool registry: metadata, selection and table locations
//!
//! The registry is a CSV export with one row per pool. Selection keeps the
//! pools matching a `(token0, token1, fee tier)` filter, orders them by
//! traded volume (highest first) and truncates to a maximum count.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::TableError;
use crate::tables::TableKind;
use crate::types::tokens::TokenDecimals;

/// One row of the pool registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolMetadata {
    /// Pool contract address
    pub id: String,
    #[serde(rename = "feeTier")]
    pub fee_tier: u32,
    pub token0_symbol: String,
    pub token0_decimals: u8,
    pub token1_symbol: String,
    pub token1_decimals: u8,
    /// Lifetime traded volume in USD, used for ordering
    #[serde(rename = "volumeUSD")]
    pub volume_usd: f64,
}

impl PoolMetadata {
    pub fn decimals0(&self) -> TokenDecimals {
        TokenDecimals::new(self.token0_decimals)
    }

    pub fn decimals1(&self) -> TokenDecimals {
        TokenDecimals::new(self.token1_decimals)
    }

    /// `token0/token1`
    pub fn pair(&self) -> String {
        format!("{}/{}", self.token0_symbol, self.token1_symbol)
    }

    /// `token0/token1 fee N`, for logs
    pub fn label(&self) -> String {
        format!("{} fee {}", self.pair(), self.fee_tier)
    }

    /// File stem shared by every table of this pool
    pub fn file_stem(&self) -> String {
        format!(
            "{}{}_pool_fee_{}",
            self.token0_symbol, self.token1_symbol, self.fee_tier
        )
    }

    /// `{data_dir}/{kind}/{token0}{token1}_pool_fee_{fee}_{kind}.csv`
    pub fn table_path(&self, data_dir: &Path, kind: TableKind) -> PathBuf {
        data_dir
            .join(kind.dir_name())
            .join(format!("{}_{}.csv", self.file_stem(), kind.dir_name()))
    }
}

/// Exact match on token symbols and fee tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolFilter {
    pub token0: String,
    pub token1: String,
    pub fee_tier: u32,
}

impl PoolFilter {
    pub fn new(token0: impl Into<String>, token1: impl Into<String>, fee_tier: u32) -> Self {
        Self {
            token0: token0.into(),
            token1: token1.into(),
            fee_tier,
        }
    }

    pub fn matches(&self, pool: &PoolMetadata) -> bool {
        pool.token0_symbol == self.token0
            && pool.token1_symbol == self.token1
            && pool.fee_tier == self.fee_tier
    }
}

/// Read every pool from a registry CSV
///
/// Columns beyond those of [`PoolMetadata`] are ignored.
pub fn load_pools(path: impl AsRef<Path>) -> Result<Vec<PoolMetadata>, TableError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| TableError::csv(path, e))?;

    let pools = reader
        .deserialize::<PoolMetadata>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TableError::csv(path, e))?;

    debug!(path = %path.display(), pools = pools.len(), "Loaded pool registry");
    Ok(pools)
}

/// Filter, order by volume descending and truncate
///
/// Pools with equal volume keep their registry order.
pub fn select_pools(
    pools: Vec<PoolMetadata>,
    filter: Option<&PoolFilter>,
    max_pools: usize,
) -> Vec<PoolMetadata> {
    let mut selected: Vec<PoolMetadata> = pools
        .into_iter()
        .filter(|pool| filter.is_none_or(|f| f.matches(pool)))
        .collect();
    selected.sort_by(|a, b| b.volume_usd.total_cmp(&a.volume_usd));
    selected.truncate(max_pools);
    selected
}
