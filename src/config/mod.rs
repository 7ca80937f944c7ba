// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for liqscan batch runs
//!
//! This module controls where tables are read from and written to, which
//! pools are selected and how many are processed at once.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use liqscan::LiqscanConfig;
//!
//! let config = LiqscanConfig::default();
//! assert_eq!(config.max_pools, 200);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use liqscan::{LiqscanConfigBuilder, PoolFilter};
//!
//! let config = LiqscanConfigBuilder::new()
//!     .data_dir("/data/uniswap_v3")
//!     .pool_filter(PoolFilter::new("DAI", "WETH", 3000))
//!     .max_concurrent_pools(8)
//!     .build();
//! assert_eq!(config.pools_path().to_str(), Some("/data/uniswap_v3/pools.csv"));
//! ```

use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::features::ForwardPriceWindow;
use crate::pools::{PoolFilter, PoolMetadata};
use crate::tables::TableKind;

pub mod constants;

use constants::defaults;

/// Environment variable names read by [`LiqscanConfig::from_env`]
pub mod env {
    pub const DATA_DIR: &str = "LIQSCAN_DATA_DIR";
    pub const OUTPUT_DIR: &str = "LIQSCAN_OUTPUT_DIR";
    pub const POOLS_FILE: &str = "LIQSCAN_POOLS_FILE";
    pub const TOKEN0: &str = "LIQSCAN_TOKEN0";
    pub const TOKEN1: &str = "LIQSCAN_TOKEN1";
    pub const FEE_TIER: &str = "LIQSCAN_FEE_TIER";
    pub const MAX_POOLS: &str = "LIQSCAN_MAX_POOLS";
    pub const MAX_CONCURRENT_POOLS: &str = "LIQSCAN_MAX_CONCURRENT_POOLS";
    pub const LOOK_AHEAD_STEPS: &str = "LIQSCAN_LOOK_AHEAD_STEPS";
    pub const FORWARD_WINDOW: &str = "LIQSCAN_FORWARD_WINDOW";
}

/// Configuration for a batch run
///
/// Use [`LiqscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq)]
pub struct LiqscanConfig {
    /// Directory holding `swaps/`, `mints/` and `burns/` tables
    /// Default: `data/raw_data/uniswap_v3`
    pub data_dir: PathBuf,

    /// Directory receiving augmented tables and reports
    /// Default: `data/simulator`
    pub output_dir: PathBuf,

    /// Pool registry; relative paths resolve against `data_dir`
    /// Default: `pools.csv`
    pub pools_file: PathBuf,

    /// Restrict selection to one pair and fee tier
    /// Default: None (every pool in the registry)
    pub pool_filter: Option<PoolFilter>,

    /// Pools processed per run, highest volume first
    /// Default: 200
    pub max_pools: usize,

    /// Pools processed at the same time (at least 1)
    /// Default: 4
    pub max_concurrent_pools: usize,

    /// Forward price window features
    /// Default: None (not computed)
    pub forward_window: Option<ForwardPriceWindow>,
}

impl Default for LiqscanConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(defaults::DATA_DIR),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            pools_file: PathBuf::from(defaults::POOLS_FILE),
            pool_filter: None,
            max_pools: defaults::MAX_POOLS,
            max_concurrent_pools: defaults::MAX_CONCURRENT_POOLS,
            forward_window: None,
        }
    }
}

impl LiqscanConfig {
    /// Load configuration from the process environment
    ///
    /// Unset variables keep their defaults. `LIQSCAN_TOKEN0`,
    /// `LIQSCAN_TOKEN1` and `LIQSCAN_FEE_TIER` form one filter and must be
    /// set together.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = LiqscanConfigBuilder::new();

        if let Some(dir) = lookup(env::DATA_DIR) {
            builder = builder.data_dir(dir);
        }
        if let Some(dir) = lookup(env::OUTPUT_DIR) {
            builder = builder.output_dir(dir);
        }
        if let Some(file) = lookup(env::POOLS_FILE) {
            builder = builder.pools_file(file);
        }

        match (lookup(env::TOKEN0), lookup(env::TOKEN1), lookup(env::FEE_TIER)) {
            (None, None, None) => {}
            (Some(token0), Some(token1), Some(fee_tier)) => {
                let fee_tier = parse_var::<u32>(env::FEE_TIER, &fee_tier)?;
                builder = builder.pool_filter(PoolFilter::new(token0, token1, fee_tier));
            }
            (token0, token1, fee_tier) => {
                let set: Vec<String> = [
                    (env::TOKEN0, token0),
                    (env::TOKEN1, token1),
                    (env::FEE_TIER, fee_tier),
                ]
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| format!("{key}={v}")))
                .collect();
                return Err(ConfigError::invalid_value(
                    "pool filter",
                    set.join(", "),
                    format!(
                        "{}, {} and {} must be set together",
                        env::TOKEN0,
                        env::TOKEN1,
                        env::FEE_TIER
                    ),
                ));
            }
        }

        if let Some(value) = lookup(env::MAX_POOLS) {
            builder = builder.max_pools(parse_var(env::MAX_POOLS, &value)?);
        }
        if let Some(value) = lookup(env::MAX_CONCURRENT_POOLS) {
            let max = parse_var::<usize>(env::MAX_CONCURRENT_POOLS, &value)?;
            if max == 0 {
                return Err(ConfigError::invalid_value(
                    env::MAX_CONCURRENT_POOLS,
                    value,
                    "must be at least 1",
                ));
            }
            builder = builder.max_concurrent_pools(max);
        }

        let forward_enabled = match lookup(env::FORWARD_WINDOW) {
            Some(value) => parse_flag(env::FORWARD_WINDOW, &value)?,
            None => false,
        };
        if forward_enabled {
            let steps = match lookup(env::LOOK_AHEAD_STEPS) {
                Some(value) => parse_var(env::LOOK_AHEAD_STEPS, &value)?,
                None => defaults::LOOK_AHEAD_STEPS,
            };
            let window = ForwardPriceWindow::new(
                steps,
                defaults::FORWARD_QUANTILE_LOW,
                defaults::FORWARD_QUANTILE_HIGH,
            )
            .map_err(|_| {
                ConfigError::invalid_value(
                    env::LOOK_AHEAD_STEPS,
                    steps.to_string(),
                    "window must cover at least one swap",
                )
            })?;
            builder = builder.forward_window(window);
        }

        Ok(builder.build())
    }

    /// Registry location
    pub fn pools_path(&self) -> PathBuf {
        self.data_dir.join(&self.pools_file)
    }

    /// Input table location for a pool
    pub fn table_path(&self, pool: &PoolMetadata, kind: TableKind) -> PathBuf {
        pool.table_path(&self.data_dir, kind)
    }

    /// Augmented swap table location for a pool
    pub fn output_path(&self, pool: &PoolMetadata) -> PathBuf {
        self.output_dir.join(format!("{}.csv", pool.file_stem()))
    }

    /// Report location for a pool
    pub fn report_path(&self, pool: &PoolMetadata) -> PathBuf {
        self.output_dir.join(format!("{}.json", pool.file_stem()))
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::invalid_value(key, value, e.to_string()))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::invalid_value(key, value, "expected a boolean")),
    }
}

/// Builder for [`LiqscanConfig`]
///
/// Provides a fluent API for constructing liqscan configurations.
///
/// # Example
///
/// ```rust
/// use liqscan::{ForwardPriceWindow, LiqscanConfigBuilder};
///
/// let config = LiqscanConfigBuilder::new()
///     .output_dir("out")
///     .max_pools(10)
///     .forward_window(ForwardPriceWindow::default())
///     .build();
/// assert!(config.forward_window.is_some());
/// ```
#[derive(Debug, Default)]
pub struct LiqscanConfigBuilder {
    config: LiqscanConfig,
}

impl LiqscanConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.data_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn pools_file(mut self, file: impl AsRef<Path>) -> Self {
        self.config.pools_file = file.as_ref().to_path_buf();
        self
    }

    pub fn pool_filter(mut self, filter: PoolFilter) -> Self {
        self.config.pool_filter = Some(filter);
        self
    }

    pub fn max_pools(mut self, max: usize) -> Self {
        self.config.max_pools = max;
        self
    }

    /// Set concurrency; zero is raised to one
    pub fn max_concurrent_pools(mut self, max: usize) -> Self {
        self.config.max_concurrent_pools = max.max(1);
        self
    }

    pub fn forward_window(mut self, window: ForwardPriceWindow) -> Self {
        self.config.forward_window = Some(window);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> LiqscanConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = LiqscanConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LiqscanConfig::default());
        assert_eq!(
            config.pools_path(),
            PathBuf::from("data/raw_data/uniswap_v3/pools.csv")
        );
    }

    #[test]
    fn test_full_environment() {
        let config = LiqscanConfig::from_lookup(lookup(&[
            (env::DATA_DIR, "/in"),
            (env::OUTPUT_DIR, "/out"),
            (env::TOKEN0, "DAI"),
            (env::TOKEN1, "WETH"),
            (env::FEE_TIER, "3000"),
            (env::MAX_POOLS, "5"),
            (env::MAX_CONCURRENT_POOLS, "2"),
            (env::FORWARD_WINDOW, "true"),
            (env::LOOK_AHEAD_STEPS, "50"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/in"));
        assert_eq!(config.pool_filter, Some(PoolFilter::new("DAI", "WETH", 3000)));
        assert_eq!(config.max_pools, 5);
        assert_eq!(config.max_concurrent_pools, 2);
        assert_eq!(config.forward_window.map(|w| w.look_ahead_steps()), Some(50));
    }

    #[test]
    fn test_partial_pool_filter_is_rejected() {
        let err = LiqscanConfig::from_lookup(lookup(&[(env::TOKEN0, "DAI")])).unwrap_err();
        assert!(err.to_string().contains("must be set together"));
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = LiqscanConfig::from_lookup(lookup(&[(env::MAX_POOLS, "many")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == env::MAX_POOLS));

        let err = LiqscanConfig::from_lookup(lookup(&[(env::MAX_CONCURRENT_POOLS, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = LiqscanConfig::from_lookup(lookup(&[
            (env::FORWARD_WINDOW, "1"),
            (env::LOOK_AHEAD_STEPS, "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == env::LOOK_AHEAD_STEPS));
    }

    #[test]
    fn test_output_paths_follow_pool_stem() {
        let config = LiqscanConfigBuilder::new().output_dir("/out").build();
        let pool = PoolMetadata {
            id: "0x1".to_string(),
            fee_tier: 500,
            token0_symbol: "USDC".to_string(),
            token0_decimals: 6,
            token1_symbol: "WETH".to_string(),
            token1_decimals: 18,
            volume_usd: 0.0,
        };
        assert_eq!(
            config.output_path(&pool),
            PathBuf::from("/out/USDCWETH_pool_fee_500.csv")
        );
        assert_eq!(
            config.report_path(&pool),
            PathBuf::from("/out/USDCWETH_pool_fee_500.json")
        );
    }

    #[test]
    fn test_builder_raises_zero_concurrency() {
        let config = LiqscanConfigBuilder::new().max_concurrent_pools(0).build();
        assert_eq!(config.max_concurrent_pools, 1);
    }
}
