// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Protocol constants and batch defaults
//!
//! This module centralizes the concentrated-liquidity constants and the default
//! values used by the batch driver, so they are defined exactly once.

/// Price ratio between two adjacent ticks: `price = TICK_BASE^tick`
pub const TICK_BASE: f64 = 1.0001;

/// Smallest tick a position boundary or pool price can take (`int24` protocol bound)
pub const MIN_TICK: i32 = -887_272;

/// Largest tick a position boundary or pool price can take (`int24` protocol bound)
pub const MAX_TICK: i32 = 887_272;

/// Defaults for the batch driver
pub mod defaults {
    /// Pools processed per run, highest volume first
    pub const MAX_POOLS: usize = 200;

    /// Pools processed at the same time
    pub const MAX_CONCURRENT_POOLS: usize = 4;

    /// Swaps covered by the forward price window (current swap included)
    pub const LOOK_AHEAD_STEPS: usize = 500;

    /// Lower quantile of the forward price window
    pub const FORWARD_QUANTILE_LOW: f64 = 0.15;

    /// Upper quantile of the forward price window
    pub const FORWARD_QUANTILE_HIGH: f64 = 0.70;

    /// Directory holding `swaps/`, `mints/` and `burns/` tables
    pub const DATA_DIR: &str = "data/raw_data/uniswap_v3";

    /// Directory receiving augmented swap tables and pool reports
    pub const OUTPUT_DIR: &str = "data/simulator";

    /// Pool registry file name inside the data directory
    pub const POOLS_FILE: &str = "pools.csv";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_bounds_are_symmetric() {
        assert_eq!(MIN_TICK, -MAX_TICK);
    }

    #[test]
    fn test_tick_base_at_max_tick_is_finite() {
        let price = TICK_BASE.powi(MAX_TICK);
        assert!(price.is_finite());
        assert!(TICK_BASE.powi(MIN_TICK) > 0.0);
    }

    #[test]
    fn test_forward_quantiles_are_ordered() {
        assert!(defaults::FORWARD_QUANTILE_LOW < defaults::FORWARD_QUANTILE_HIGH);
        assert!((0.0..=1.0).contains(&defaults::FORWARD_QUANTILE_HIGH));
    }
}
