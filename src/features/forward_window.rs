// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Look-ahead price statistics over the swap stream
//!
//! For swap `i` the window covers swaps `[i, min(i + N, n))`, the current
//! swap included. Quantiles use lower interpolation: the element at index
//! `⌊q·(len − 1)⌋` of the sorted window.

use std::cmp::Ordering;

use crate::config::constants::defaults;
use crate::errors::ConfigError;

/// Output column names, in the order [`ForwardPrices::values`] returns them
pub const FORWARD_WINDOW_COLUMNS: [&str; 5] = [
    "p_current",
    "p_min_next",
    "p_1_next",
    "p_2_next",
    "p_max_next",
];

/// Price statistics of one swap's forward window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardPrices {
    /// Price at the swap itself
    pub current: f64,
    pub min_next: f64,
    /// Lower quantile of the window
    pub low_next: f64,
    /// Upper quantile of the window
    pub high_next: f64,
    pub max_next: f64,
}

impl ForwardPrices {
    pub fn values(&self) -> [f64; 5] {
        [
            self.current,
            self.min_next,
            self.low_next,
            self.high_next,
            self.max_next,
        ]
    }
}

/// Forward window parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardPriceWindow {
    look_ahead_steps: usize,
    low_quantile: f64,
    high_quantile: f64,
}

impl Default for ForwardPriceWindow {
    fn default() -> Self {
        Self {
            look_ahead_steps: defaults::LOOK_AHEAD_STEPS,
            low_quantile: defaults::FORWARD_QUANTILE_LOW,
            high_quantile: defaults::FORWARD_QUANTILE_HIGH,
        }
    }
}

impl ForwardPriceWindow {
    /// Create a window after checking its parameters
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `look_ahead_steps` is zero
    /// or a quantile lies outside `[0, 1]`.
    pub fn new(
        look_ahead_steps: usize,
        low_quantile: f64,
        high_quantile: f64,
    ) -> Result<Self, ConfigError> {
        if look_ahead_steps == 0 {
            return Err(ConfigError::invalid_value(
                "look_ahead_steps",
                "0",
                "window must cover at least one swap",
            ));
        }
        for (key, quantile) in [("low_quantile", low_quantile), ("high_quantile", high_quantile)] {
            if !(0.0..=1.0).contains(&quantile) {
                return Err(ConfigError::invalid_value(
                    key,
                    quantile.to_string(),
                    "quantile must lie in [0, 1]",
                ));
            }
        }
        Ok(Self {
            look_ahead_steps,
            low_quantile,
            high_quantile,
        })
    }

    pub fn look_ahead_steps(&self) -> usize {
        self.look_ahead_steps
    }

    /// Statistics for every position of `prices`
    ///
    /// The window is kept as a sorted buffer while walking from the last
    /// swap backwards: each step inserts the current price and evicts the
    /// one that fell out of range.
    pub fn compute(&self, prices: &[f64]) -> Vec<ForwardPrices> {
        let mut window: Vec<f64> = Vec::with_capacity(self.look_ahead_steps.min(prices.len()));
        let mut out = vec![
            ForwardPrices {
                current: 0.0,
                min_next: 0.0,
                low_next: 0.0,
                high_next: 0.0,
                max_next: 0.0,
            };
            prices.len()
        ];

        for i in (0..prices.len()).rev() {
            if let Some(&evicted) = prices.get(i + self.look_ahead_steps) {
                if let Ok(at) = window.binary_search_by(|p| p.total_cmp(&evicted)) {
                    window.remove(at);
                }
            }
            let at = window
                .binary_search_by(|p| match p.total_cmp(&prices[i]) {
                    Ordering::Equal => Ordering::Less,
                    other => other,
                })
                .unwrap_or_else(|at| at);
            window.insert(at, prices[i]);

            out[i] = self.summarize(prices[i], &window);
        }
        out
    }

    fn summarize(&self, current: f64, sorted: &[f64]) -> ForwardPrices {
        ForwardPrices {
            current,
            min_next: sorted[0],
            low_next: quantile_lower(sorted, self.low_quantile),
            high_next: quantile_lower(sorted, self.high_quantile),
            max_next: sorted[sorted.len() - 1],
        }
    }
}

/// Element at `⌊q·(len − 1)⌋` of a sorted, non-empty slice
pub fn quantile_lower(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len().saturating_sub(1);
    let index = ((q * last as f64).floor() as usize).min(last);
    sorted[index]
}
