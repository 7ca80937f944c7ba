// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tick ranges and the prices they map to

use serde::{Deserialize, Serialize};

use crate::config::constants::{MAX_TICK, MIN_TICK, TICK_BASE};
use crate::types::tokens::TokenDecimals;

/// Check a tick against the protocol bounds
pub const fn is_valid_tick(tick: i32) -> bool {
    tick >= MIN_TICK && tick <= MAX_TICK
}

/// Human-readable price of token0 in token1 at a tick
///
/// `TICK_BASE^tick × 10^(decimals0 - decimals1)`
///
/// # Examples
///
/// ```
/// use liqscan::{tick_to_price, TokenDecimals};
///
/// let price = tick_to_price(0, TokenDecimals::STANDARD, TokenDecimals::STANDARD);
/// assert_eq!(price, 1.0);
/// ```
pub fn tick_to_price(tick: i32, token0: TokenDecimals, token1: TokenDecimals) -> f64 {
    TICK_BASE.powi(tick) * TokenDecimals::price_adjustment(token0, token1)
}

/// Inclusive tick interval `[lower, upper]` covered by a liquidity position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickRange {
    /// Lower boundary (inclusive)
    pub lower: i32,
    /// Upper boundary (inclusive)
    pub upper: i32,
}

impl TickRange {
    /// Create a range without validation
    pub const fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    /// Whether `lower <= upper`
    pub const fn is_ordered(&self) -> bool {
        self.lower <= self.upper
    }

    /// Whether both boundaries lie within the protocol bounds
    pub const fn is_within_bounds(&self) -> bool {
        is_valid_tick(self.lower) && is_valid_tick(self.upper)
    }

    /// Inclusive containment on both ends
    pub const fn contains(&self, tick: i32) -> bool {
        self.lower <= tick && tick <= self.upper
    }

    /// Prices at both boundaries for the given token pair
    pub fn price_bounds(&self, token0: TokenDecimals, token1: TokenDecimals) -> PriceBounds {
        PriceBounds {
            lower: tick_to_price(self.lower, token0, token1),
            upper: tick_to_price(self.upper, token0, token1),
        }
    }
}

impl std::fmt::Display for TickRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Prices `(p_lower, p_upper)` at the boundaries of a tick range
///
/// Intermediate value for liquidity estimation; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    /// Price at the lower tick
    pub lower: f64,
    /// Price at the upper tick
    pub upper: f64,
}

impl PriceBounds {
    /// `(√p_lower, √p_upper)`
    pub fn sqrt(&self) -> (f64, f64) {
        (self.lower.sqrt(), self.upper.sqrt())
    }
}
