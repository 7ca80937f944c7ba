// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// ERC-20 token decimal precision
///
/// Represents the number of decimal places for a pool token. Most ERC-20 tokens
/// use 18 decimals (like WETH), but some use different values:
/// - USDC: 6 decimals
/// - WBTC: 8 decimals
/// - Standard: 18 decimals
///
/// Pool prices derived from ticks are quoted in raw units; the difference
/// between the two tokens' decimals converts them into human-readable prices.
///
/// # Examples
///
/// ```
/// use liqscan::TokenDecimals;
///
/// let weth = TokenDecimals::STANDARD;
/// let usdc = TokenDecimals::USDC;
/// assert_eq!(weth.difference(usdc), 12);
/// assert_eq!(usdc.difference(weth), -12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Maximum reasonable decimals (following ERC-20 convention)
    pub const MAX_REASONABLE: u8 = 18;

    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// WBTC decimals (8)
    pub const WBTC: Self = Self(8);

    /// DAI decimals (18)
    pub const DAI: Self = Self(18);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Check if decimals are in reasonable range (0-18)
    ///
    /// Values over 18 are unusual and may indicate registry errors.
    pub const fn is_reasonable(&self) -> bool {
        self.0 <= Self::MAX_REASONABLE
    }

    /// Signed difference `self - other`
    pub const fn difference(&self, other: TokenDecimals) -> i32 {
        self.0 as i32 - other.0 as i32
    }

    /// Price adjustment factor between a pair: `10^(token0 - token1)`
    ///
    /// Multiplying a raw tick price by this factor yields the human-readable
    /// price of token0 in units of token1.
    pub fn price_adjustment(token0: TokenDecimals, token1: TokenDecimals) -> f64 {
        10_f64.powi(token0.difference(token1))
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
