// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Liquidity decimal scale type

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Power-of-ten exponent applied to raw liquidity magnitudes
///
/// Subgraph exports report position liquidity as a large fixed-point integer
/// whose decimal scale is not published. Once inferred, the scale converts a
/// raw magnitude into human-readable liquidity: `raw × 10^-exponent`.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use bigdecimal::BigDecimal;
/// use liqscan::LiquidityDecimals;
/// use std::str::FromStr;
///
/// let scale = LiquidityDecimals::new(3);
/// let liquidity = scale.scale(U256::from(1_234_500u64));
/// assert_eq!(liquidity, BigDecimal::from_str("1234.5").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiquidityDecimals(i32);

impl LiquidityDecimals {
    /// No rescaling: deltas equal raw magnitudes
    pub const RAW: Self = Self(0);

    /// Create a scale from its exponent
    pub const fn new(exponent: i32) -> Self {
        Self(exponent)
    }

    /// Get the exponent
    pub const fn exponent(&self) -> i32 {
        self.0
    }

    /// Exact human-readable liquidity for a raw magnitude
    pub fn scale(&self, raw: U256) -> BigDecimal {
        // `{digits}e{power}` is parsed exactly; digits of a U256 are always valid
        let literal = format!("{}e{}", raw, -i64::from(self.0));
        BigDecimal::from_str(&literal).unwrap_or_else(|e| {
            tracing::warn!(raw = %raw, error = %e, "Failed to parse raw liquidity, using 0");
            BigDecimal::from(0)
        })
    }
}

impl From<i32> for LiquidityDecimals {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for LiquidityDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "10^{}", -i64::from(self.0))
    }
}

/// Lossy conversion of a raw magnitude to f64
///
/// Only used for order-of-magnitude estimates; exact arithmetic goes through
/// [`LiquidityDecimals::scale`].
pub fn raw_to_f64(raw: U256) -> f64 {
    raw.to_string().parse::<f64>().unwrap_or_else(|e| {
        tracing::warn!(raw = %raw, error = %e, "Failed to parse raw liquidity to f64, using 0.0");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_scale_is_identity() {
        let raw = U256::from(987_654_321u64);
        assert_eq!(
            LiquidityDecimals::RAW.scale(raw),
            BigDecimal::from(987_654_321u64)
        );
    }

    #[test]
    fn test_positive_exponent_divides() {
        let scale = LiquidityDecimals::new(6);
        assert_eq!(
            scale.scale(U256::from(2_500_000u64)),
            BigDecimal::from_str("2.5").unwrap()
        );
    }

    #[test]
    fn test_negative_exponent_multiplies() {
        let scale = LiquidityDecimals::new(-2);
        assert_eq!(scale.scale(U256::from(7u64)), BigDecimal::from(700));
    }

    #[test]
    fn test_scale_beyond_u128() {
        // 10^40 raw units at scale 38 -> 100
        let raw = U256::from(10u64).pow(U256::from(40u64));
        assert_eq!(
            LiquidityDecimals::new(38).scale(raw),
            BigDecimal::from(100)
        );
    }

    #[test]
    fn test_raw_to_f64() {
        assert_eq!(raw_to_f64(U256::ZERO), 0.0);
        assert_eq!(raw_to_f64(U256::from(1_000_000u64)), 1e6);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(LiquidityDecimals::new(12).to_string(), "10^-12");
        assert_eq!(LiquidityDecimals::new(-3).to_string(), "10^3");
    }
}
