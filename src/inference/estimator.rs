// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Reference liquidity estimation from token amounts
//!
//! The decimal inference compares each raw liquidity magnitude against a
//! liquidity estimate computed independently from the token amounts and the
//! position's price range. The estimate is pluggable through
//! [`LiquidityEstimator`]; [`ImpliedPriceEstimator`] is the default.

use crate::types::tick::PriceBounds;

/// Estimates position liquidity from deposited token amounts
///
/// Implementations return a human-readable liquidity magnitude. Values that
/// are zero, negative or non-finite mark the event as unusable for inference.
///
/// The trait is object-safe, allowing runtime pluggability via
/// `Box<dyn LiquidityEstimator>`.
///
/// # Example: single-sided token1 estimate
///
/// ```rust
/// use liqscan::{LiquidityEstimator, PriceBounds};
///
/// struct Token1Only;
///
/// impl LiquidityEstimator for Token1Only {
///     fn reference_liquidity(&self, _amount0: f64, amount1: f64, bounds: PriceBounds) -> f64 {
///         let (sqrt_lower, sqrt_upper) = bounds.sqrt();
///         amount1 / (sqrt_upper - sqrt_lower)
///     }
/// }
///
/// let bounds = PriceBounds { lower: 1.0, upper: 4.0 };
/// assert_eq!(Token1Only.reference_liquidity(0.0, 10.0, bounds), 10.0);
/// ```
pub trait LiquidityEstimator: Send + Sync {
    /// Liquidity implied by `amount0`/`amount1` over `bounds`
    fn reference_liquidity(&self, amount0: f64, amount1: f64, bounds: PriceBounds) -> f64;
}

/// Solves for liquidity with the in-range price eliminated
///
/// A position over `[p_l, p_u]` holding `x` token0 and `y` token1 at an
/// unknown price `p` satisfies
///
/// ```text
/// x = L (1/√p − 1/√p_u)
/// y = L (√p − √p_l)
/// ```
///
/// Eliminating `√p` gives `a·L² − b·L − x·y = 0` with `a = 1 − √(p_l/p_u)`
/// and `b = x·√p_l + y/√p_u`, whose positive root is returned. With `x = 0`
/// it reduces to `y / (√p_u − √p_l)`, with `y = 0` to
/// `x·√p_l·√p_u / (√p_u − √p_l)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImpliedPriceEstimator;

impl LiquidityEstimator for ImpliedPriceEstimator {
    fn reference_liquidity(&self, amount0: f64, amount1: f64, bounds: PriceBounds) -> f64 {
        let (sqrt_lower, sqrt_upper) = bounds.sqrt();
        if !(sqrt_lower > 0.0 && sqrt_upper > sqrt_lower) {
            // empty or inverted price interval
            return f64::NAN;
        }

        let a = 1.0 - sqrt_lower / sqrt_upper;
        let b = amount0 * sqrt_lower + amount1 / sqrt_upper;
        let discriminant = b * b + 4.0 * a * amount0 * amount1;

        (b + discriminant.sqrt()) / (2.0 * a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(lower: f64, upper: f64) -> PriceBounds {
        PriceBounds { lower, upper }
    }

    fn close(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-9
    }

    #[test]
    fn test_token1_only_matches_single_sided_formula() {
        // y / (√4 − √1) = 10 / 1
        let liquidity = ImpliedPriceEstimator.reference_liquidity(0.0, 10.0, bounds(1.0, 4.0));
        assert!(close(liquidity, 10.0));
    }

    #[test]
    fn test_token0_only_matches_single_sided_formula() {
        // x·√p_l·√p_u / (√p_u − √p_l) = 5·1·2 / 1
        let liquidity = ImpliedPriceEstimator.reference_liquidity(5.0, 0.0, bounds(1.0, 4.0));
        assert!(close(liquidity, 10.0));
    }

    #[test]
    fn test_two_sided_recovers_position_liquidity() {
        // L = 1000 at √p = 1.5 within [1, 4]
        let l = 1000.0;
        let sqrt_p: f64 = 1.5;
        let x = l * (1.0 / sqrt_p - 1.0 / 2.0);
        let y = l * (sqrt_p - 1.0);
        let liquidity = ImpliedPriceEstimator.reference_liquidity(x, y, bounds(1.0, 4.0));
        assert!(close(liquidity, l));
    }

    #[test]
    fn test_zero_amounts_give_zero_liquidity() {
        let liquidity = ImpliedPriceEstimator.reference_liquidity(0.0, 0.0, bounds(1.0, 4.0));
        assert_eq!(liquidity, 0.0);
    }

    #[test]
    fn test_empty_interval_is_unusable() {
        let liquidity = ImpliedPriceEstimator.reference_liquidity(1.0, 1.0, bounds(2.0, 2.0));
        assert!(liquidity.is_nan());
    }
}
