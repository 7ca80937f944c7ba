// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Derived per-swap features for downstream simulation

mod forward_window;

pub use forward_window::{
    quantile_lower, ForwardPriceWindow, ForwardPrices, FORWARD_WINDOW_COLUMNS,
};

use crate::events::AugmentedSwap;
use crate::types::tick::tick_to_price;
use crate::types::tokens::TokenDecimals;

/// Human-readable price of token0 in token1 at every swap
pub fn swap_prices(
    swaps: &[AugmentedSwap],
    token0_decimals: TokenDecimals,
    token1_decimals: TokenDecimals,
) -> Vec<f64> {
    swaps
        .iter()
        .map(|s| tick_to_price(s.swap.tick, token0_decimals, token1_decimals))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{LiquidityState, SwapEvent};
    use crate::types::timestamp::UnixTimestamp;

    #[test]
    fn test_swap_prices_apply_decimal_adjustment() {
        let swaps = vec![AugmentedSwap {
            swap: SwapEvent::new(UnixTimestamp(1), 0),
            state: LiquidityState::empty(),
        }];
        let prices = swap_prices(&swaps, TokenDecimals::new(18), TokenDecimals::USDC);
        assert!((prices[0] - 1e12).abs() < 1.0);
    }
}
