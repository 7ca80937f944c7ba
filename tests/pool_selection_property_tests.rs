// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for pool registry selection

use liqscan::{select_pools, PoolFilter, PoolMetadata};
use proptest::prelude::*;

// Helper to generate registry rows over a handful of pairs and fee tiers
fn arb_pool() -> impl Strategy<Value = PoolMetadata> {
    (
        prop_oneof![Just("DAI"), Just("USDC"), Just("WBTC")],
        prop_oneof![Just(500u32), Just(3000u32), Just(10_000u32)],
        0.0f64..1e9,
        any::<u32>(),
    )
        .prop_map(|(token0, fee_tier, volume_usd, n)| PoolMetadata {
            id: format!("0x{n:08x}"),
            fee_tier,
            token0_symbol: token0.to_string(),
            token0_decimals: 18,
            token1_symbol: "WETH".to_string(),
            token1_decimals: 18,
            volume_usd,
        })
}

proptest! {
    /// Property: selection is ordered by volume, highest first
    #[test]
    fn prop_selection_sorted_by_volume(
        pools in prop::collection::vec(arb_pool(), 0..50),
        max_pools in 0usize..60,
    ) {
        let selected = select_pools(pools, None, max_pools);
        prop_assert!(selected.windows(2).all(|w| w[0].volume_usd >= w[1].volume_usd));
    }

    /// Property: selection never exceeds the limit and keeps only matching pools
    #[test]
    fn prop_selection_respects_filter_and_limit(
        pools in prop::collection::vec(arb_pool(), 0..50),
        max_pools in 0usize..60,
    ) {
        let filter = PoolFilter::new("DAI", "WETH", 3000);
        let matching = pools.iter().filter(|p| filter.matches(p)).count();
        let selected = select_pools(pools, Some(&filter), max_pools);

        prop_assert_eq!(selected.len(), matching.min(max_pools));
        prop_assert!(selected.iter().all(|p| filter.matches(p)));
    }
}
