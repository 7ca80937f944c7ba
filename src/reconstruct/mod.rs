// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! As-of reconstruction of liquidity state at every swap
//!
//! Mint and burn deltas are merged into one timeline ordered by timestamp.
//! Swaps are visited in timestamp order while a cursor walks the timeline,
//! folding every event with `timestamp <= swap.timestamp` into a running
//! total and into a [`TickBoundaryIndex`] for the in-range sum.
//!
//! [`reconstruct_brute_force`] recomputes each swap's state from scratch and
//! is kept as a reference for verification.
//!
//! # Examples
//!
//! ```rust
//! use alloy_primitives::U256;
//! use bigdecimal::BigDecimal;
//! use liqscan::{reconstruct, LiquidityEvent, SwapEvent, UnixTimestamp};
//!
//! let mints = vec![
//!     LiquidityEvent::mint(UnixTimestamp(1), 0, 10, U256::from(100u64)),
//!     LiquidityEvent::mint(UnixTimestamp(3), 5, 15, U256::from(50u64)),
//! ];
//! let burns = vec![LiquidityEvent::burn(UnixTimestamp(4), 0, 10, U256::from(30u64))];
//! let swaps = vec![
//!     SwapEvent::new(UnixTimestamp(5), 7),
//!     SwapEvent::new(UnixTimestamp(2), 20),
//! ];
//!
//! let augmented = reconstruct(&mints, &burns, swaps)?;
//! // output follows swap timestamp order
//! assert_eq!(*augmented[0].cumulative_liquidity(), BigDecimal::from(100));
//! assert_eq!(*augmented[0].liquidity_in_range(), BigDecimal::from(0));
//! assert_eq!(*augmented[1].cumulative_liquidity(), BigDecimal::from(120));
//! assert_eq!(*augmented[1].liquidity_in_range(), BigDecimal::from(120));
//! # Ok::<(), liqscan::EventError>(())
//! ```

mod tick_index;

pub use tick_index::TickBoundaryIndex;

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::errors::EventError;
use crate::events::{AugmentedSwap, LiquidityEvent, LiquidityState, SwapEvent};
use crate::tracing::spans;

/// Prepared, validated timeline of liquidity deltas
///
/// Built once per pool; [`augment`](Self::augment) can then be called any
/// number of times without changing the timeline.
#[derive(Debug, Clone)]
pub struct LiquidityStateReconstructor {
    timeline: Vec<LiquidityEvent>,
    dropped_zero_events: usize,
}

impl LiquidityStateReconstructor {
    /// Validate, merge and order mint and burn events
    ///
    /// # Errors
    ///
    /// - [`EventError::MalformedEvent`] for a tick outside the protocol bounds
    /// - [`EventError::DegenerateRange`] for `tick_lower > tick_upper`
    pub fn new(mints: &[LiquidityEvent], burns: &[LiquidityEvent]) -> Result<Self, EventError> {
        for event in mints.iter().chain(burns) {
            event.validate()?;
        }

        let mut timeline: Vec<LiquidityEvent> = mints
            .iter()
            .chain(burns)
            .filter(|event| !event.is_zero())
            .cloned()
            .collect();
        let dropped_zero_events = mints.len() + burns.len() - timeline.len();
        // stable: equal timestamps keep mints before burns and input order within each
        timeline.sort_by_key(|event| event.timestamp);

        debug!(
            mints = mints.len(),
            burns = burns.len(),
            dropped_zero_events,
            "Prepared liquidity timeline"
        );

        Ok(Self {
            timeline,
            dropped_zero_events,
        })
    }

    /// Events in timeline order
    pub fn timeline(&self) -> &[LiquidityEvent] {
        &self.timeline
    }

    /// Number of zero-magnitude events removed from the timeline
    pub fn dropped_zero_events(&self) -> usize {
        self.dropped_zero_events
    }

    /// Attach the liquidity state to every swap
    ///
    /// Swaps are returned in ascending timestamp order (stable for equal
    /// timestamps). Every swap is validated before any state is computed.
    pub fn augment(&self, mut swaps: Vec<SwapEvent>) -> Result<Vec<AugmentedSwap>, EventError> {
        let span = spans::reconstruct(self.timeline.len(), swaps.len());
        let _guard = span.enter();

        for swap in &swaps {
            swap.validate()?;
        }
        swaps.sort_by_key(|swap| swap.timestamp);

        let mut index = TickBoundaryIndex::from_ranges(self.timeline.iter().map(|e| &e.range));
        let mut cumulative = BigDecimal::from(0);
        let mut cursor = 0;

        let augmented = swaps
            .into_iter()
            .map(|swap| {
                while let Some(event) = self.timeline.get(cursor) {
                    if event.timestamp > swap.timestamp {
                        break;
                    }
                    cumulative += event.signed_liquidity_delta();
                    index.add_range(&event.range, event.signed_liquidity_delta());
                    cursor += 1;
                }

                let state = LiquidityState {
                    cumulative_liquidity: cumulative.clone(),
                    liquidity_in_range: index.point(swap.tick),
                };
                AugmentedSwap { swap, state }
            })
            .collect::<Vec<_>>();

        debug!(
            swaps = augmented.len(),
            applied_events = cursor,
            "Reconstructed liquidity state"
        );

        Ok(augmented)
    }
}

/// Reconstruct the liquidity state of every swap
///
/// See [`LiquidityStateReconstructor`] for ordering and validation rules.
pub fn reconstruct(
    mints: &[LiquidityEvent],
    burns: &[LiquidityEvent],
    swaps: Vec<SwapEvent>,
) -> Result<Vec<AugmentedSwap>, EventError> {
    LiquidityStateReconstructor::new(mints, burns)?.augment(swaps)
}

/// Quadratic reference implementation of [`reconstruct`]
///
/// Each swap sums over every event independently. Results are identical to
/// [`reconstruct`], including output order and validation errors.
pub fn reconstruct_brute_force(
    mints: &[LiquidityEvent],
    burns: &[LiquidityEvent],
    mut swaps: Vec<SwapEvent>,
) -> Result<Vec<AugmentedSwap>, EventError> {
    for event in mints.iter().chain(burns) {
        event.validate()?;
    }
    for swap in &swaps {
        swap.validate()?;
    }
    swaps.sort_by_key(|swap| swap.timestamp);

    Ok(swaps
        .into_iter()
        .map(|swap| {
            let mut state = LiquidityState::empty();
            for event in mints.iter().chain(burns) {
                if event.timestamp > swap.timestamp {
                    continue;
                }
                state.cumulative_liquidity += event.signed_liquidity_delta();
                if event.range.contains(swap.tick) {
                    state.liquidity_in_range += event.signed_liquidity_delta();
                }
            }
            AugmentedSwap { swap, state }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::timestamp::UnixTimestamp;
    use crate::types::tokens::LiquidityDecimals;
    use alloy_primitives::U256;

    fn mint(t: i64, lower: i32, upper: i32, raw: u64) -> LiquidityEvent {
        LiquidityEvent::mint(UnixTimestamp(t), lower, upper, U256::from(raw))
    }

    fn burn(t: i64, lower: i32, upper: i32, raw: u64) -> LiquidityEvent {
        LiquidityEvent::burn(UnixTimestamp(t), lower, upper, U256::from(raw))
    }

    fn swap(t: i64, tick: i32) -> SwapEvent {
        SwapEvent::new(UnixTimestamp(t), tick)
    }

    fn state(swap: &AugmentedSwap) -> (BigDecimal, BigDecimal) {
        (
            swap.cumulative_liquidity().clone(),
            swap.liquidity_in_range().clone(),
        )
    }

    fn pair(cumulative: i64, in_range: i64) -> (BigDecimal, BigDecimal) {
        (BigDecimal::from(cumulative), BigDecimal::from(in_range))
    }

    #[test]
    fn test_two_mints_one_burn_scenario() {
        let mints = [mint(1, 0, 10, 100), mint(3, 5, 15, 50)];
        let burns = [burn(4, 0, 10, 30)];
        let out = reconstruct(&mints, &burns, vec![swap(5, 7), swap(2, 20)]).unwrap();

        assert_eq!(out[0].swap.timestamp, UnixTimestamp(2));
        assert_eq!(state(&out[0]), pair(100, 0));
        assert_eq!(state(&out[1]), pair(120, 120));
    }

    #[test]
    fn test_swap_before_any_event_is_empty() {
        let mints = [mint(10, 0, 10, 100)];
        let out = reconstruct(&mints, &[], vec![swap(5, 3)]).unwrap();
        assert_eq!(out[0].state, LiquidityState::empty());

        let out = reconstruct(&[], &[], vec![swap(5, 3)]).unwrap();
        assert_eq!(out[0].state, LiquidityState::empty());
    }

    #[test]
    fn test_event_at_swap_timestamp_is_included() {
        let mints = [mint(5, 0, 10, 100)];
        let out = reconstruct(&mints, &[], vec![swap(5, 10)]).unwrap();
        assert_eq!(state(&out[0]), pair(100, 100));
    }

    #[test]
    fn test_degenerate_range_rejected_before_output() {
        let mints = [mint(1, 0, 10, 100), mint(2, 10, 5, 1)];
        let err = reconstruct(&mints, &[], vec![swap(5, 7)]).unwrap_err();
        assert_eq!(err, EventError::degenerate_range("mint at t=2", 10, 5));
    }

    #[test]
    fn test_out_of_bounds_swap_tick_is_malformed() {
        let err = reconstruct(&[], &[], vec![swap(1, 0), swap(2, -887_273)]).unwrap_err();
        assert!(matches!(err, EventError::MalformedEvent { .. }));
    }

    #[test]
    fn test_zero_events_are_dropped() {
        let mints = [mint(1, 0, 10, 0), mint(2, 0, 10, 5)];
        let burns = [burn(3, 0, 10, 0)];
        let reconstructor = LiquidityStateReconstructor::new(&mints, &burns).unwrap();
        assert_eq!(reconstructor.dropped_zero_events(), 2);
        assert_eq!(reconstructor.timeline().len(), 1);
    }

    #[test]
    fn test_equal_swap_timestamps_keep_input_order() {
        let swaps = vec![
            swap(3, 1).with_id("a"),
            swap(1, 1).with_id("b"),
            swap(3, 2).with_id("c"),
        ];
        let out = reconstruct(&[], &[], swaps).unwrap();
        let ids: Vec<_> = out.iter().filter_map(|s| s.swap.id.as_deref()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_augment_is_idempotent() {
        let mints = [mint(1, -5, 5, 40), mint(2, 0, 20, 7)];
        let burns = [burn(3, -5, 5, 10)];
        let swaps = vec![swap(1, 0), swap(2, 6), swap(4, -5)];
        let reconstructor = LiquidityStateReconstructor::new(&mints, &burns).unwrap();

        let first = reconstructor.augment(swaps.clone()).unwrap();
        let second = reconstructor.augment(swaps).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rescaled_deltas_sum_exactly() {
        let decimals = LiquidityDecimals::new(4);
        let mints = [mint(1, 0, 10, 12_345).rescaled(decimals)];
        let burns = [burn(2, 0, 10, 2_345).rescaled(decimals)];
        let out = reconstruct(&mints, &burns, vec![swap(2, 0)]).unwrap();
        assert_eq!(state(&out[0]), pair(1, 1));
    }

    #[test]
    fn test_brute_force_matches_scenario() {
        let mints = [mint(1, 0, 10, 100), mint(3, 5, 15, 50)];
        let burns = [burn(4, 0, 10, 30)];
        let swaps = vec![swap(5, 7), swap(2, 20), swap(4, 15), swap(0, 0)];
        assert_eq!(
            reconstruct(&mints, &burns, swaps.clone()).unwrap(),
            reconstruct_brute_force(&mints, &burns, swaps).unwrap()
        );
    }
}
