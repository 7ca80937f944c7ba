// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fenwick tree over compressed tick boundaries
//!
//! A position over `[lower, upper]` adds its delta at `lower` and removes it
//! at `upper + 1`. The liquidity active at a tick is then the prefix sum of
//! all boundary deltas at or below that tick. Boundaries are compressed to
//! the set of coordinates that actually occur, so the tree size depends on
//! the number of distinct ranges, not on the tick domain.

use bigdecimal::BigDecimal;

use crate::types::tick::TickRange;

/// Range-add / point-query index of liquidity over ticks
#[derive(Debug, Clone)]
pub struct TickBoundaryIndex {
    /// Sorted, de-duplicated boundary coordinates
    boundaries: Vec<i64>,
    /// 1-based Fenwick tree, `tree[0]` unused
    tree: Vec<BigDecimal>,
}

impl TickBoundaryIndex {
    /// Build an empty index able to hold every range in `ranges`
    pub fn from_ranges<'a>(ranges: impl IntoIterator<Item = &'a TickRange>) -> Self {
        let mut boundaries: Vec<i64> = ranges
            .into_iter()
            .flat_map(|range| [i64::from(range.lower), i64::from(range.upper) + 1])
            .collect();
        boundaries.sort_unstable();
        boundaries.dedup();

        let tree = vec![BigDecimal::from(0); boundaries.len() + 1];
        Self { boundaries, tree }
    }

    /// Number of distinct boundary coordinates
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// True when no ranges were indexed
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Add `delta` to every tick in `range`
    ///
    /// Ranges not supplied at construction are ignored.
    pub fn add_range(&mut self, range: &TickRange, delta: &BigDecimal) {
        let (Some(start), Some(end)) = (
            self.position(i64::from(range.lower)),
            self.position(i64::from(range.upper) + 1),
        ) else {
            return;
        };
        self.add(start, delta);
        self.add(end, &-delta.clone());
    }

    /// Liquidity active at `tick`
    pub fn point(&self, tick: i32) -> BigDecimal {
        let tick = i64::from(tick);
        // count of boundaries <= tick equals the 1-based prefix length
        let mut index = self.boundaries.partition_point(|&b| b <= tick);
        let mut sum = BigDecimal::from(0);
        while index > 0 {
            sum += &self.tree[index];
            index &= index - 1;
        }
        sum
    }

    /// 1-based tree position of an exact boundary
    fn position(&self, boundary: i64) -> Option<usize> {
        self.boundaries
            .binary_search(&boundary)
            .ok()
            .map(|index| index + 1)
    }

    fn add(&mut self, mut index: usize, delta: &BigDecimal) {
        while index < self.tree.len() {
            self.tree[index] += delta;
            index += index & index.wrapping_neg();
        }
    }
}
