// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Liquidity decimal exponent inference
//!
//! Raw liquidity magnitudes in subgraph exports carry an unpublished decimal
//! scale. For every mint this module computes a reference liquidity from the
//! token amounts and the position's price range, takes
//! `round(log10(raw / reference))` as a candidate exponent and returns the
//! most frequent candidate.
//!
//! The result is a statistical estimate. It is logged and recorded in the
//! pool report so that it can be double checked.
//!
//! # Examples
//!
//! ```rust
//! use alloy_primitives::U256;
//! use liqscan::{infer_decimal_exponent, LiquidityEvent, TokenDecimals, UnixTimestamp};
//!
//! // token1-only position over [0, 10]: reference liquidity ≈ 2000
//! let mint = LiquidityEvent::mint(UnixTimestamp(1), 0, 10, U256::from(2_000_000_000u64))
//!     .with_token_amounts(0.0, 1.0);
//! let decimals = infer_decimal_exponent(
//!     &[mint],
//!     TokenDecimals::STANDARD,
//!     TokenDecimals::STANDARD,
//! )?;
//! assert_eq!(decimals.exponent(), 6);
//! # Ok::<(), liqscan::DecimalInferenceError>(())
//! ```

mod estimator;

pub use estimator::{ImpliedPriceEstimator, LiquidityEstimator};

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::errors::DecimalInferenceError;
use crate::events::LiquidityEvent;
use crate::tracing::spans;
use crate::types::tokens::{raw_to_f64, LiquidityDecimals, TokenDecimals};

/// Counts of candidate exponents over a set of mint events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExponentHistogram {
    counts: BTreeMap<i32, usize>,
    total: usize,
    excluded: usize,
}

impl ExponentHistogram {
    /// Empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a usable candidate
    pub fn record(&mut self, exponent: i32) {
        *self.counts.entry(exponent).or_insert(0) += 1;
        self.total += 1;
    }

    /// Record an event that produced no candidate
    pub fn exclude(&mut self) {
        self.excluded += 1;
    }

    /// Number of usable candidates
    pub fn usable(&self) -> usize {
        self.total
    }

    /// Number of events that produced no candidate
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    pub fn count(&self, exponent: i32) -> usize {
        self.counts.get(&exponent).copied().unwrap_or(0)
    }

    /// Iterate `(exponent, count)` in ascending exponent order
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(exponent, count)| (*exponent, *count))
    }

    /// Most frequent exponent; ties go to the smallest exponent
    pub fn mode(&self) -> Option<i32> {
        // ascending iteration keeps the smallest exponent among equal counts
        let mut best: Option<(i32, usize)> = None;
        for (exponent, count) in self.iter() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((exponent, count)),
            }
        }
        best.map(|(exponent, _)| exponent)
    }
}

/// Infers the liquidity decimal exponent of a pool from its mint events
///
/// The reference liquidity is supplied by a [`LiquidityEstimator`]; the
/// default is [`ImpliedPriceEstimator`].
pub struct DecimalInferenceEngine {
    estimator: Box<dyn LiquidityEstimator>,
}

impl Default for DecimalInferenceEngine {
    fn default() -> Self {
        Self::new(Box::new(ImpliedPriceEstimator))
    }
}

impl std::fmt::Debug for DecimalInferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecimalInferenceEngine").finish_non_exhaustive()
    }
}

impl DecimalInferenceEngine {
    pub fn new(estimator: Box<dyn LiquidityEstimator>) -> Self {
        Self { estimator }
    }

    /// Candidate exponent for one mint, or `None` when it is unusable
    ///
    /// The event is expected to be validated already.
    pub fn candidate(
        &self,
        mint: &LiquidityEvent,
        token0_decimals: TokenDecimals,
        token1_decimals: TokenDecimals,
    ) -> Option<i32> {
        let bounds = mint.range.price_bounds(token0_decimals, token1_decimals);
        let reference = self
            .estimator
            .reference_liquidity(mint.amount0, mint.amount1, bounds);
        if !(reference.is_finite() && reference > 0.0) {
            return None;
        }

        let candidate = (raw_to_f64(mint.raw_amount) / reference)
            .log10()
            .round_ties_even();
        if !candidate.is_finite() || candidate < f64::from(i32::MIN) || candidate > f64::from(i32::MAX)
        {
            return None;
        }
        Some(candidate as i32)
    }

    /// Validate every mint and collect the candidate histogram
    pub fn histogram(
        &self,
        mints: &[LiquidityEvent],
        token0_decimals: TokenDecimals,
        token1_decimals: TokenDecimals,
    ) -> Result<ExponentHistogram, DecimalInferenceError> {
        for mint in mints {
            mint.validate()?;
            mint.validate_amounts()?;
        }

        let mut histogram = ExponentHistogram::new();
        for mint in mints {
            match self.candidate(mint, token0_decimals, token1_decimals) {
                Some(exponent) => histogram.record(exponent),
                None => histogram.exclude(),
            }
        }
        Ok(histogram)
    }

    /// Most frequent candidate exponent over `mints`
    ///
    /// # Errors
    ///
    /// - [`DecimalInferenceError::InsufficientData`] when `mints` is empty or
    ///   no event produced a candidate
    /// - [`DecimalInferenceError::Event`] when a mint has a malformed tick
    ///   range or negative/non-finite token amounts
    pub fn infer(
        &self,
        mints: &[LiquidityEvent],
        token0_decimals: TokenDecimals,
        token1_decimals: TokenDecimals,
    ) -> Result<LiquidityDecimals, DecimalInferenceError> {
        let span = spans::infer_decimal_exponent(
            mints.len(),
            token0_decimals.as_u8(),
            token1_decimals.as_u8(),
        );
        let _guard = span.enter();

        let histogram = self.histogram(mints, token0_decimals, token1_decimals)?;
        debug!(
            usable = histogram.usable(),
            excluded = histogram.excluded(),
            distinct = histogram.counts.len(),
            "Collected exponent candidates"
        );

        let exponent = histogram
            .mode()
            .ok_or_else(|| DecimalInferenceError::insufficient_data(mints.len(), 0))?;
        let decimals = LiquidityDecimals::new(exponent);

        info!(
            exponent,
            support = histogram.count(exponent),
            usable = histogram.usable(),
            token0_decimals = token0_decimals.as_u8(),
            token1_decimals = token1_decimals.as_u8(),
            "Inferred liquidity decimals {decimals}, double check against a known position"
        );

        Ok(decimals)
    }
}

/// Infer the liquidity exponent with the default estimator
pub fn infer_decimal_exponent(
    mints: &[LiquidityEvent],
    token0_decimals: TokenDecimals,
    token1_decimals: TokenDecimals,
) -> Result<LiquidityDecimals, DecimalInferenceError> {
    DecimalInferenceEngine::default().infer(mints, token0_decimals, token1_decimals)
}
