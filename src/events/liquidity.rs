// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Mint and burn events

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::errors::EventError;
use crate::types::tick::TickRange;
use crate::types::timestamp::UnixTimestamp;
use crate::types::tokens::LiquidityDecimals;

/// Whether a liquidity event adds or removes liquidity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiquidityEventKind {
    /// Liquidity added to a position
    Mint,
    /// Liquidity removed from a position
    Burn,
}

impl LiquidityEventKind {
    pub fn name(&self) -> &'static str {
        match self {
            LiquidityEventKind::Mint => "mint",
            LiquidityEventKind::Burn => "burn",
        }
    }
}

impl std::fmt::Display for LiquidityEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A mint or burn over a tick range
///
/// The raw magnitude is kept as reported; the signed delta is derived from it
/// and the liquidity scale (`raw × 10^-exponent`, negated for burns). Until
/// [`apply_decimals`](Self::apply_decimals) is called the delta uses
/// [`LiquidityDecimals::RAW`].
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use bigdecimal::BigDecimal;
/// use liqscan::{LiquidityDecimals, LiquidityEvent, UnixTimestamp};
///
/// let mut burn = LiquidityEvent::burn(UnixTimestamp(4), 0, 10, U256::from(30_000u64));
/// burn.apply_decimals(LiquidityDecimals::new(3));
/// assert_eq!(*burn.signed_liquidity_delta(), BigDecimal::from(-30));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidityEvent {
    /// Identifier from the source table, used for de-duplication
    pub id: Option<String>,
    pub kind: LiquidityEventKind,
    pub timestamp: UnixTimestamp,
    pub range: TickRange,
    /// Raw liquidity magnitude as reported (unknown decimal scale)
    pub raw_amount: U256,
    /// Token0 amount locked or released
    pub amount0: f64,
    /// Token1 amount locked or released
    pub amount1: f64,
    signed_liquidity_delta: BigDecimal,
}

impl LiquidityEvent {
    /// Create an event with zero token amounts and a raw-scale delta
    pub fn new(
        kind: LiquidityEventKind,
        timestamp: UnixTimestamp,
        tick_lower: i32,
        tick_upper: i32,
        raw_amount: U256,
    ) -> Self {
        let mut event = Self {
            id: None,
            kind,
            timestamp,
            range: TickRange::new(tick_lower, tick_upper),
            raw_amount,
            amount0: 0.0,
            amount1: 0.0,
            signed_liquidity_delta: BigDecimal::from(0),
        };
        event.apply_decimals(LiquidityDecimals::RAW);
        event
    }

    pub fn mint(timestamp: UnixTimestamp, tick_lower: i32, tick_upper: i32, raw: U256) -> Self {
        Self::new(LiquidityEventKind::Mint, timestamp, tick_lower, tick_upper, raw)
    }

    pub fn burn(timestamp: UnixTimestamp, tick_lower: i32, tick_upper: i32, raw: U256) -> Self {
        Self::new(LiquidityEventKind::Burn, timestamp, tick_lower, tick_upper, raw)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_token_amounts(mut self, amount0: f64, amount1: f64) -> Self {
        self.amount0 = amount0;
        self.amount1 = amount1;
        self
    }

    /// Recompute the signed delta for a liquidity scale
    pub fn apply_decimals(&mut self, decimals: LiquidityDecimals) {
        let magnitude = decimals.scale(self.raw_amount);
        self.signed_liquidity_delta = match self.kind {
            LiquidityEventKind::Mint => magnitude,
            LiquidityEventKind::Burn => -magnitude,
        };
    }

    /// Consuming variant of [`apply_decimals`](Self::apply_decimals)
    pub fn rescaled(mut self, decimals: LiquidityDecimals) -> Self {
        self.apply_decimals(decimals);
        self
    }

    pub fn signed_liquidity_delta(&self) -> &BigDecimal {
        &self.signed_liquidity_delta
    }

    /// Zero-magnitude events contribute nothing to any sum
    pub fn is_zero(&self) -> bool {
        self.raw_amount.is_zero()
    }

    pub fn tick_lower(&self) -> i32 {
        self.range.lower
    }

    pub fn tick_upper(&self) -> i32 {
        self.range.upper
    }

    /// Short description used in error messages and logs
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => format!("{} {id}", self.kind),
            None => format!("{} at t={}", self.kind, self.timestamp),
        }
    }

    /// Check tick bounds and ordering
    ///
    /// A range outside the protocol bounds is malformed; a reversed range is
    /// degenerate and rejected rather than repaired.
    pub fn validate(&self) -> Result<(), EventError> {
        if !self.range.is_within_bounds() {
            return Err(EventError::malformed(
                self.label(),
                format!("tick range {} outside protocol bounds", self.range),
            ));
        }
        if !self.range.is_ordered() {
            return Err(EventError::degenerate_range(
                self.label(),
                self.range.lower,
                self.range.upper,
            ));
        }
        Ok(())
    }

    /// Check that both token amounts are finite and non-negative
    pub fn validate_amounts(&self) -> Result<(), EventError> {
        for (name, value) in [("amount0", self.amount0), ("amount1", self.amount1)] {
            if !value.is_finite() || value < 0.0 {
                return Err(EventError::malformed(
                    self.label(),
                    format!("{name} must be finite and non-negative, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mint_delta_is_positive_raw_magnitude() {
        let mint = LiquidityEvent::mint(UnixTimestamp(1), 0, 10, U256::from(100u64));
        assert_eq!(*mint.signed_liquidity_delta(), BigDecimal::from(100));
    }

    #[test]
    fn test_burn_delta_is_negated() {
        let burn = LiquidityEvent::burn(UnixTimestamp(1), 0, 10, U256::from(30u64));
        assert_eq!(*burn.signed_liquidity_delta(), BigDecimal::from(-30));
    }

    #[test]
    fn test_apply_decimals_rescales_delta_only() {
        let mint = LiquidityEvent::mint(UnixTimestamp(1), 0, 10, U256::from(1_500u64))
            .rescaled(LiquidityDecimals::new(3));
        assert_eq!(
            *mint.signed_liquidity_delta(),
            BigDecimal::from_str("1.5").unwrap()
        );
        assert_eq!(mint.raw_amount, U256::from(1_500u64));
    }

    #[test]
    fn test_validate_rejects_reversed_range() {
        let event = LiquidityEvent::mint(UnixTimestamp(1), 10, 5, U256::from(1u64));
        assert_eq!(
            event.validate(),
            Err(EventError::degenerate_range("mint at t=1", 10, 5))
        );
    }

    #[test]
    fn test_validate_rejects_out_of_bounds_tick() {
        let event = LiquidityEvent::burn(UnixTimestamp(1), -900_000, 5, U256::from(1u64))
            .with_id("0xabc");
        assert!(matches!(
            event.validate(),
            Err(EventError::MalformedEvent { ref event, .. }) if event == "burn 0xabc"
        ));
    }

    #[test]
    fn test_validate_amounts() {
        let ok = LiquidityEvent::mint(UnixTimestamp(1), 0, 1, U256::from(1u64))
            .with_token_amounts(1.0, 0.0);
        assert!(ok.validate_amounts().is_ok());

        let negative = ok.clone().with_token_amounts(-1.0, 0.0);
        assert!(negative.validate_amounts().is_err());

        let nan = ok.with_token_amounts(0.0, f64::NAN);
        assert!(nan.validate_amounts().is_err());
    }

    #[test]
    fn test_is_zero() {
        assert!(LiquidityEvent::mint(UnixTimestamp(1), 0, 1, U256::ZERO).is_zero());
        assert!(!LiquidityEvent::mint(UnixTimestamp(1), 0, 1, U256::from(1u64)).is_zero());
    }
}
