// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Swap events and the liquidity state attached to them

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::errors::EventError;
use crate::types::tick::is_valid_tick;
use crate::types::timestamp::UnixTimestamp;

/// A trade at a pool price tick
///
/// Only `timestamp` and `tick` take part in reconstruction. The remaining
/// columns of the source row travel in `fields`, untouched and in their
/// original column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapEvent {
    /// Identifier from the source table
    pub id: Option<String>,
    pub timestamp: UnixTimestamp,
    pub tick: i32,
    /// Pass-through column values, aligned with the source table header
    pub fields: Vec<String>,
}

impl SwapEvent {
    pub fn new(timestamp: UnixTimestamp, tick: i32) -> Self {
        Self {
            id: None,
            timestamp,
            tick,
            fields: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => format!("swap {id}"),
            None => format!("swap at t={}", self.timestamp),
        }
    }

    /// Reject ticks outside the protocol bounds
    pub fn validate(&self) -> Result<(), EventError> {
        if !is_valid_tick(self.tick) {
            return Err(EventError::malformed(
                self.label(),
                format!("tick {} outside protocol bounds", self.tick),
            ));
        }
        Ok(())
    }
}

/// Liquidity visible to a swap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityState {
    /// Sum of all deltas with `timestamp <= swap.timestamp`
    pub cumulative_liquidity: BigDecimal,
    /// Same sum restricted to positions whose range contains the swap tick
    pub liquidity_in_range: BigDecimal,
}

impl LiquidityState {
    pub fn empty() -> Self {
        Self {
            cumulative_liquidity: BigDecimal::from(0),
            liquidity_in_range: BigDecimal::from(0),
        }
    }
}

/// A swap together with its reconstructed liquidity state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedSwap {
    pub swap: SwapEvent,
    pub state: LiquidityState,
}

impl AugmentedSwap {
    pub fn cumulative_liquidity(&self) -> &BigDecimal {
        &self.state.cumulative_liquidity
    }

    pub fn liquidity_in_range(&self) -> &BigDecimal {
        &self.state.liquidity_in_range
    }
}
