// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for event validation.
//!
//! This module provides error types for building and validating liquidity and
//! swap events, shared by decimal inference, reconstruction and table loading.

/// Errors raised when an event cannot take part in a computation.
///
/// Both variants are fatal for the pool being processed: downstream consumers
/// rely on a complete, ordered series, so offending rows are never skipped.
///
/// # Examples
///
/// ```rust
/// use liqscan::{EventError, LiquidityEvent, UnixTimestamp};
/// use alloy_primitives::U256;
///
/// let event = LiquidityEvent::mint(UnixTimestamp(1), 10, 5, U256::from(100u64));
/// match event.validate() {
///     Err(EventError::DegenerateRange { tick_lower, tick_upper, .. }) => {
///         assert_eq!((tick_lower, tick_upper), (10, 5));
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventError {
    /// A required field is missing or holds an invalid value.
    ///
    /// Covers missing timestamps or ticks in loaded rows, ticks outside the
    /// protocol bounds, and negative or non-finite token amounts.
    #[error("Malformed event {event}: {details}")]
    MalformedEvent {
        /// Description of the offending event (kind plus row or id)
        event: String,
        /// What is wrong with it
        details: String,
    },

    /// A liquidity position whose lower tick lies above its upper tick.
    ///
    /// Such ranges are rejected rather than silently swapped.
    #[error("Degenerate tick range for {event}: tick_lower {tick_lower} > tick_upper {tick_upper}")]
    DegenerateRange {
        /// Description of the offending event
        event: String,
        /// Lower tick as recorded
        tick_lower: i32,
        /// Upper tick as recorded
        tick_upper: i32,
    },
}

impl EventError {
    /// Create a `MalformedEvent` error.
    pub fn malformed(event: impl Into<String>, details: impl Into<String>) -> Self {
        EventError::MalformedEvent {
            event: event.into(),
            details: details.into(),
        }
    }

    /// Helper for a required field that was absent from a loaded row.
    pub fn missing_field(event: impl Into<String>, field: &str) -> Self {
        Self::malformed(event, format!("missing required field `{field}`"))
    }

    /// Create a `DegenerateRange` error.
    pub fn degenerate_range(event: impl Into<String>, tick_lower: i32, tick_upper: i32) -> Self {
        EventError::DegenerateRange {
            event: event.into(),
            tick_lower,
            tick_upper,
        }
    }
}
