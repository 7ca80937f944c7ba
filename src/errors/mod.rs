// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the liqscan library.
//!
//! This module provides strongly-typed errors for all public APIs in liqscan.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`EventError`,
//!   `DecimalInferenceError`, etc.)
//! - **Unified error type** (`LiqscanError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! - [`EventError`] - Malformed events and degenerate tick ranges
//! - [`DecimalInferenceError`] - Liquidity decimal inference failures
//! - [`TableError`] - CSV/JSON persistence failures
//! - [`ConfigError`] - Invalid configuration values
//!
//! # Examples
//!
//! ```rust
//! use liqscan::{reconstruct, LiqscanError, LiquidityEvent, SwapEvent, UnixTimestamp};
//! use alloy_primitives::U256;
//!
//! fn run() -> Result<(), LiqscanError> {
//!     let mints = vec![LiquidityEvent::mint(UnixTimestamp(1), 0, 10, U256::from(100u64))];
//!     let swaps = vec![SwapEvent::new(UnixTimestamp(2), 7)];
//!     // Module errors convert into LiqscanError with `?`
//!     let augmented = reconstruct(&mints, &[], swaps)?;
//!     assert_eq!(augmented.len(), 1);
//!     Ok(())
//! }
//! run().unwrap();
//! ```

mod config;
mod events;
mod inference;
mod tables;

pub use config::ConfigError;
pub use events::EventError;
pub use inference::DecimalInferenceError;
pub use tables::TableError;

/// Unified error type for all liqscan operations.
///
/// All module-specific error types automatically convert to `LiqscanError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum LiqscanError {
    /// Error from event validation or reconstruction.
    #[error("Event error: {0}")]
    Event(#[from] EventError),

    /// Error from liquidity decimal inference.
    #[error("Decimal inference error: {0}")]
    Inference(#[from] DecimalInferenceError),

    /// Error from table loading or persistence.
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Error from configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A pool worker task panicked or was cancelled.
    #[error("Pool task for {pool} failed: {details}")]
    Task {
        /// Pool label
        pool: String,
        /// Join failure description
        details: String,
    },
}
