// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed pool events.
//!
//! This module handles:
//! - Liquidity events (mints and burns) with their signed, rescaled deltas
//! - Swap events with pass-through columns
//! - The per-swap liquidity state produced by reconstruction

pub mod liquidity;
pub mod swap;

pub use liquidity::{LiquidityEvent, LiquidityEventKind};
pub use swap::{AugmentedSwap, LiquidityState, SwapEvent};
