// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across liqscan.
//!
//! This module provides newtype wrappers for various domain concepts:
//! - Token decimals and the inferred liquidity scale
//! - Tick ranges and their boundary prices
//! - Unix timestamps

pub mod tick;
pub mod timestamp;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
