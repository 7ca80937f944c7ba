// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token and liquidity scales
//!
//! # Type Relationships
//!
//! ```text
//! TokenDecimals (token0, token1)
//!     |
//!     | price_adjustment
//!     ↓
//! PriceBounds (human-readable prices) --> reference liquidity
//!
//! raw liquidity (U256)
//!     |
//!     | LiquidityDecimals::scale
//!     ↓
//! BigDecimal (human-readable, exact)
//! ```

mod decimals;
mod liquidity;

pub use decimals::TokenDecimals;
pub use liquidity::{raw_to_f64, LiquidityDecimals};
