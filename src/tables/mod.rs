// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! CSV event tables and per-pool reports
//!
//! Each pool has three input tables (`swaps`, `mints`, `burns`) laid out as
//! `{data_dir}/{kind}/{stem}_{kind}.csv`. Output is one augmented swap table
//! and one JSON report per pool.

mod reader;
mod report;
mod writer;

pub use reader::{parse_raw_amount, read_liquidity_events, read_swaps, SwapTable};
pub use report::{read_report, write_report, PoolReport};
pub use writer::{write_augmented_swaps, CUMULATIVE_LIQUIDITY_COLUMN, LIQUIDITY_IN_RANGE_COLUMN};

use crate::events::LiquidityEventKind;

/// Input table of a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Swaps,
    Mints,
    Burns,
}

impl TableKind {
    /// Directory name and file suffix
    pub fn dir_name(&self) -> &'static str {
        match self {
            TableKind::Swaps => "swaps",
            TableKind::Mints => "mints",
            TableKind::Burns => "burns",
        }
    }

    /// Liquidity event kind stored in this table, if any
    pub fn event_kind(&self) -> Option<LiquidityEventKind> {
        match self {
            TableKind::Swaps => None,
            TableKind::Mints => Some(LiquidityEventKind::Mint),
            TableKind::Burns => Some(LiquidityEventKind::Burn),
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
