// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-pool processing report

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TableError;
use crate::pools::PoolMetadata;
use crate::types::tokens::LiquidityDecimals;

/// Summary of one processed pool, written next to its output table
///
/// `liquidity_decimals` is a statistical estimate; the report keeps it
/// reviewable after the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolReport {
    pub pool: PoolMetadata,
    pub liquidity_decimals: LiquidityDecimals,
    pub swap_count: usize,
    /// Mint and burn events after de-duplication
    pub liquidity_event_count: usize,
    pub dropped_zero_events: usize,
    pub first_swap: Option<DateTime<Utc>>,
    pub last_swap: Option<DateTime<Utc>>,
    pub output_path: PathBuf,
}

/// Write a report as pretty-printed JSON
pub fn write_report(path: impl AsRef<Path>, report: &PoolReport) -> Result<(), TableError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TableError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(report).map_err(|e| TableError::serialization(path, e))?;
    std::fs::write(path, json).map_err(|e| TableError::io(path, e))
}

pub fn read_report(path: impl AsRef<Path>) -> Result<PoolReport, TableError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| TableError::io(path, e))?;
    serde_json::from_str(&json).map_err(|e| TableError::serialization(path, e))
}
