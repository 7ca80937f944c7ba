// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Writing augmented swap tables

use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use crate::errors::TableError;
use crate::events::AugmentedSwap;
use crate::features::{ForwardPrices, FORWARD_WINDOW_COLUMNS};

pub const CUMULATIVE_LIQUIDITY_COLUMN: &str = "cumulative_liquidity";
pub const LIQUIDITY_IN_RANGE_COLUMN: &str = "liquidity_in_range";

/// Write swaps with their liquidity state as CSV
///
/// Columns are the source `header`, then the two liquidity columns, then
/// the forward window columns when `forward` is given. `forward` must be
/// aligned with `swaps`.
pub fn write_augmented_swaps(
    path: impl AsRef<Path>,
    header: &[String],
    swaps: &[AugmentedSwap],
    forward: Option<&[ForwardPrices]>,
) -> Result<(), TableError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TableError::io(parent, e))?;
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| TableError::csv(path, e))?;

    let mut columns: Vec<&str> = header.iter().map(String::as_str).collect();
    columns.extend([CUMULATIVE_LIQUIDITY_COLUMN, LIQUIDITY_IN_RANGE_COLUMN]);
    if forward.is_some() {
        columns.extend(FORWARD_WINDOW_COLUMNS);
    }
    writer
        .write_record(&columns)
        .map_err(|e| TableError::csv(path, e))?;

    for (i, augmented) in swaps.iter().enumerate() {
        let mut row: Vec<String> = augmented.swap.fields.clone();
        row.push(augmented.cumulative_liquidity().to_plain_string());
        row.push(augmented.liquidity_in_range().to_plain_string());
        if let Some(prices) = forward.and_then(|f| f.get(i)) {
            row.extend(prices.values().iter().map(f64::to_string));
        }
        writer
            .write_record(&row)
            .map_err(|e| TableError::csv(path, e))?;
    }

    writer.flush().map_err(|e| TableError::io(path, e))?;
    debug!(path = %path.display(), rows = swaps.len(), "Wrote augmented swaps");
    Ok(())
}
