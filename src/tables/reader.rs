// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Loading mint, burn and swap tables

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use tracing::debug;

use crate::errors::{EventError, TableError};
use crate::events::{LiquidityEvent, LiquidityEventKind, SwapEvent};
use crate::tracing::spans;
use crate::types::timestamp::UnixTimestamp;

/// Raw mint/burn row; every field may be absent or empty
#[derive(Debug, Deserialize)]
struct LiquidityRecord {
    id: Option<String>,
    timestamp: Option<String>,
    #[serde(rename = "tickLower")]
    tick_lower: Option<String>,
    #[serde(rename = "tickUpper")]
    tick_upper: Option<String>,
    amount: Option<String>,
    amount0: Option<f64>,
    amount1: Option<f64>,
}

impl LiquidityRecord {
    fn lacks_token_amounts(&self) -> bool {
        self.amount0.is_none() || self.amount1.is_none()
    }

    fn into_event(self, kind: LiquidityEventKind, row: usize) -> Result<LiquidityEvent, EventError> {
        let label = match &self.id {
            Some(id) => format!("{kind} {id}"),
            None => format!("{kind} row {row}"),
        };

        let timestamp = parse_integer::<i64>(self.timestamp.as_deref(), &label, "timestamp")?;
        let tick_lower = parse_integer::<i32>(self.tick_lower.as_deref(), &label, "tickLower")?;
        let tick_upper = parse_integer::<i32>(self.tick_upper.as_deref(), &label, "tickUpper")?;
        let amount = self
            .amount
            .ok_or_else(|| EventError::missing_field(&label, "amount"))?;
        let raw_amount = parse_raw_amount(&amount).ok_or_else(|| {
            EventError::malformed(&label, format!("amount {amount:?} is not a non-negative integer"))
        })?;

        let mut event = LiquidityEvent::new(
            kind,
            UnixTimestamp(timestamp),
            tick_lower,
            tick_upper,
            raw_amount,
        )
        // absent token amounts leave the event unusable for decimal inference
        .with_token_amounts(self.amount0.unwrap_or(0.0), self.amount1.unwrap_or(0.0));
        event.id = self.id;
        Ok(event)
    }
}

/// Parse a raw liquidity magnitude
///
/// Accepts plain integers and, for float-formatted exports, decimal or
/// scientific notation with no fractional remainder.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use liqscan::tables::parse_raw_amount;
///
/// assert_eq!(parse_raw_amount("1500"), Some(U256::from(1500u64)));
/// assert_eq!(parse_raw_amount("1.5e3"), Some(U256::from(1500u64)));
/// assert_eq!(parse_raw_amount("-1"), None);
/// ```
pub fn parse_raw_amount(value: &str) -> Option<U256> {
    let value = value.trim();
    if let Ok(raw) = U256::from_str_radix(value, 10) {
        return Some(raw);
    }

    let decimal = BigDecimal::from_str(value).ok()?;
    if decimal < BigDecimal::from(0) || !decimal.is_integer() {
        return None;
    }
    let (digits, _) = decimal.with_scale(0).into_bigint_and_exponent();
    U256::from_str_radix(&digits.to_string(), 10).ok()
}

/// Read a mint or burn table
///
/// Rows repeating an earlier `id` are dropped; rows without an `id` are
/// always kept.
pub fn read_liquidity_events(
    path: impl AsRef<Path>,
    kind: LiquidityEventKind,
) -> Result<Vec<LiquidityEvent>, TableError> {
    let path = path.as_ref();
    let span = spans::load_table(kind.name(), path);
    let _guard = span.enter();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| TableError::csv(path, e))?;

    let mut seen = HashSet::new();
    let mut events = Vec::new();
    let mut duplicates = 0usize;
    let mut missing_amounts = 0usize;

    for (row, record) in reader.deserialize::<LiquidityRecord>().enumerate() {
        let record = record.map_err(|e| TableError::csv(path, e))?;
        if let Some(id) = &record.id {
            if !seen.insert(id.clone()) {
                duplicates += 1;
                continue;
            }
        }
        if kind == LiquidityEventKind::Mint && record.lacks_token_amounts() {
            missing_amounts += 1;
        }
        events.push(record.into_event(kind, row)?);
    }

    if missing_amounts > 0 {
        debug!(
            path = %path.display(),
            missing_amounts,
            "Mints without token amounts are excluded from decimal inference"
        );
    }
    debug!(
        path = %path.display(),
        events = events.len(),
        duplicates,
        "Loaded {kind} table"
    );
    Ok(events)
}

/// A swap table with its header preserved for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapTable {
    /// Column names in source order
    pub header: Vec<String>,
    pub swaps: Vec<SwapEvent>,
}

/// Read a swap table, carrying every column through
///
/// # Errors
///
/// - [`TableError::MissingColumn`] when `timestamp` or `tick` is absent
/// - [`TableError::Event`] when a row lacks a parseable timestamp or tick
pub fn read_swaps(path: impl AsRef<Path>) -> Result<SwapTable, TableError> {
    let path = path.as_ref();
    let span = spans::load_table("swaps", path);
    let _guard = span.enter();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| TableError::csv(path, e))?;

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| TableError::csv(path, e))?
        .iter()
        .map(str::to_string)
        .collect();
    let column = |name: &str| {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::missing_column(path, name))
    };
    let timestamp_at = column("timestamp")?;
    let tick_at = column("tick")?;
    let id_at = header.iter().position(|h| h == "id");

    let mut swaps = Vec::new();
    let mut record = StringRecord::new();
    let mut row = 0usize;
    while reader
        .read_record(&mut record)
        .map_err(|e| TableError::csv(path, e))?
    {
        let id = id_at
            .and_then(|at| record.get(at))
            .filter(|id| !id.is_empty());
        let label = match id {
            Some(id) => format!("swap {id}"),
            None => format!("swap row {row}"),
        };

        let timestamp = parse_integer::<i64>(record.get(timestamp_at), &label, "timestamp")?;
        let tick = parse_integer::<i32>(record.get(tick_at), &label, "tick")?;

        let mut swap = SwapEvent::new(UnixTimestamp(timestamp), tick)
            .with_fields(record.iter().map(str::to_string).collect());
        swap.id = id.map(str::to_string);
        swaps.push(swap);
        row += 1;
    }

    debug!(path = %path.display(), swaps = swaps.len(), "Loaded swaps table");
    Ok(SwapTable { header, swaps })
}

/// Integer cell, tolerating a float rendering such as `"-12.0"`
fn parse_integer<T>(value: Option<&str>, label: &str, field: &str) -> Result<T, EventError>
where
    T: FromStr + TryFrom<i64>,
{
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| EventError::missing_field(label, field))?;

    if let Ok(parsed) = value.parse::<T>() {
        return Ok(parsed);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.fract() == 0.0 && v.abs() < 9.0e15)
        .and_then(|v| T::try_from(v as i64).ok())
        .ok_or_else(|| EventError::malformed(label, format!("{field} {value:?} is not an integer")))
}
