// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for liquidity decimal inference.

use super::EventError;

/// Errors that can occur while inferring the liquidity decimal exponent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecimalInferenceError {
    /// No mint event produced a usable exponent candidate.
    ///
    /// Raised for an empty mint table and when every event was excluded
    /// (zero, negative or non-finite reference liquidity, zero raw amount).
    #[error("Insufficient data to infer liquidity decimals: {usable} usable of {total} mint events")]
    InsufficientData {
        /// Number of mint events supplied
        total: usize,
        /// Number of events that produced a candidate
        usable: usize,
    },

    /// A mint event failed validation.
    #[error(transparent)]
    Event(#[from] EventError),
}

impl DecimalInferenceError {
    /// Create an `InsufficientData` error.
    pub fn insufficient_data(total: usize, usable: usize) -> Self {
        DecimalInferenceError::InsufficientData { total, usable }
    }
}
