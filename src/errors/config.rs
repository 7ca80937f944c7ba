// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration loading.

/// Errors that can occur while building a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A setting holds a value that cannot be used.
    #[error("Invalid value for {key}: {value:?} ({details})")]
    InvalidValue {
        /// Setting name (environment variable or builder field)
        key: String,
        /// Value as supplied
        value: String,
        /// Why it was rejected
        details: String,
    },
}

impl ConfigError {
    /// Create an `InvalidValue` error.
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            details: details.into(),
        }
    }
}
