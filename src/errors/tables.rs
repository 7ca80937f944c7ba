// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for reading and writing event tables.
//!
//! This module provides error types for the `tables` and `pools` modules,
//! which load CSV exports and persist augmented swap tables and reports.

use super::EventError;

/// Errors that can occur while loading or persisting tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Filesystem failure at a specific path.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File or directory that caused the error
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing or writing failed.
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// File that caused the error
        path: String,
        /// The underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// A column the loader depends on is absent from the header.
    #[error("Missing column `{column}` in {path}")]
    MissingColumn {
        /// File that lacks the column
        path: String,
        /// Column name
        column: String,
    },

    /// Error serializing a pool report.
    #[error("Serialization error for {path}: {source}")]
    Serialization {
        /// Destination of the report
        path: String,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// A row converted into an invalid event.
    #[error(transparent)]
    Event(#[from] EventError),
}

impl TableError {
    /// Create an `Io` error for a path.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        TableError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a `Csv` error for a path.
    pub fn csv(path: impl AsRef<std::path::Path>, source: csv::Error) -> Self {
        TableError::Csv {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a `MissingColumn` error.
    pub fn missing_column(path: impl AsRef<std::path::Path>, column: impl Into<String>) -> Self {
        TableError::MissingColumn {
            path: path.as_ref().display().to_string(),
            column: column.into(),
        }
    }

    /// Create a `Serialization` error for a path.
    pub fn serialization(path: impl AsRef<std::path::Path>, source: serde_json::Error) -> Self {
        TableError::Serialization {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
