// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors raised by the ledger engine and its boundary parsing.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Unparseable or missing input, reported before anything is written.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An aggregate was requested over an empty result set.
    #[error("No data: {0}")]
    NoData(String),

    /// The database could not be opened or initialised.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
