// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{LedgerError, Result};

pub fn open_or_init(config: &Config) -> Result<Connection> {
    open(&config.database_path())
}

pub fn open(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::StorageUnavailable(format!(
                "Failed to create {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    let conn = Connection::open(path).map_err(|e| {
        LedgerError::StorageUnavailable(format!("Open DB at {}: {}", path.display(), e))
    })?;
    init_schema(&conn)
        .map_err(|e| LedgerError::StorageUnavailable(format!("Initialise schema: {}", e)))?;
    log::debug!("opened ledger at {}", path.display());
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        amount INTEGER NOT NULL,
        delta_a INTEGER NOT NULL,
        delta_b INTEGER NOT NULL,
        description TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    "#,
    )
}
