// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::ledger;
use crate::utils::required_arg;
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required_arg(sub, "format")?.to_lowercase();
    let out = required_arg(sub, "out")?;
    if fmt != "csv" && fmt != "json" {
        return Err(LedgerError::InvalidInput(format!(
            "Unknown format: {} (use csv|json)",
            fmt
        ))
        .into());
    }

    let rows = ledger::all_transactions_chronological(conn)?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(["id", "date", "amount", "delta_a", "delta_b", "description"])?;
            for t in &rows {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.amount.to_string(),
                    t.delta_a.to_string(),
                    t.delta_b.to_string(),
                    t.description.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
