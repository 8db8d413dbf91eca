// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::ledger::{self, RECENT_LIMIT};
use crate::models::Transaction;
use crate::utils::{maybe_print_json, parse_id, pretty_table, required_arg};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(conn, config, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(conn: &Connection, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", transactions_table(config, &data));
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(required_arg(sub, "id")?)?;
    if ledger::delete_transaction(conn, id)? {
        println!("Removed transaction #{}", id);
    } else {
        println!("No transaction #{}; nothing removed", id);
    }
    Ok(())
}

/// A transaction with its date formatted for display.
#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: &'static str,
    pub amount: i64,
    pub delta_a: i64,
    pub delta_b: i64,
    pub description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id,
            date: t.display_date(),
            kind: if t.is_expense() { "expense" } else { "repayment" },
            amount: t.amount,
            delta_a: t.delta_a,
            delta_b: t.delta_b,
            description: t.description.clone().unwrap_or_default(),
        }
    }
}

/// Recent rows by default, `--limit N` or `--all` otherwise.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let limit = if sub.get_flag("all") {
        None
    } else {
        Some(*sub.get_one::<usize>("limit").unwrap_or(&RECENT_LIMIT))
    };
    let rows = ledger::list_transactions(conn, limit)?;
    Ok(rows.iter().map(TransactionRow::from).collect())
}

pub fn transactions_table(config: &Config, data: &[TransactionRow]) -> comfy_table::Table {
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.date.clone(),
                r.kind.to_string(),
                config.fmt_amount(r.amount.unsigned_abs()),
                r.delta_a.to_string(),
                r.delta_b.to_string(),
                r.description.clone(),
            ]
        })
        .collect();
    let header_a = format!("Δ {}", config.person_a);
    let header_b = format!("Δ {}", config.person_b);
    pretty_table(
        &["ID", "Date", "Kind", "Amount", &header_a, &header_b, "Description"],
        rows,
    )
}
