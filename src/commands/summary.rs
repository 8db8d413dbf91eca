// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::{TransactionRow, transactions_table};
use crate::config::Config;
use crate::ledger::{self, RECENT_LIMIT};
use crate::models::Period;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, config: &Config) -> Result<()> {
    println!("{}", render(conn, config)?);
    Ok(())
}

/// Dashboard text: current debtor, this month's expenses and the latest rows.
pub fn render(conn: &Connection, config: &Config) -> Result<String> {
    let debt = ledger::current_debtor(conn)?;
    let period = Period::current();
    let spent = ledger::total_expenses(conn, period)?;
    let recent: Vec<TransactionRow> = ledger::list_transactions(conn, Some(RECENT_LIMIT))?
        .iter()
        .map(TransactionRow::from)
        .collect();

    let mut out = format!(
        "{} is in debt by {} ({})\nExpenses in {}: {}\n",
        config.name_of(debt.debtor),
        config.fmt_amount(debt.amount),
        config.currency_long,
        period.label(),
        config.fmt_amount(spent)
    );
    if recent.is_empty() {
        out.push_str("No transactions yet");
    } else {
        out.push_str(&transactions_table(config, &recent).to_string());
    }
    Ok(out)
}
