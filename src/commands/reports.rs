// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::ledger;
use crate::models::Period;
use crate::utils::{maybe_print_json, parse_period, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("debt", sub)) => debt(conn, config, sub)?,
        Some(("total", sub)) => total(conn, config, sub)?,
        Some(("months", sub)) => months(conn, sub)?,
        Some(("monthly", sub)) => monthly(conn, config, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct DebtView<'a> {
    debtor: &'a str,
    creditor: &'a str,
    amount: u64,
    currency: &'a str,
}

fn debt(conn: &Connection, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let d = ledger::current_debtor(conn)?;
    let view = DebtView {
        debtor: config.name_of(d.debtor),
        creditor: config.name_of(d.debtor.other()),
        amount: d.amount,
        currency: &config.currency_long,
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
        println!(
            "{} owes {} {}",
            view.debtor,
            view.creditor,
            config.fmt_amount(view.amount)
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct TotalView {
    period: String,
    total: u64,
}

fn total(conn: &Connection, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let period = match sub.get_one::<String>("month") {
        Some(m) => parse_period(m)?,
        None => Period::current(),
    };
    let total = ledger::total_expenses(conn, period)?;
    let view = TotalView {
        period: period.to_string(),
        total,
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
        println!(
            "Expenses in {}: {}",
            period.label(),
            config.fmt_amount(total)
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct MonthView {
    month: String,
    year: String,
}

fn months(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data: Vec<MonthView> = ledger::months_with_expenses(conn)?
        .into_iter()
        .map(|p| MonthView {
            month: p.month_str(),
            year: p.year_str(),
        })
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|m| vec![m.year, m.month])
            .collect();
        println!("{}", pretty_table(&["Year", "Month"], rows));
    }
    Ok(())
}

fn monthly(conn: &Connection, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let report = ledger::monthly_expense_report(conn)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        let rows = report
            .months
            .iter()
            .map(|m| vec![m.period.label(), config.fmt_amount(m.total)])
            .collect();
        println!("{}", pretty_table(&["Month", "Expenses"], rows));
        println!("Average per month: {}", config.fmt_amount(report.average));
    }
    Ok(())
}
