// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::error::LedgerError;
use crate::ledger;
use crate::models::{ExpenseInput, Person, SplitPolicy};
use crate::utils::{date_or_today, parse_amount, parse_share, required_arg};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let input = parse_input(sub)?;
    let id = ledger::record_expense(conn, &input)?;
    let owed = match input.split {
        SplitPolicy::Even(p) => format!("{} owes half", config.name_of(p)),
        SplitPolicy::Exact { share_a, share_b } => format!(
            "{} owes {}, {} owes {}",
            config.person_a,
            config.fmt_amount(share_a),
            config.person_b,
            config.fmt_amount(share_b)
        ),
    };
    println!(
        "Recorded expense #{} of {} on {} ({})",
        id,
        config.fmt_amount(input.amount),
        input.date,
        owed
    );
    Ok(())
}

/// Turns the command-line fields into a typed expense; nothing is written on error.
pub fn parse_input(sub: &clap::ArgMatches) -> Result<ExpenseInput, LedgerError> {
    let amount = parse_amount(required_arg(sub, "amount")?)?;
    let share_a = sub.get_one::<String>("share-a");
    let share_b = sub.get_one::<String>("share-b");
    let split = if share_a.is_some() || share_b.is_some() {
        SplitPolicy::Exact {
            share_a: parse_share(share_a),
            share_b: parse_share(share_b),
        }
    } else {
        let who = sub
            .get_one::<String>("owed-by")
            .map(|s| Person::parse(s))
            .transpose()?
            .unwrap_or(Person::B);
        SplitPolicy::Even(who)
    };
    Ok(ExpenseInput {
        amount,
        split,
        date: date_or_today(sub.get_one::<String>("date"))?,
        description: sub.get_one::<String>("note").cloned(),
    })
}
