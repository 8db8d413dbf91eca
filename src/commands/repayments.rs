// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::error::LedgerError;
use crate::ledger;
use crate::models::{Person, RepaymentInput};
use crate::utils::{date_or_today, parse_amount, required_arg};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let input = parse_input(sub)?;
    let id = ledger::record_repayment(conn, &input)?;
    println!(
        "Recorded repayment #{} of {} by {} on {}",
        id,
        config.fmt_amount(input.amount),
        config.name_of(input.payer),
        input.date
    );
    Ok(())
}

pub fn parse_input(sub: &clap::ArgMatches) -> Result<RepaymentInput, LedgerError> {
    Ok(RepaymentInput {
        amount: parse_amount(required_arg(sub, "amount")?)?,
        payer: Person::parse(required_arg(sub, "by")?)?,
        date: date_or_today(sub.get_one::<String>("date"))?,
        description: sub.get_one::<String>("note").cloned(),
    })
}
