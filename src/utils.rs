// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LedgerError;
use crate::models::Period;

static PERIOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<year>\d{4})-(?P<month>\d{2})$").expect("period regex"));

pub fn parse_date(s: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", s))
    })
}

pub fn date_or_today(s: Option<&String>) -> Result<NaiveDate, LedgerError> {
    match s {
        Some(d) => parse_date(d),
        None => Ok(Local::now().date_naive()),
    }
}

/// Amounts must be integers whose negation also fits in an `i64`.
pub fn parse_amount(s: &str) -> Result<i64, LedgerError> {
    let invalid = || LedgerError::InvalidInput(format!("Invalid amount '{}', expected an integer", s));
    let amount = s.trim().parse::<i64>().map_err(|_| invalid())?;
    amount.checked_neg().map(|_| amount).ok_or_else(invalid)
}

/// Exact-split shares fall back to 0 when absent, unparseable or negative.
pub fn parse_share(s: Option<&String>) -> i64 {
    s.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 0)
        .unwrap_or(0)
}

pub fn parse_id(s: &str) -> Result<i64, LedgerError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| LedgerError::InvalidInput(format!("Invalid transaction id '{}'", s)))
}

pub fn parse_period(s: &str) -> Result<Period, LedgerError> {
    let invalid = || LedgerError::InvalidInput(format!("Invalid month '{}', expected YYYY-MM", s));
    let caps = PERIOD_RE.captures(s.trim()).ok_or_else(invalid)?;
    period_from_parts(&caps["year"], &caps["month"]).map_err(|_| invalid())
}

/// Builds a period from a 4-digit year and a 2-digit month string.
pub fn period_from_parts(year: &str, month: &str) -> Result<Period, LedgerError> {
    let invalid = || LedgerError::InvalidInput(format!("Invalid period {}/{}", year, month));
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }
    let y: i32 = year.parse().map_err(|_| invalid())?;
    let m: u32 = month.parse().map_err(|_| invalid())?;
    Period::new(y, m)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn required_arg<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a String, LedgerError> {
    m.get_one::<String>(name)
        .ok_or_else(|| LedgerError::InvalidInput(format!("{} is required", name)))
}
