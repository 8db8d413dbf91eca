// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::error::{LedgerError, Result};

/// One of the two fixed parties sharing the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    A,
    B,
}

impl Person {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Person::A),
            "b" => Ok(Person::B),
            other => Err(LedgerError::InvalidInput(format!(
                "Unknown person '{}', expected a or b",
                other
            ))),
        }
    }

    pub fn other(self) -> Self {
        match self {
            Person::A => Person::B,
            Person::B => Person::A,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Person::A => write!(f, "a"),
            Person::B => write!(f, "b"),
        }
    }
}

/// How an expense is divided between the two parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
    /// The given person owes half the amount (floor division).
    Even(Person),
    /// Each person owes exactly the given share.
    Exact { share_a: i64, share_b: i64 },
}

impl SplitPolicy {
    /// Returns `(delta_a, delta_b)` for an expense of `amount`.
    pub fn deltas(&self, amount: i64) -> (i64, i64) {
        match *self {
            SplitPolicy::Even(Person::A) => (-amount.div_euclid(2), 0),
            SplitPolicy::Even(Person::B) => (0, -amount.div_euclid(2)),
            SplitPolicy::Exact { share_a, share_b } => (-share_a, -share_b),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub amount: i64,
    pub split: SplitPolicy,
    pub date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RepaymentInput {
    pub amount: i64,
    pub payer: Person,
    pub date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: i64, // negative for expenses, positive for repayments
    pub delta_a: i64,
    pub delta_b: i64,
    pub description: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.amount < 0
    }

    pub fn display_date(&self) -> String {
        self.date.format("%b %d %Y").to_string()
    }
}

/// Who is currently in debt and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Debt {
    pub debtor: Person,
    pub amount: u64,
}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(LedgerError::InvalidInput(format!(
                "Invalid period {}-{}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Four-digit year string as stored in the date column.
    pub fn year_str(&self) -> String {
        format!("{:04}", self.year)
    }

    /// Two-digit month string as stored in the date column.
    pub fn month_str(&self) -> String {
        format!("{:02}", self.month)
    }

    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(d) => d.format("%b %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub period: Period,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    pub average: u64,
    pub months: Vec<MonthlyTotal>,
}
