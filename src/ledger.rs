// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Balance accounting, expense/repayment recording and monthly aggregation
//! over the `transactions` table.

use rusqlite::{Connection, Row, params};

use crate::error::{LedgerError, Result};
use crate::models::{
    Debt, ExpenseInput, MonthlyReport, MonthlyTotal, Period, Person, RepaymentInput, Transaction,
};

/// Number of rows shown when only the most recent transactions are wanted.
pub const RECENT_LIMIT: usize = 5;

fn insert(
    conn: &Connection,
    date: &chrono::NaiveDate,
    amount: i64,
    delta_a: i64,
    delta_b: i64,
    description: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO transactions(date, amount, delta_a, delta_b, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![date, amount, delta_a, delta_b, description],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Negated amount; `i64::MIN` has no negation and is rejected.
fn checked_amount(amount: i64) -> Result<i64> {
    amount.checked_neg().ok_or_else(|| {
        LedgerError::InvalidInput(format!("Amount {} is out of range", amount))
    })
}

/// Stores an expense as `-amount` with each party's share as a negative delta.
pub fn record_expense(conn: &Connection, input: &ExpenseInput) -> Result<i64> {
    let stored = checked_amount(input.amount)?;
    let (delta_a, delta_b) = input.split.deltas(input.amount);
    let id = insert(
        conn,
        &input.date,
        stored,
        delta_a,
        delta_b,
        input.description.as_deref(),
    )?;
    log::info!(
        "recorded expense #{} of {} on {} (delta_a={}, delta_b={})",
        id,
        input.amount,
        input.date,
        delta_a,
        delta_b
    );
    Ok(id)
}

/// Stores a repayment as `+amount`, crediting the payer's delta.
pub fn record_repayment(conn: &Connection, input: &RepaymentInput) -> Result<i64> {
    checked_amount(input.amount)?;
    let (delta_a, delta_b) = match input.payer {
        Person::A => (input.amount, 0),
        Person::B => (0, input.amount),
    };
    let id = insert(
        conn,
        &input.date,
        input.amount,
        delta_a,
        delta_b,
        input.description.as_deref(),
    )?;
    log::info!(
        "recorded repayment #{} of {} by {} on {}",
        id,
        input.amount,
        input.payer,
        input.date
    );
    Ok(id)
}

/// Net balance of person A: `SUM(delta_a) - SUM(delta_b)` over every row.
pub fn balance(conn: &Connection) -> Result<i64> {
    let bal: i64 = conn.query_row(
        "SELECT IFNULL(SUM(delta_a), 0) - IFNULL(SUM(delta_b), 0) FROM transactions",
        [],
        |r| r.get(0),
    )?;
    Ok(bal)
}

/// A negative balance means A is in debt; zero or above reports B.
pub fn current_debtor(conn: &Connection) -> Result<Debt> {
    let bal = balance(conn)?;
    let debtor = if bal < 0 { Person::A } else { Person::B };
    log::debug!("balance {} => debtor {}", bal, debtor);
    Ok(Debt {
        debtor,
        amount: bal.unsigned_abs(),
    })
}

pub fn total_expenses(conn: &Connection, period: Period) -> Result<u64> {
    let sum: i64 = conn.query_row(
        "SELECT IFNULL(SUM(amount), 0) FROM transactions
         WHERE amount < 0
           AND strftime('%Y', date) = ?1
           AND strftime('%m', date) = ?2",
        params![period.year_str(), period.month_str()],
        |r| r.get(0),
    )?;
    Ok(sum.unsigned_abs())
}

/// Distinct months holding at least one expense, most recent first.
pub fn months_with_expenses(conn: &Connection) -> Result<Vec<Period>> {
    let mut stmt = conn.prepare(
        "SELECT CAST(strftime('%Y', date) AS INTEGER) AS y,
                CAST(strftime('%m', date) AS INTEGER) AS m
         FROM transactions
         WHERE amount < 0
         GROUP BY y, m
         ORDER BY y DESC, m DESC",
    )?;
    let rows = stmt.query_map([], |r| Ok((r.get::<_, i32>(0)?, r.get::<_, u32>(1)?)))?;
    let mut out = Vec::new();
    for row in rows {
        let (year, month) = row?;
        out.push(Period::new(year, month)?);
    }
    Ok(out)
}

fn map_transaction(r: &Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: r.get(0)?,
        date: r.get(1)?,
        amount: r.get(2)?,
        delta_a: r.get(3)?,
        delta_b: r.get(4)?,
        description: r.get(5)?,
    })
}

/// Newest first; rows sharing a date are ordered by descending id.
pub fn list_transactions(conn: &Connection, limit: Option<usize>) -> Result<Vec<Transaction>> {
    // SQLite treats a negative LIMIT as unbounded.
    let limit = limit
        .map(|n| i64::try_from(n).unwrap_or(i64::MAX))
        .unwrap_or(-1);
    let mut stmt = conn.prepare(
        "SELECT id, date, amount, delta_a, delta_b, description
         FROM transactions
         ORDER BY date DESC, id DESC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], map_transaction)?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

/// Every row oldest first, for exports.
pub fn all_transactions_chronological(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, amount, delta_a, delta_b, description
         FROM transactions
         ORDER BY date, id",
    )?;
    let rows = stmt.query_map([], map_transaction)?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

/// Returns whether a row was removed; a missing id is not an error.
pub fn delete_transaction(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM transactions WHERE id = ?1", params![id])?;
    if n > 0 {
        log::info!("deleted transaction #{}", id);
    } else {
        log::debug!("delete of transaction #{} matched no rows", id);
    }
    Ok(n > 0)
}

pub fn monthly_expense_report(conn: &Connection) -> Result<MonthlyReport> {
    let mut months = Vec::new();
    for period in months_with_expenses(conn)? {
        let total = total_expenses(conn, period)?;
        months.push(MonthlyTotal { period, total });
    }
    if months.is_empty() {
        return Err(LedgerError::NoData(
            "no months with expenses to average".to_string(),
        ));
    }
    // totals are each at most u64::MAX, so the mean fits back into u64
    let sum: u128 = months.iter().map(|m| u128::from(m.total)).sum();
    let average = u64::try_from(sum / months.len() as u128).unwrap_or(u64::MAX);
    log::debug!("monthly average {} over {} months", average, months.len());
    Ok(MonthlyReport { average, months })
}
