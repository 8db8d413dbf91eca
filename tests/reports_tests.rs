// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use splitledger::commands::{reports, summary};
use splitledger::config::Config;
use splitledger::error::LedgerError;
use splitledger::{cli, db};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn populated() -> Connection {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO transactions(date,amount,delta_a,delta_b,description) VALUES
            ('2024-01-10',-100,-50,0,'rent'),
            ('2024-02-10',-40,0,-20,'food'),
            ('2024-02-11',20,20,0,NULL);
        "#,
    )
    .unwrap();
    conn
}

fn config() -> Config {
    Config {
        person_a: "Alice".into(),
        person_b: "Bob".into(),
        currency_long: "euros".into(),
        currency_short: "€".into(),
        database_name: "unused".into(),
    }
}

fn report_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["splitledger", "report"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("report", m)) => m.clone(),
        _ => panic!("no report subcommand"),
    }
}

#[test]
fn summary_on_empty_ledger_reports_b_owing_nothing() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from(["splitledger", "summary"]);
    assert!(matches!(matches.subcommand(), Some(("summary", _))));

    let out = summary::render(&conn, &Config::default()).unwrap();
    assert!(out.starts_with("Person B is in debt by $0 (dollars)"));
    assert!(out.contains("No transactions yet"));
    summary::handle(&conn, &Config::default()).unwrap();
}

#[test]
fn summary_lists_recent_rows_with_names() {
    let conn = populated();
    let out = summary::render(&conn, &config()).unwrap();
    // a: -50 + 20 = -30, b: -20 => balance -10
    assert!(out.starts_with("Alice is in debt by €10 (euros)"));
    assert!(out.contains("Feb 11 2024"));
    assert!(out.contains("rent"));
    assert!(!out.contains("No transactions yet"));
}

#[test]
fn summary_survives_extreme_stored_amounts() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(date,amount,delta_a,delta_b,description) VALUES ('2024-01-01',?1,?1,0,NULL)",
        [i64::MIN],
    )
    .unwrap();
    let out = summary::render(&conn, &config()).unwrap();
    assert!(out.contains("9223372036854775808"));
}

#[test]
fn report_views_run_against_populated_ledger() {
    let conn = populated();
    let cfg = config();
    for args in [
        vec!["debt"],
        vec!["debt", "--json"],
        vec!["total", "--month", "2024-02"],
        vec!["total", "--jsonl"],
        vec!["months"],
        vec!["months", "--json"],
        vec!["monthly"],
        vec!["monthly", "--json"],
    ] {
        reports::handle(&conn, &cfg, &report_matches(&args)).unwrap();
    }
}

#[test]
fn report_total_rejects_malformed_month() {
    let conn = populated();
    let err = reports::handle(&conn, &config(), &report_matches(&["total", "--month", "2024-2"]))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LedgerError>(),
        Some(LedgerError::InvalidInput(_))
    ));
}

#[test]
fn report_monthly_on_empty_ledger_is_no_data() {
    let conn = setup();
    let err = reports::handle(&conn, &config(), &report_matches(&["monthly"])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LedgerError>(),
        Some(LedgerError::NoData(_))
    ));
}
