// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use serde_json::json;
use splitledger::{cli, commands::exporter, db};
use tempfile::tempdir;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute(
        "INSERT INTO transactions(date,amount,delta_a,delta_b,description) VALUES \
        ('2025-01-02',-40,-20,0,'Groceries'), ('2024-12-30',15,0,15,NULL)",
        [],
    )
    .unwrap();
    conn
}

fn export_matches(format: &str, out: &str) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from([
        "splitledger",
        "export",
        "--format",
        format,
        "--out",
        out,
    ]);
    match matches.subcommand() {
        Some(("export", m)) => m.clone(),
        _ => panic!("no export subcommand"),
    }
}

#[test]
fn export_json_is_oldest_first() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    exporter::handle(&conn, &export_matches("json", &out_str)).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"id": 2, "date": "2024-12-30", "amount": 15, "delta_a": 0, "delta_b": 15, "description": null},
            {"id": 1, "date": "2025-01-02", "amount": -40, "delta_a": -20, "delta_b": 0, "description": "Groceries"}
        ])
    );
}

#[test]
fn export_csv_writes_header_and_rows() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    exporter::handle(&conn, &export_matches("CSV", &out_str)).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,date,amount,delta_a,delta_b,description",
            "2,2024-12-30,15,0,15,",
            "1,2025-01-02,-40,-20,0,Groceries",
        ]
    );
}

#[test]
fn export_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.xml");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(exporter::handle(&conn, &export_matches("xml", &out_str)).is_err());
    assert!(!out_path.exists());
}
