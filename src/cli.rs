// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("Date as YYYY-MM-DD (defaults to today)")
}

fn note_arg() -> Arg {
    Arg::new("note")
        .long("note")
        .help("Free-text description")
}

pub fn build_cli() -> Command {
    Command::new("splitledger")
        .version(crate_version!())
        .about("Shared-expense ledger for two people")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to configuration.json (or set SPLITLEDGER_CONFIG)"),
        )
        .subcommand(Command::new("init").about("Create the ledger database"))
        .subcommand(
            Command::new("expense")
                .about("Record a shared expense")
                .arg(Arg::new("amount").required(true).allow_hyphen_values(true))
                .arg(
                    Arg::new("owed-by")
                        .long("owed-by")
                        .default_value("b")
                        .help("Person who owes half of the expense (a|b)"),
                )
                .arg(
                    Arg::new("share-a")
                        .long("share-a")
                        .help("Exact share owed by person A"),
                )
                .arg(
                    Arg::new("share-b")
                        .long("share-b")
                        .help("Exact share owed by person B"),
                )
                .arg(date_arg())
                .arg(note_arg()),
        )
        .subcommand(
            Command::new("repay")
                .about("Record a repayment")
                .arg(Arg::new("amount").required(true).allow_hyphen_values(true))
                .arg(
                    Arg::new("by")
                        .long("by")
                        .required(true)
                        .help("Person who paid (a|b)"),
                )
                .arg(date_arg())
                .arg(note_arg()),
        )
        .subcommand(
            Command::new("tx")
                .about("Inspect or remove transactions")
                .subcommand(json_args(
                    Command::new("list")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .conflicts_with("all"),
                        )
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("List every transaction"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true).allow_hyphen_values(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Balances and monthly aggregates")
                .subcommand(json_args(
                    Command::new("debt").about("Who owes whom"),
                ))
                .subcommand(json_args(
                    Command::new("total")
                        .about("Total expenses in a month")
                        .arg(Arg::new("month").long("month").help("YYYY-MM (defaults to this month)")),
                ))
                .subcommand(json_args(
                    Command::new("months").about("Months containing expenses"),
                ))
                .subcommand(json_args(
                    Command::new("monthly").about("Expense totals per month with average"),
                )),
        )
        .subcommand(Command::new("summary").about("Debt, this month's spend and recent activity"))
        .subcommand(
            Command::new("export")
                .about("Export all transactions")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
}
