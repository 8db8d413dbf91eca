// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use env_logger::Env;
use std::path::Path;

use splitledger::{cli, commands, config::Config, db};

fn main() -> Result<()> {
    env_logger::try_init_from_env(Env::default().default_filter_or("splitledger=warn"))?;

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = Config::resolve(matches.get_one::<String>("config").map(Path::new))?;
    let conn = db::open_or_init(&config)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!(
                "Database initialized at {}",
                config.database_path().display()
            );
        }
        Some(("expense", sub)) => commands::expenses::handle(&conn, &config, sub)?,
        Some(("repay", sub)) => commands::repayments::handle(&conn, &config, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&conn, &config, sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, &config, sub)?,
        Some(("summary", _)) => commands::summary::handle(&conn, &config)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
