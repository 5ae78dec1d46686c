// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use budgetbook::book::Book;
use budgetbook::persistence::{Persistence, SqliteSlots};
use budgetbook::{cli, commands, db};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let db_override = matches.get_one::<PathBuf>("db").cloned();
    let conn = db::open_or_init(db_override.as_deref())?;
    // Unreadable stored data is reported by the persistence layer's own warning.
    let mut book = Book::open(Persistence::new(SqliteSlots::new(&conn)));

    match matches.subcommand() {
        Some(("init", _)) => match db_override {
            Some(p) => println!("Database initialized at {}", p.display()),
            None => println!("Database initialized at {}", db::db_path()?.display()),
        },
        Some((name @ ("add" | "rm" | "clear" | "list"), sub)) => {
            commands::entries::handle(&mut book, name, sub)?
        }
        Some((name @ ("summary" | "months"), sub)) => {
            commands::reports::handle(&book, name, sub)?
        }
        Some(("export", sub)) => commands::exporter::handle(&book, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
