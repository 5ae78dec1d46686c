// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};
use std::path::PathBuf;

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .help("Month as YYYY-MM (defaults to the current month)")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("budgetbook")
        .version(crate_version!())
        .about("Monthly income/expense tracker with per-category summaries")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to the database file"),
        )
        .subcommand(Command::new("init").about("Create the database if needed"))
        .subcommand(
            Command::new("add")
                .about("Record an income or expense entry")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .help("income | expense"),
                )
                .arg(Arg::new("category").long("category").required(true))
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD (defaults to today)"),
                )
                .arg(
                    Arg::new("fixed")
                        .long("fixed")
                        .action(ArgAction::SetTrue)
                        .help("Mark the entry as recurring"),
                ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete an entry")
                .arg(Arg::new("id").long("id").required(true)),
        )
        .subcommand(
            Command::new("clear").about("Delete all entries").arg(
                Arg::new("yes")
                    .long("yes")
                    .short('y')
                    .action(ArgAction::SetTrue)
                    .help("Skip the confirmation prompt"),
            ),
        )
        .subcommand(
            Command::new("list")
                .about("List a month's entries by date")
                .arg(month_arg())
                .args(json_args()),
        )
        .subcommand(
            Command::new("summary")
                .about("Per-category totals and balance for a month")
                .arg(month_arg())
                .arg(
                    Arg::new("hide-empty")
                        .long("hide-empty")
                        .action(ArgAction::SetTrue)
                        .help("Hide categories with no income and no expense"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("months")
                .about("Months with entries, plus the current month")
                .args(json_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Export entries to CSV or JSON")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .help("csv | json"),
                )
                .arg(Arg::new("out").long("out").required(true))
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("Only entries of this month (YYYY-MM)"),
                ),
        )
}
