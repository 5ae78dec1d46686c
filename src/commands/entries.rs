// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::book::Book;
use crate::models::{Entry, EntryForm, EntryId};
use crate::month::MonthKey;
use crate::persistence::SlotStore;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::io::{self, BufRead, Write};

pub fn handle<S: SlotStore>(book: &mut Book<S>, name: &str, sub: &clap::ArgMatches) -> Result<()> {
    match name {
        "add" => add(book, sub)?,
        "rm" => rm(book, sub)?,
        "clear" => {
            let stdin = io::stdin();
            clear(book, sub, &mut stdin.lock())?
        }
        "list" => list(book, sub)?,
        _ => {}
    }
    warn_if_unsaved(book);
    Ok(())
}

fn warn_if_unsaved<S: SlotStore>(book: &Book<S>) {
    if let Some(e) = book.last_save_error() {
        eprintln!("warning: changes are not saved ({})", e);
    }
}

pub fn form_from_args(sub: &clap::ArgMatches) -> EntryForm {
    let arg = |name: &str| sub.get_one::<String>(name).cloned().unwrap_or_default();
    let date = sub
        .get_one::<String>("date")
        .cloned()
        .unwrap_or_else(|| Local::now().date_naive().to_string());
    EntryForm {
        kind: arg("type"),
        category: arg("category"),
        amount: arg("amount"),
        date,
        fixed: sub.get_flag("fixed"),
    }
}

fn add<S: SlotStore>(book: &mut Book<S>, sub: &clap::ArgMatches) -> Result<()> {
    let form = form_from_args(sub);
    let id = book.add(&form).context("Entry rejected")?;
    if let Some(e) = book.store().get(&id) {
        println!(
            "Recorded {} {} in '{}' on {} (id: {})",
            e.kind,
            fmt_money(&e.amount),
            e.category,
            e.date,
            id
        );
    }
    Ok(())
}

fn rm<S: SlotStore>(book: &mut Book<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = EntryId::from(
        sub.get_one::<String>("id")
            .map(String::as_str)
            .unwrap_or_default(),
    );
    if book.remove(&id) {
        println!("Removed entry {}", id);
    } else {
        println!("No entry with id {}", id);
    }
    Ok(())
}

/// Asks on `input` unless `--yes` was given.
pub fn clear<S: SlotStore>(
    book: &mut Book<S>,
    sub: &clap::ArgMatches,
    input: &mut impl BufRead,
) -> Result<()> {
    if !sub.get_flag("yes") && !confirm("Delete ALL entries? [y/N] ", input)? {
        println!("Nothing deleted");
        return Ok(());
    }
    let n = book.list().len();
    book.clear();
    println!("Deleted {} entries", n);
    Ok(())
}

pub fn confirm(prompt: &str, input: &mut impl BufRead) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn list<S: SlotStore>(book: &Book<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month"))?;
    let data = rows_for_month(book, month);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    if r.fixed { "yes".into() } else { "-".into() },
                    r.id.clone(),
                ]
            })
            .collect();
        println!("{}", month.label());
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Category", "Amount", "Fixed", "Id"], rows)
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct EntryRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub fixed: bool,
}

impl From<&Entry> for EntryRow {
    fn from(e: &Entry) -> Self {
        EntryRow {
            id: e.id.to_string(),
            date: e.date.to_string(),
            kind: e.kind.to_string(),
            category: e.category.clone(),
            amount: fmt_money(&e.amount),
            fixed: e.fixed,
        }
    }
}

pub fn rows_for_month<S: SlotStore>(book: &Book<S>, month: MonthKey) -> Vec<EntryRow> {
    book.list_for_month(month)
        .into_iter()
        .map(EntryRow::from)
        .collect()
}
