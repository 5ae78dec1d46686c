// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::book::Book;
use crate::month::{MonthKey, month_options};
use crate::persistence::SlotStore;
use crate::summary::Summary;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle<S: SlotStore>(book: &Book<S>, name: &str, sub: &clap::ArgMatches) -> Result<()> {
    match name {
        "summary" => summary(book, sub)?,
        "months" => months(book, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary<S: SlotStore>(book: &Book<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let hide_empty = sub.get_flag("hide-empty");
    let month = parse_month(sub.get_one::<String>("month"))?;
    let s = book.summarize(month);

    if json_flag || jsonl_flag {
        let mut shown = s.clone();
        shown.categories.retain(|c| !(hide_empty && c.is_empty()));
        maybe_print_json(json_flag, jsonl_flag, &shown)?;
        return Ok(());
    }

    println!("{}", month.label());
    println!("{}", pretty_table(&["Income", "Expense", "Balance"], vec![totals_row(&s)]));
    println!(
        "{}",
        pretty_table(
            &["Category", "Income", "Expense", "Net"],
            category_rows(&s, hide_empty)
        )
    );
    Ok(())
}

pub fn totals_row(s: &Summary) -> Vec<String> {
    vec![
        fmt_money(&s.total_income),
        fmt_money(&s.total_expense),
        fmt_money(&s.balance),
    ]
}

pub fn category_rows(s: &Summary, hide_empty: bool) -> Vec<Vec<String>> {
    s.visible_categories(hide_empty)
        .into_iter()
        .map(|c| {
            vec![
                c.category.clone(),
                fmt_money(&c.income),
                fmt_money(&c.expense),
                fmt_money(&c.net()),
            ]
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct MonthOption {
    pub key: MonthKey,
    pub label: String,
    pub current: bool,
}

pub fn month_rows<S: SlotStore>(book: &Book<S>, today: MonthKey) -> Vec<MonthOption> {
    month_options(book.list(), today)
        .into_iter()
        .map(|key| MonthOption {
            key,
            label: key.label(),
            current: key == today,
        })
        .collect()
}

fn months<S: SlotStore>(book: &Book<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = month_rows(book, MonthKey::current());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|m| {
                vec![
                    m.key.to_string(),
                    m.label.clone(),
                    if m.current { "*".into() } else { String::new() },
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Key", "Month", "Current"], rows));
    }
    Ok(())
}
