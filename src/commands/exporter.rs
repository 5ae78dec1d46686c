// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::book::Book;
use crate::models::Entry;
use crate::month::MonthKey;
use crate::persistence::SlotStore;
use anyhow::{Result, bail};
use serde_json::json;

pub fn handle<S: SlotStore>(book: &Book<S>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();
    let out = sub
        .get_one::<String>("out")
        .map(String::as_str)
        .unwrap_or_default();
    let month = sub
        .get_one::<String>("month")
        .map(|m| m.parse::<MonthKey>())
        .transpose()?;

    let mut entries: Vec<&Entry> = match month {
        Some(m) => book.list_for_month(m),
        None => book.list().iter().collect(),
    };
    entries.sort_by_key(|e| e.date);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "type", "category", "amount", "fixed"])?;
            for e in &entries {
                wtr.write_record([
                    e.id.to_string(),
                    e.date.to_string(),
                    e.kind.to_string(),
                    e.category.clone(),
                    e.amount.to_string(),
                    e.fixed.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = entries
                .iter()
                .map(|e| {
                    json!({
                        "id": e.id, "date": e.date, "type": e.kind, "category": e.category,
                        "amount": e.amount.to_string(), "fixed": e.fixed
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported {} entries to {}", entries.len(), out);
    Ok(())
}
