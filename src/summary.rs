// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use log::warn;
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Entry, EntryKind};
use crate::month::MonthKey;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub income: Decimal,
    pub expense: Decimal,
}

impl CategorySummary {
    fn empty(category: &str) -> Self {
        CategorySummary {
            category: category.to_string(),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        }
    }

    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub month: MonthKey,
    pub categories: Vec<CategorySummary>,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

impl Summary {
    pub fn category(&self, name: &str) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == name)
    }

    /// Display filter; totals are untouched.
    pub fn visible_categories(&self, hide_empty: bool) -> Vec<&CategorySummary> {
        self.categories
            .iter()
            .filter(|c| !(hide_empty && c.is_empty()))
            .collect()
    }
}

/// Per-category income/expense for `month`, plus grand totals.
pub fn summarize(entries: &[Entry], month: MonthKey) -> Summary {
    let mut by_category: HashMap<&str, CategorySummary> = HashMap::new();
    for e in entries.iter().filter(|e| month.contains(e.date)) {
        let item = by_category
            .entry(e.category.as_str())
            .or_insert_with(|| CategorySummary::empty(&e.category));
        match e.kind {
            EntryKind::Income => item.income = add_saturating(item.income, e.amount),
            EntryKind::Expense => item.expense = add_saturating(item.expense, e.amount),
        }
    }

    let mut categories: Vec<CategorySummary> = by_category.into_values().collect();
    categories.sort_by(|a, b| collate(&a.category, &b.category));

    let total_income = categories
        .iter()
        .fold(Decimal::ZERO, |acc, c| add_saturating(acc, c.income));
    let total_expense = categories
        .iter()
        .fold(Decimal::ZERO, |acc, c| add_saturating(acc, c.expense));
    Summary {
        month,
        categories,
        total_income,
        total_expense,
        // Both totals are non-negative, so the difference cannot overflow.
        balance: total_income - total_expense,
    }
}

/// Sums of non-negative amounts clamp at `Decimal::MAX` instead of panicking.
fn add_saturating(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        warn!("total overflowed, clamping to {}", Decimal::MAX);
        Decimal::MAX
    })
}

/// Dictionary-style ordering: case and common Latin accents are ignored
/// first, then the raw strings break ties.
///
/// Only the accented vowels plus `ç` and `ñ` are folded. Letters such as
/// `ý`, `ø`, `æ` or `ß` compare by code point and sort after `z`.
pub fn collate(a: &str, b: &str) -> Ordering {
    let fa = a.chars().flat_map(fold_char);
    let fb = b.chars().flat_map(fold_char);
    fa.cmp(fb).then_with(|| a.cmp(b))
}

fn fold_char(c: char) -> std::vec::IntoIter<char> {
    let base = match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        _ => return c.to_lowercase().collect::<Vec<_>>().into_iter(),
    };
    vec![base].into_iter()
}
