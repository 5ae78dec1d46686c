// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbook::models::{Entry, EntryId, EntryKind, MAX_AMOUNT};
use budgetbook::month::MonthKey;
use budgetbook::summary::{collate, summarize};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::cmp::Ordering;

fn entry(id: &str, kind: EntryKind, category: &str, amount: Decimal, date: &str) -> Entry {
    Entry {
        id: EntryId::from(id),
        kind,
        category: category.into(),
        amount,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        fixed: false,
    }
}

fn month(s: &str) -> MonthKey {
    s.parse().unwrap()
}

fn scenario() -> Vec<Entry> {
    vec![
        entry("1", EntryKind::Income, "Salário", dec!(3000), "2024-03-05"),
        entry("2", EntryKind::Expense, "Aluguel", dec!(1200), "2024-03-10"),
        entry("3", EntryKind::Expense, "Aluguel", dec!(100), "2024-04-01"),
    ]
}

#[test]
fn march_scenario() {
    let s = summarize(&scenario(), month("2024-03"));
    let names: Vec<_> = s.categories.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(names, vec!["Aluguel", "Salário"]);

    let rent = s.category("Aluguel").unwrap();
    assert_eq!(rent.income, Decimal::ZERO);
    assert_eq!(rent.expense, dec!(1200));
    let salary = s.category("Salário").unwrap();
    assert_eq!(salary.income, dec!(3000));
    assert_eq!(salary.expense, Decimal::ZERO);

    assert_eq!(s.total_income, dec!(3000));
    assert_eq!(s.total_expense, dec!(1200));
    assert_eq!(s.balance, dec!(1800));
}

#[test]
fn april_scenario_has_negative_balance() {
    let s = summarize(&scenario(), month("2024-04"));
    assert_eq!(s.categories.len(), 1);
    assert_eq!(s.category("Aluguel").unwrap().expense, dec!(100));
    assert_eq!(s.balance, dec!(-100));
}

#[test]
fn empty_month_is_all_zero() {
    let s = summarize(&scenario(), month("2023-01"));
    assert!(s.categories.is_empty());
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.total_expense, Decimal::ZERO);
    assert_eq!(s.balance, Decimal::ZERO);
}

#[test]
fn category_can_hold_both_kinds() {
    let entries = vec![
        entry("1", EntryKind::Income, "Side", dec!(50.25), "2024-05-01"),
        entry("2", EntryKind::Expense, "Side", dec!(20.10), "2024-05-02"),
        entry("3", EntryKind::Income, "Side", dec!(0.10), "2024-05-03"),
    ];
    let s = summarize(&entries, month("2024-05"));
    let side = s.category("Side").unwrap();
    assert_eq!(side.income, dec!(50.35));
    assert_eq!(side.expense, dec!(20.10));
    assert_eq!(side.net(), dec!(30.25));
}

#[test]
fn totals_are_additive() {
    let entries = vec![
        entry("1", EntryKind::Income, "a", dec!(0.1), "2024-07-01"),
        entry("2", EntryKind::Income, "b", dec!(0.2), "2024-07-02"),
        entry("3", EntryKind::Expense, "c", dec!(0.3), "2024-07-03"),
        entry("4", EntryKind::Expense, "a", dec!(7.77), "2024-07-04"),
        entry("5", EntryKind::Income, "c", dec!(1), "2024-08-01"),
    ];
    let s = summarize(&entries, month("2024-07"));
    let inc: Decimal = s.categories.iter().map(|c| c.income).sum();
    let exp: Decimal = s.categories.iter().map(|c| c.expense).sum();
    assert_eq!(s.total_income, inc);
    assert_eq!(s.total_expense, exp);
    assert_eq!(s.total_income - s.total_expense, s.balance);
    assert_eq!(s.total_income, dec!(0.3));
}

#[test]
fn hide_empty_is_a_post_filter() {
    let entries = vec![
        entry("1", EntryKind::Expense, "Nothing", dec!(0), "2024-05-01"),
        entry("2", EntryKind::Expense, "Food", dec!(12), "2024-05-02"),
    ];
    let s = summarize(&entries, month("2024-05"));
    assert_eq!(s.categories.len(), 2);
    assert_eq!(s.visible_categories(false).len(), 2);
    let shown: Vec<_> = s
        .visible_categories(true)
        .into_iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(shown, vec!["Food"]);
    assert_eq!(s.total_expense, dec!(12));
}

#[test]
fn categories_sorted_dictionary_style() {
    let entries = vec![
        entry("1", EntryKind::Expense, "saúde", dec!(1), "2024-05-01"),
        entry("2", EntryKind::Expense, "Transporte", dec!(1), "2024-05-01"),
        entry("3", EntryKind::Expense, "Água", dec!(1), "2024-05-01"),
        entry("4", EntryKind::Expense, "Mercado", dec!(1), "2024-05-01"),
    ];
    let s = summarize(&entries, month("2024-05"));
    let names: Vec<_> = s.categories.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(names, vec!["Água", "Mercado", "saúde", "Transporte"]);
}

#[test]
fn collate_distinguishes_case_only_as_tiebreak() {
    assert_eq!(collate("food", "Food"), "food".cmp("Food"));
    assert_eq!(collate("apple", "Banana"), Ordering::Less);
    assert_eq!(collate("x", "x"), Ordering::Equal);
}

#[test]
fn totals_at_the_amount_ceiling_stay_exact() {
    let entries: Vec<Entry> = (0..1000)
        .map(|i| entry(&i.to_string(), EntryKind::Income, "Big", MAX_AMOUNT, "2024-06-01"))
        .collect();
    let s = summarize(&entries, month("2024-06"));
    assert_eq!(s.total_income, MAX_AMOUNT * dec!(1000));
    assert_eq!(s.balance, s.total_income);
}

#[test]
fn overflowing_totals_clamp_instead_of_panicking() {
    let entries = vec![
        entry("1", EntryKind::Income, "Huge", Decimal::MAX, "2024-06-01"),
        entry("2", EntryKind::Income, "Huge", dec!(1), "2024-06-02"),
        entry("3", EntryKind::Income, "Other", dec!(5), "2024-06-03"),
        entry("4", EntryKind::Expense, "Huge", Decimal::MAX, "2024-06-04"),
    ];
    let s = summarize(&entries, month("2024-06"));
    assert_eq!(s.category("Huge").unwrap().income, Decimal::MAX);
    assert_eq!(s.total_income, Decimal::MAX);
    assert_eq!(s.total_expense, Decimal::MAX);
    assert_eq!(s.balance, Decimal::ZERO);
}
