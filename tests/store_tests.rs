// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbook::models::{EntryForm, EntryId, EntryKind, InvalidEntry, MAX_AMOUNT};
use budgetbook::month::MonthKey;
use budgetbook::store::EntryStore;
use rust_decimal_macros::dec;

fn form(kind: &str, category: &str, amount: &str, date: &str) -> EntryForm {
    EntryForm {
        kind: kind.into(),
        category: category.into(),
        amount: amount.into(),
        date: date.into(),
        fixed: false,
    }
}

#[test]
fn add_trims_category_and_keeps_fields() {
    let mut store = EntryStore::new();
    let mut f = form("expense", "  Aluguel ", "1200.50", "2024-03-10");
    f.fixed = true;
    let id = store.add(&f).unwrap();

    let e = store.get(&id).unwrap();
    assert_eq!(e.kind, EntryKind::Expense);
    assert_eq!(e.category, "Aluguel");
    assert_eq!(e.amount, dec!(1200.50));
    assert_eq!(e.date.to_string(), "2024-03-10");
    assert!(e.fixed);
}

#[test]
fn category_case_and_inner_spacing_preserved() {
    let mut store = EntryStore::new();
    let id = store.add(&form("income", "Free  LANCE", "10", "2024-01-01")).unwrap();
    assert_eq!(store.get(&id).unwrap().category, "Free  LANCE");
}

#[test]
fn ids_are_unique() {
    let mut store = EntryStore::new();
    let a = store.add(&form("income", "A", "1", "2024-01-01")).unwrap();
    let b = store.add(&form("income", "A", "1", "2024-01-01")).unwrap();
    assert_ne!(a, b);
    assert_eq!(store.len(), 2);
}

#[test]
fn zero_amount_is_accepted() {
    let mut store = EntryStore::new();
    assert!(store.add(&form("expense", "Misc", "0", "2024-01-01")).is_ok());
}

#[test]
fn invalid_forms_leave_store_unchanged() {
    let mut store = EntryStore::new();
    store.add(&form("income", "Salary", "3000", "2024-03-05")).unwrap();
    let before = store.clone();

    let cases = [
        (form("expense", "Food", "-5", "2024-03-05"), InvalidEntry::NegativeAmount(dec!(-5))),
        (form("expense", "", "5", "2024-03-05"), InvalidEntry::EmptyCategory),
        (form("expense", "   ", "5", "2024-03-05"), InvalidEntry::EmptyCategory),
        (form("expense", "Food", "abc", "2024-03-05"), InvalidEntry::InvalidAmount("abc".into())),
        (form("expense", "Food", "", "2024-03-05"), InvalidEntry::InvalidAmount(String::new())),
        (form("expense", "Food", "5", ""), InvalidEntry::MissingDate),
        (form("expense", "Food", "5", "2024-13-40"), InvalidEntry::InvalidDate("2024-13-40".into())),
        (form("gift", "Food", "5", "2024-03-05"), InvalidEntry::UnknownKind("gift".into())),
    ];
    for (f, expected) in cases {
        assert_eq!(store.add(&f).unwrap_err(), expected);
        assert_eq!(store, before);
    }
}

#[test]
fn remove_missing_id_is_noop() {
    let mut store = EntryStore::new();
    store.add(&form("income", "A", "1", "2024-01-01")).unwrap();
    let before = store.clone();
    assert!(!store.remove(&EntryId::from("nope")));
    assert_eq!(store, before);
}

#[test]
fn remove_present_id_shrinks_by_one() {
    let mut store = EntryStore::new();
    let a = store.add(&form("income", "A", "1", "2024-01-01")).unwrap();
    let b = store.add(&form("income", "B", "2", "2024-01-02")).unwrap();
    assert!(store.remove(&a));
    assert_eq!(store.len(), 1);
    assert!(store.list().iter().all(|e| e.id != a));
    assert!(store.contains(&b));
}

#[test]
fn clear_twice_is_same_as_once() {
    let mut store = EntryStore::new();
    store.add(&form("income", "A", "1", "2024-01-01")).unwrap();
    store.clear();
    let once = store.clone();
    store.clear();
    assert_eq!(store, once);
    assert!(store.is_empty());
}

#[test]
fn list_for_month_filters_and_sorts_stably() {
    let mut store = EntryStore::new();
    let late = store.add(&form("expense", "Late", "1", "2024-03-20")).unwrap();
    let tie1 = store.add(&form("expense", "Tie1", "1", "2024-03-05")).unwrap();
    store.add(&form("expense", "Other", "1", "2024-04-01")).unwrap();
    let tie2 = store.add(&form("income", "Tie2", "1", "2024-03-05")).unwrap();
    let early = store.add(&form("income", "Early", "1", "2024-03-01")).unwrap();
    store.add(&form("income", "Prev", "1", "2024-02-29")).unwrap();

    let march: Vec<_> = store
        .list_for_month("2024-03".parse::<MonthKey>().unwrap())
        .into_iter()
        .map(|e| e.id.clone())
        .collect();
    assert_eq!(march, vec![early, tie1, tie2, late]);
}

#[test]
fn list_keeps_insertion_order() {
    let mut store = EntryStore::new();
    let a = store.add(&form("income", "A", "1", "2024-05-01")).unwrap();
    let b = store.add(&form("income", "B", "1", "2024-01-01")).unwrap();
    let ids: Vec<_> = store.list().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn amounts_above_ceiling_are_rejected() {
    let mut store = EntryStore::new();
    assert!(store.add(&form("income", "Big", "1000000000000000", "2024-01-01")).is_ok());
    assert_eq!(
        store.add(&form("income", "Big", "1000000000000000.01", "2024-01-01")).unwrap_err(),
        InvalidEntry::AmountTooLarge(dec!(1000000000000000.01))
    );
    assert_eq!(
        store.add(&form("income", "Big", "79228162514264337593543950335", "2024-01-01")).unwrap_err(),
        InvalidEntry::AmountTooLarge(rust_decimal::Decimal::MAX)
    );
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].amount, MAX_AMOUNT);
}

#[test]
fn high_precision_amount_kept_as_typed() {
    let mut store = EntryStore::new();
    let id = store.add(&form("income", "Juros", "1.00000000000000001", "2024-01-01")).unwrap();
    assert_eq!(store.get(&id).unwrap().amount, dec!(1.00000000000000001));
}
