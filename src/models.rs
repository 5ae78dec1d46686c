// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::utils::{parse_date, parse_decimal};

/// Largest accepted amount (10^15). Month totals stay far below
/// `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2764472320, 232830, 0, false, 0);

/// Opaque entry identifier. Generated once, never reused within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        let raw = uuid::Uuid::new_v4().simple().to_string();
        EntryId(raw[..12].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId(s.trim().to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }
}

impl FromStr for EntryKind {
    type Err = InvalidEntry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            other => Err(InvalidEntry::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub fixed: bool,
}

/// Raw form fields as typed by the user, before validation.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub fixed: bool,
}

/// A form that passed validation; only an id is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub kind: EntryKind,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub fixed: bool,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidEntry {
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error("Date is required")]
    MissingDate,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount cannot be negative ({0})")]
    NegativeAmount(Decimal),
    #[error("Amount {0} exceeds the maximum of 1000000000000000")]
    AmountTooLarge(Decimal),
    #[error("Unknown entry type '{0}', expected income or expense")]
    UnknownKind(String),
}

impl EntryForm {
    pub fn validate(&self) -> Result<ValidEntry, InvalidEntry> {
        let kind: EntryKind = self.kind.parse()?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(InvalidEntry::EmptyCategory);
        }

        let date_raw = self.date.trim();
        if date_raw.is_empty() {
            return Err(InvalidEntry::MissingDate);
        }
        let date =
            parse_date(date_raw).map_err(|_| InvalidEntry::InvalidDate(date_raw.to_string()))?;

        let amount_raw = self.amount.trim();
        let amount = parse_decimal(amount_raw)
            .map_err(|_| InvalidEntry::InvalidAmount(amount_raw.to_string()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(InvalidEntry::NegativeAmount(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(InvalidEntry::AmountTooLarge(amount));
        }

        Ok(ValidEntry {
            kind,
            category: category.to_string(),
            amount,
            date,
            fixed: self.fixed,
        })
    }
}

impl ValidEntry {
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date,
            fixed: self.fixed,
        }
    }
}

impl Entry {
    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    /// True when the entry still satisfies the creation rules. Used to screen
    /// restored data.
    pub fn is_well_formed(&self) -> bool {
        !self.id.as_str().is_empty()
            && !self.category.trim().is_empty()
            && !(self.amount.is_sign_negative() && !self.amount.is_zero())
            && self.amount <= MAX_AMOUNT
    }
}
