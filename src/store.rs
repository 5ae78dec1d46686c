// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use log::debug;

use crate::models::{Entry, EntryForm, EntryId, InvalidEntry};
use crate::month::MonthKey;

/// Ordered in-memory list of entries. Insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from restored entries. Entries repeating an earlier id
    /// are dropped.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut store = Self::new();
        for e in entries {
            if store.contains(&e.id) {
                debug!("dropping duplicate entry id {}", e.id);
                continue;
            }
            store.entries.push(e);
        }
        store
    }

    pub fn add(&mut self, form: &EntryForm) -> Result<EntryId, InvalidEntry> {
        let valid = form.validate()?;
        let mut id = EntryId::generate();
        while self.contains(&id) {
            id = EntryId::generate();
        }
        self.entries.push(valid.into_entry(id.clone()));
        debug!("added entry {}", id);
        Ok(id)
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        match self.entries.iter().position(|e| &e.id == id) {
            Some(idx) => {
                self.entries.remove(idx);
                debug!("removed entry {}", id);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one month, by date ascending; same-day entries keep
    /// insertion order.
    pub fn list_for_month(&self, month: MonthKey) -> Vec<&Entry> {
        let mut out: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| month.contains(e.date))
            .collect();
        out.sort_by_key(|e| e.date);
        out
    }
}
