// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use log::{info, warn};

use crate::models::{Entry, EntryForm, EntryId, InvalidEntry};
use crate::month::MonthKey;
use crate::persistence::{LoadOutcome, Persistence, SlotStore, StorageError};
use crate::store::EntryStore;
use crate::summary::{Summary, summarize};

/// The entry store together with the slot it is flushed to.
///
/// Every successful mutation is followed by a save. A failed save keeps the
/// in-memory state and marks the book dirty until a later save lands.
pub struct Book<S: SlotStore> {
    store: EntryStore,
    persistence: Persistence<S>,
    loaded: LoadOutcome,
    last_save_error: Option<StorageError>,
}

impl<S: SlotStore> Book<S> {
    pub fn open(persistence: Persistence<S>) -> Self {
        let (store, loaded) = persistence.load();
        Book {
            store,
            persistence,
            loaded,
            last_save_error: None,
        }
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.loaded
    }

    pub fn add(&mut self, form: &EntryForm) -> Result<EntryId, InvalidEntry> {
        let id = self.store.add(form)?;
        self.flush();
        Ok(id)
    }

    /// Removing an unknown id is a no-op and does not touch storage.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            self.flush();
        }
        removed
    }

    /// Callers are expected to have confirmed with the user.
    pub fn clear(&mut self) {
        let n = self.store.len();
        self.store.clear();
        info!("cleared {} entries", n);
        self.flush();
    }

    pub fn list(&self) -> &[Entry] {
        self.store.list()
    }

    pub fn list_for_month(&self, month: MonthKey) -> Vec<&Entry> {
        self.store.list_for_month(month)
    }

    pub fn summarize(&self, month: MonthKey) -> Summary {
        summarize(self.store.list(), month)
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn is_dirty(&self) -> bool {
        self.last_save_error.is_some()
    }

    pub fn last_save_error(&self) -> Option<&StorageError> {
        self.last_save_error.as_ref()
    }

    /// Writes the current state, surfacing any storage error.
    pub fn save(&mut self) -> Result<(), StorageError> {
        self.persistence.save(self.store.list())?;
        self.last_save_error = None;
        Ok(())
    }

    fn flush(&mut self) {
        if let Err(e) = self.persistence.save(self.store.list()) {
            warn!("entries kept in memory only: {}", e);
            self.last_save_error = Some(e);
        } else {
            self.last_save_error = None;
        }
    }

    pub fn into_parts(self) -> (EntryStore, Persistence<S>) {
        (self.store, self.persistence)
    }
}
