// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Best-effort persistence of the entry list into a single durable slot.
//!
//! The whole list is written as one JSON document on every save; a read that
//! fails for any reason yields an empty list.

use log::{info, warn};
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::Entry;
use crate::store::EntryStore;

/// Slot name. Doubles as the on-disk format generation.
pub const STORAGE_KEY: &str = "monthly-budget-v1";

/// Payload version written into every saved document.
pub const PAYLOAD_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to encode entries: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Unavailable(e.to_string())
    }
}

/// A durable key-value slot holding text blobs.
pub trait SlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Slots kept in a `slots` table, one row per key.
pub struct SqliteSlots<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteSlots<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        SqliteSlots { conn }
    }
}

impl SlotStore for SqliteSlots<'_> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let v: Option<String> = self
            .conn
            .query_row("SELECT value FROM slots WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO slots(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local slots, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: RefCell<HashMap<String, String>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let s = Self::new();
        s.slots.borrow_mut().insert(key.to_string(), value.to_string());
        s
    }
}

impl SlotStore for MemorySlots {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Payload {
    #[serde(default = "legacy_version")]
    version: u32,
    entries: Vec<Entry>,
}

fn legacy_version() -> u32 {
    1
}

#[derive(Debug, Serialize)]
struct PayloadRef<'a> {
    version: u32,
    entries: &'a [Entry],
}

/// How `load` obtained its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Restored,
    Empty,
    Fallback(String),
}

pub struct Persistence<S: SlotStore> {
    slots: S,
    key: String,
}

impl<S: SlotStore> Persistence<S> {
    pub fn new(slots: S) -> Self {
        Self::with_key(slots, STORAGE_KEY)
    }

    pub fn with_key(slots: S, key: &str) -> Self {
        Persistence {
            slots,
            key: key.to_string(),
        }
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Never fails; problems are reported through the outcome.
    pub fn load(&self) -> (EntryStore, LoadOutcome) {
        match self.try_load() {
            Ok(Some(store)) => {
                info!("restored {} entries from '{}'", store.len(), self.key);
                (store, LoadOutcome::Restored)
            }
            Ok(None) => (EntryStore::new(), LoadOutcome::Empty),
            Err(reason) => {
                warn!("ignoring stored entries in '{}': {}", self.key, reason);
                (EntryStore::new(), LoadOutcome::Fallback(reason))
            }
        }
    }

    fn try_load(&self) -> Result<Option<EntryStore>, String> {
        let raw = match self.slots.read(&self.key).map_err(|e| e.to_string())? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        let payload: Payload =
            serde_json::from_str(&raw).map_err(|e| format!("malformed payload: {}", e))?;
        if payload.version > PAYLOAD_VERSION {
            return Err(format!(
                "payload version {} is newer than supported {}",
                payload.version, PAYLOAD_VERSION
            ));
        }
        if let Some(bad) = payload.entries.iter().find(|e| !e.is_well_formed()) {
            return Err(format!("entry '{}' violates entry rules", bad.id));
        }
        Ok(Some(EntryStore::from_entries(payload.entries)))
    }

    /// Replaces the slot contents with the full entry list.
    pub fn save(&self, entries: &[Entry]) -> Result<(), StorageError> {
        let doc = serde_json::to_string(&PayloadRef {
            version: PAYLOAD_VERSION,
            entries,
        })?;
        self.slots.write(&self.key, &doc)
    }
}
