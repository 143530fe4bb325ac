//! Ledger document repository
//!
//! The whole dataset (entries and recurring expenses) lives in one JSON
//! document. Writes are whole-document and last write wins.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::KakeiboError;
use crate::models::{Entry, EntryId, RecurringExpense, RecurringId};

use super::file_io::{read_json, write_json_atomic};

/// The persisted ledger document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerData {
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,
}

/// A requested change to the ledger document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerMutation {
    AddEntry(Entry),
    /// Replace the entry with `id`, keeping that id
    UpdateEntry { id: EntryId, entry: Entry },
    DeleteEntry(EntryId),
    AddRecurring(RecurringExpense),
    DeleteRecurring(RecurringId),
}

impl LedgerData {
    /// Apply a mutation; returns whether the document changed
    pub fn apply(&mut self, mutation: LedgerMutation) -> bool {
        match mutation {
            LedgerMutation::AddEntry(entry) => {
                self.entries.push(entry);
                true
            }
            LedgerMutation::UpdateEntry { id, entry } => {
                match self.entries.iter_mut().find(|e| e.id == id) {
                    Some(existing) => {
                        *existing = Entry { id, ..entry };
                        true
                    }
                    None => false,
                }
            }
            LedgerMutation::DeleteEntry(id) => {
                let before = self.entries.len();
                self.entries.retain(|e| e.id != id);
                self.entries.len() != before
            }
            LedgerMutation::AddRecurring(recurring) => {
                self.recurring_expenses.push(recurring);
                true
            }
            LedgerMutation::DeleteRecurring(id) => {
                let before = self.recurring_expenses.len();
                self.recurring_expenses.retain(|r| r.id != id);
                self.recurring_expenses.len() != before
            }
        }
    }
}

/// Repository for the ledger document
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<LedgerData>,
}

impl LedgerRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(LedgerData::default()),
        }
    }

    /// Load the document from disk
    ///
    /// A missing or unreadable document yields an empty ledger. An unreadable
    /// document is first copied to `<file>.corrupt` so the next save cannot
    /// destroy it.
    pub fn load(&self) -> Result<(), KakeiboError> {
        let file_data: LedgerData = match read_json(&self.path) {
            Ok(data) => data,
            Err(err) => {
                let backup = self.corrupt_backup_path();
                std::fs::copy(&self.path, &backup).map_err(|e| {
                    KakeiboError::Storage(format!(
                        "Failed to preserve unreadable ledger at {}: {}",
                        backup.display(),
                        e
                    ))
                })?;
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %err,
                    "ledger document unreadable, starting from an empty ledger"
                );
                LedgerData::default()
            }
        };

        tracing::debug!(
            entries = file_data.entries.len(),
            recurring = file_data.recurring_expenses.len(),
            "loaded ledger"
        );

        *self.write_lock()? = file_data;
        Ok(())
    }

    /// Save the document to disk
    pub fn save(&self) -> Result<(), KakeiboError> {
        let data = self.read_lock()?;
        write_json_atomic(&self.path, &*data)
    }

    /// A copy of the current document
    pub fn snapshot(&self) -> Result<LedgerData, KakeiboError> {
        Ok(self.read_lock()?.clone())
    }

    /// Apply a mutation in memory; returns whether anything changed
    pub fn apply(&self, mutation: LedgerMutation) -> Result<bool, KakeiboError> {
        Ok(self.write_lock()?.apply(mutation))
    }

    pub fn get_entry(&self, id: EntryId) -> Result<Option<Entry>, KakeiboError> {
        Ok(self.read_lock()?.entries.iter().find(|e| e.id == id).cloned())
    }

    /// Find an entry by full or short ID
    pub fn find_entry(&self, identifier: &str) -> Result<Option<Entry>, KakeiboError> {
        Ok(self
            .read_lock()?
            .entries
            .iter()
            .find(|e| e.id.matches(identifier))
            .cloned())
    }

    /// Find a recurring expense by full or short ID, or by exact name
    pub fn find_recurring(&self, identifier: &str) -> Result<Option<RecurringExpense>, KakeiboError> {
        let data = self.read_lock()?;
        let found = data
            .recurring_expenses
            .iter()
            .find(|r| r.id.matches(identifier))
            .or_else(|| {
                data.recurring_expenses
                    .iter()
                    .find(|r| r.name == identifier.trim())
            });
        Ok(found.cloned())
    }

    /// Where an unreadable document is preserved
    pub fn corrupt_backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<'_, LedgerData>, KakeiboError> {
        self.data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, LedgerData>, KakeiboError> {
        self.data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
