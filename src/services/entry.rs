//! Entry service
//!
//! Validates income and expense entries and turns user requests into ledger
//! mutations. Only stored entries are reachable here: recurring rows shown
//! in a month have no `EntryId` and cannot be edited or deleted through this
//! path.

use chrono::NaiveDate;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Entry, EntryId, EntryKind, Yen};
use crate::storage::{LedgerMutation, Storage};

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> KakeiboResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| KakeiboError::InvalidDate(s.to_string()))
}

/// Changes requested for an existing entry; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub kind: Option<EntryKind>,
    pub name: Option<String>,
    pub amount: Option<Yen>,
    pub date: Option<NaiveDate>,
}

/// Service for entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new entry
    pub fn add(
        &self,
        kind: EntryKind,
        amount: Yen,
        date: NaiveDate,
        name: Option<String>,
    ) -> KakeiboResult<Entry> {
        let mut entry = Entry::new(kind, amount, date);
        if let Some(name) = name {
            entry.set_name(name);
        }

        entry
            .validate()
            .map_err(|e| KakeiboError::Validation(e.to_string()))?;

        self.storage
            .ledger
            .apply(LedgerMutation::AddEntry(entry.clone()))?;
        self.storage.ledger.save()?;

        tracing::info!(id = %entry.id, kind = %entry.kind, amount = entry.amount.value(), "added entry");
        Ok(entry)
    }

    /// Update an entry in place; its ID never changes
    pub fn update(&self, id: EntryId, changes: EntryChanges) -> KakeiboResult<Entry> {
        let mut entry = self
            .storage
            .ledger
            .get_entry(id)?
            .ok_or_else(|| KakeiboError::entry_not_found(id.to_string()))?;

        if let Some(kind) = changes.kind {
            entry.kind = kind;
        }
        if let Some(name) = changes.name {
            entry.set_name(name);
        }
        if let Some(amount) = changes.amount {
            entry.amount = amount;
        }
        if let Some(date) = changes.date {
            entry.date = date;
        }

        entry
            .validate()
            .map_err(|e| KakeiboError::Validation(e.to_string()))?;

        self.storage.ledger.apply(LedgerMutation::UpdateEntry {
            id,
            entry: entry.clone(),
        })?;
        self.storage.ledger.save()?;

        tracing::info!(id = %id, "updated entry");
        Ok(entry)
    }

    /// Delete an entry; returns the removed entry, if there was one
    pub fn delete(&self, id: EntryId) -> KakeiboResult<Option<Entry>> {
        let existing = self.storage.ledger.get_entry(id)?;

        if self.storage.ledger.apply(LedgerMutation::DeleteEntry(id))? {
            self.storage.ledger.save()?;
            tracing::info!(id = %id, "deleted entry");
        }

        Ok(existing)
    }

    /// Find an entry by full or short ID
    pub fn find(&self, identifier: &str) -> KakeiboResult<Option<Entry>> {
        self.storage.ledger.find_entry(identifier)
    }

    /// Find an entry or fail with a not-found error
    pub fn require(&self, identifier: &str) -> KakeiboResult<Entry> {
        self.find(identifier)?
            .ok_or_else(|| KakeiboError::entry_not_found(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KakeiboPaths;
    use crate::models::{ExpenseCategory, IncomeCategory};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-05-10").unwrap(), may(10));
        assert!(matches!(
            parse_date("2024-02-30"),
            Err(KakeiboError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_date("yesterday"),
            Err(KakeiboError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_add_entry_persists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        let entry = service
            .add(EntryKind::income(), Yen::new(300_000), may(10), Some("Salary".into()))
            .unwrap();

        storage.ledger.load().unwrap();
        let reloaded = storage.ledger.get_entry(entry.id).unwrap().unwrap();
        assert_eq!(reloaded, entry);
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        let err = service
            .add(EntryKind::expense(), Yen::zero(), may(1), None)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(storage.ledger.snapshot().unwrap().entries.is_empty());
    }

    #[test]
    fn test_update_keeps_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);
        let entry = service
            .add(EntryKind::expense(), Yen::new(5_000), may(1), None)
            .unwrap();

        let updated = service
            .update(
                entry.id,
                EntryChanges {
                    kind: Some(EntryKind::Expense(ExpenseCategory::Fixed)),
                    amount: Some(Yen::new(6_000)),
                    name: Some("Phone".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.amount, Yen::new(6_000));
        assert_eq!(updated.date, may(1));

        let snapshot = storage.ledger.snapshot().unwrap();
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.entries[0], updated);
    }

    #[test]
    fn test_update_validation_leaves_entry_untouched() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);
        let entry = service
            .add(EntryKind::Income(IncomeCategory::Side), Yen::new(10_000), may(2), None)
            .unwrap();

        let result = service.update(
            entry.id,
            EntryChanges {
                amount: Some(Yen::new(-10)),
                ..Default::default()
            },
        );

        assert!(result.is_err());
        assert_eq!(storage.ledger.get_entry(entry.id).unwrap().unwrap(), entry);
    }

    #[test]
    fn test_update_unknown_entry() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        let err = service
            .update(EntryId::new(), EntryChanges::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_is_unconditional() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);
        let entry = service
            .add(EntryKind::expense(), Yen::new(1_000), may(3), None)
            .unwrap();

        let removed = service.delete(entry.id).unwrap();
        assert_eq!(removed.map(|e| e.id), Some(entry.id));
        assert!(service.delete(entry.id).unwrap().is_none());
        assert!(service.find(&entry.id.short()).unwrap().is_none());
    }

    #[test]
    fn test_require_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);
        let entry = service
            .add(EntryKind::expense(), Yen::new(1_000), may(3), None)
            .unwrap();

        assert_eq!(service.require(&entry.id.short()).unwrap().id, entry.id);
        assert!(service.require("ent-00000000").unwrap_err().is_not_found());
    }
}
