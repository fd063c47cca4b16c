//! Process-wide, append-only record store.
//!
//! The store lives for the whole process and is shared between request
//! handlers through an `Arc`. Records are never removed or mutated.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::record::TransactionRecord;

#[derive(Debug, Default)]
pub struct TransactionStore {
    records: RwLock<Vec<TransactionRecord>>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the sequence.
    pub fn append(&self, record: TransactionRecord) {
        let mut records = self.write();
        records.push(record);
        tracing::debug!(total = records.len(), "record appended");
    }

    /// Snapshot of every record, oldest first.
    pub fn list_all(&self) -> Vec<TransactionRecord> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a half-pushed Vec, so a
    // poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<TransactionRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<TransactionRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}
