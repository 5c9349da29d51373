use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;
use vinyl_application::ports::RecordRepository;
use vinyl_domain::{DomainError, Record};

/// Process-wide record table.
///
/// Keys are the ASCII-lowercased domain so lookups follow DNS case
/// insensitivity; each `Record` keeps the domain as it was supplied.
///
/// Every operation holds the lock for its whole check-then-act sequence, so
/// concurrent creates of one domain produce exactly one winner and a remove
/// never hands the same record to two callers.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<String, Record>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

fn store_key(domain: &str) -> String {
    domain.to_ascii_lowercase()
}

impl RecordRepository for InMemoryRecordStore {
    fn create(&self, domain: &str, address: &str, ttl: u32) -> Result<Record, DomainError> {
        let key = store_key(domain);
        let mut records = self.records.write();

        // Existence wins over validity.
        if records.contains_key(&key) {
            return Err(DomainError::ExistingRecord {
                domain: domain.to_string(),
            });
        }

        let record = Record::new(domain, address, ttl)?;
        records.insert(key, record.clone());
        debug!(domain = %domain, total = records.len(), "Record stored");

        Ok(record)
    }

    fn remove(&self, domain: &str) -> Result<Record, DomainError> {
        self.records
            .write()
            .remove(&store_key(domain))
            .ok_or_else(|| DomainError::MissingRecord {
                domain: domain.to_string(),
            })
    }

    fn get(&self, domain: &str) -> Result<Record, DomainError> {
        self.records
            .read()
            .get(&store_key(domain))
            .cloned()
            .ok_or_else(|| DomainError::MissingRecord {
                domain: domain.to_string(),
            })
    }

    fn list(&self) -> Vec<Record> {
        let mut records: Vec<Record> = self.records.read().values().cloned().collect();
        records.sort_by(|a, b| a.domain().cmp(b.domain()));
        records
    }

    fn count(&self) -> usize {
        self.len()
    }
}
