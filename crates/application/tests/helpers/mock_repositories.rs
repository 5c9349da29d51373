#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use vinyl_application::ports::{QueryLogPort, RecordRepository};
use vinyl_domain::{DomainError, QueryLog, Record};

pub struct MockRecordRepository {
    records: RwLock<HashMap<String, Record>>,
    get_calls: AtomicUsize,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            get_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_records(records: Vec<(&str, &str, u32)>) -> Self {
        let repo = Self::new();
        for (domain, address, ttl) in records {
            repo.insert(domain, address, ttl);
        }
        repo
    }

    pub fn insert(&self, domain: &str, address: &str, ttl: u32) {
        let record = Record::new(domain, address, ttl).expect("invalid test record");
        self.records
            .write()
            .unwrap()
            .insert(domain.to_ascii_lowercase(), record);
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRepository for MockRecordRepository {
    fn create(&self, domain: &str, address: &str, ttl: u32) -> Result<Record, DomainError> {
        let mut records = self.records.write().unwrap();
        if records.contains_key(&domain.to_ascii_lowercase()) {
            return Err(DomainError::ExistingRecord {
                domain: domain.to_string(),
            });
        }
        let record = Record::new(domain, address, ttl)?;
        records.insert(domain.to_ascii_lowercase(), record.clone());
        Ok(record)
    }

    fn remove(&self, domain: &str) -> Result<Record, DomainError> {
        self.records
            .write()
            .unwrap()
            .remove(&domain.to_ascii_lowercase())
            .ok_or_else(|| DomainError::MissingRecord {
                domain: domain.to_string(),
            })
    }

    fn get(&self, domain: &str) -> Result<Record, DomainError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .read()
            .unwrap()
            .get(&domain.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| DomainError::MissingRecord {
                domain: domain.to_string(),
            })
    }

    fn list(&self) -> Vec<Record> {
        self.records.read().unwrap().values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

#[derive(Default)]
pub struct MockQueryLog {
    entries: Mutex<Vec<QueryLog>>,
}

impl MockQueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<QueryLog> {
        self.entries.lock().unwrap().clone()
    }
}

impl QueryLogPort for MockQueryLog {
    fn log_query(&self, entry: &QueryLog) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}
