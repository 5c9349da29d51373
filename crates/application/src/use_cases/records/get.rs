use std::sync::Arc;

use vinyl_domain::{DomainError, Record};

use crate::ports::RecordRepository;

pub struct GetRecordUseCase {
    records: Arc<dyn RecordRepository>,
}

impl GetRecordUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    pub fn execute(&self, domain: &str) -> Result<Record, DomainError> {
        self.records.get(domain)
    }
}
