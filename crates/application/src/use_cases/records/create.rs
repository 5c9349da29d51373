use std::sync::Arc;

use tracing::info;
use vinyl_domain::{DomainError, Record};

use crate::ports::RecordRepository;

pub struct CreateRecordUseCase {
    records: Arc<dyn RecordRepository>,
}

impl CreateRecordUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    pub fn execute(&self, domain: &str, address: &str, ttl: u32) -> Result<Record, DomainError> {
        let record = self.records.create(domain, address, ttl)?;

        info!(
            domain = %record.domain(),
            address = %record.address(),
            ttl = record.ttl(),
            "Created record"
        );

        Ok(record)
    }
}
