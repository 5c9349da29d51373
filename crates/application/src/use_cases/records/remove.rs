use std::sync::Arc;

use tracing::info;
use vinyl_domain::{DomainError, Record};

use crate::ports::RecordRepository;

pub struct RemoveRecordUseCase {
    records: Arc<dyn RecordRepository>,
}

impl RemoveRecordUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    pub fn execute(&self, domain: &str) -> Result<Record, DomainError> {
        let removed = self.records.remove(domain)?;

        info!(
            domain = %removed.domain(),
            address = %removed.address(),
            "Removed record"
        );

        Ok(removed)
    }
}
