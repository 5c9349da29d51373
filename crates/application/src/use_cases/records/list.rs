use std::sync::Arc;

use vinyl_domain::Record;

use crate::ports::RecordRepository;

pub struct ListRecordsUseCase {
    records: Arc<dyn RecordRepository>,
}

impl ListRecordsUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    pub fn execute(&self) -> Vec<Record> {
        self.records.list()
    }

    pub fn count(&self) -> usize {
        self.records.count()
    }
}
