use std::sync::Arc;

use vinyl_infrastructure::dns::TracingQueryLog;
use vinyl_infrastructure::repositories::InMemoryRecordStore;

pub struct Repositories {
    pub records: Arc<InMemoryRecordStore>,
    pub query_log: Arc<TracingQueryLog>,
}

impl Repositories {
    pub fn new() -> Self {
        Self {
            records: Arc::new(InMemoryRecordStore::new()),
            query_log: Arc::new(TracingQueryLog::new()),
        }
    }
}
