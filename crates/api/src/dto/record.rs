use serde::{Deserialize, Serialize};
use vinyl_domain::Record;

/// Wire shape of a record. The address is echoed exactly as it was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    pub domain: String,
    pub address: String,
    pub ttl: u32,
}

impl From<&Record> for RecordDto {
    fn from(record: &Record) -> Self {
        Self {
            domain: record.domain().to_string(),
            address: record.address().to_string(),
            ttl: record.ttl(),
        }
    }
}

impl From<Record> for RecordDto {
    fn from(record: Record) -> Self {
        Self::from(&record)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub domain: String,
    pub address: String,
    pub ttl: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub record: RecordDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRecordsResponse {
    pub records: Vec<RecordDto>,
}
