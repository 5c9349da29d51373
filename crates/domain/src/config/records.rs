use serde::{Deserialize, Serialize};

/// A record to load into the store at start-up.
///
/// Kept as raw fields; validation happens when the store creates the record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordSeed {
    pub domain: String,

    pub address: String,

    pub ttl: u32,
}
