use thiserror::Error;

use crate::dns_query::OpCode;
use crate::dns_record::RecordType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{domain} is not a valid domain name")]
    InvalidDomain { domain: String },

    #[error("{address} is not a valid ip address")]
    InvalidAddress { address: String },

    #[error("{ttl} is not a valid ttl")]
    InvalidTtl { ttl: u32 },

    #[error("a record with the domain {domain} already exists")]
    ExistingRecord { domain: String },

    #[error("no record exists for domain {domain}")]
    MissingRecord { domain: String },

    #[error("opcode {op_code} is not supported at this time")]
    UnsupportedOpcode { op_code: OpCode },

    #[error("record type {} is not supported at this time", .record_type.to_u16())]
    UnsupportedRecordType { record_type: RecordType },
}

impl DomainError {
    /// True for the field-level failures raised while constructing a record.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDomain { .. }
                | DomainError::InvalidAddress { .. }
                | DomainError::InvalidTtl { .. }
        )
    }
}
