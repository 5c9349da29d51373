//! Vinyl Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod query_log;
pub mod validation;

pub use config::{CliOverrides, Config, ConfigError, RecordSeed};
pub use dns_query::{DnsAnswer, DnsQuery, DnsQuestion, OpCode};
pub use dns_record::{Record, RecordType};
pub use errors::DomainError;
pub use query_log::{QueryLog, ResponseStatus};
