mod query_log_port;
mod record_repository;

pub use query_log_port::QueryLogPort;
pub use record_repository::RecordRepository;
