use vinyl_domain::{DomainError, Record};

/// The shared domain → record mapping.
///
/// Domains are matched without regard to ASCII case, as DNS names are.
/// Implementations must make every operation atomic with respect to the
/// others: a concurrent reader never observes a half-applied create or
/// remove, and of two racing creates for one domain exactly one succeeds.
pub trait RecordRepository: Send + Sync {
    /// Insert a new record. Fails with `ExistingRecord` when the domain is
    /// already mapped, otherwise with the first failing field check.
    fn create(&self, domain: &str, address: &str, ttl: u32) -> Result<Record, DomainError>;

    /// Delete and return the record for `domain`.
    fn remove(&self, domain: &str) -> Result<Record, DomainError>;

    fn get(&self, domain: &str) -> Result<Record, DomainError>;

    /// Snapshot of every record. Order is unspecified.
    fn list(&self) -> Vec<Record>;

    fn count(&self) -> usize;
}
