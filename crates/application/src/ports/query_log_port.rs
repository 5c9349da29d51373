use vinyl_domain::QueryLog;

/// Sink for per-request resolution outcomes.
pub trait QueryLogPort: Send + Sync {
    fn log_query(&self, entry: &QueryLog);
}
