use tracing::{info, warn};
use vinyl_application::ports::QueryLogPort;
use vinyl_domain::{QueryLog, ResponseStatus};

/// Writes one structured event per resolved DNS request.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingQueryLog;

impl TracingQueryLog {
    pub fn new() -> Self {
        Self
    }
}

impl QueryLogPort for TracingQueryLog {
    fn log_query(&self, entry: &QueryLog) {
        let questions = entry.questions.join(",");
        let client = entry
            .client_ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "-".to_string());

        match entry.status {
            ResponseStatus::NoError => info!(
                op_code = %entry.op_code,
                questions = %questions,
                client = %client,
                answers = entry.answers,
                rcode = entry.status.as_str(),
                response_time_us = entry.response_time_us,
                "DNS query answered"
            ),
            ResponseStatus::ServFail => warn!(
                op_code = %entry.op_code,
                questions = %questions,
                client = %client,
                rcode = entry.status.as_str(),
                error = entry.error.as_deref().unwrap_or(""),
                response_time_us = entry.response_time_us,
                "DNS query failed"
            ),
        }
    }
}
