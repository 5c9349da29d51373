use std::net::IpAddr;

use crate::dns_query::OpCode;

/// Status reported back to the DNS client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    NoError,
    ServFail,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::NoError => "NOERROR",
            ResponseStatus::ServFail => "SERVFAIL",
        }
    }
}

/// Outcome of resolving a single DNS request.
#[derive(Debug, Clone)]
pub struct QueryLog {
    pub op_code: OpCode,
    pub questions: Vec<String>,
    pub client_ip: Option<IpAddr>,
    pub answers: usize,
    pub status: ResponseStatus,
    /// Full error text for failed requests; never sent over DNS.
    pub error: Option<String>,
    pub response_time_us: u64,
}
