use std::fmt;
use std::net::IpAddr;

use crate::dns_record::{Record, RecordType};

/// DNS header opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpCode(pub u8);

impl OpCode {
    pub const QUERY: OpCode = OpCode(0);
    pub const IQUERY: OpCode = OpCode(1);

    pub fn is_query(&self) -> bool {
        *self == Self::QUERY
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for OpCode {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: String,
    pub record_type: RecordType,
}

impl DnsQuestion {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }

    /// Name used for store lookups: the question name without its root dot,
    /// ASCII-lowercased since DNS names compare case-insensitively.
    pub fn lookup_name(&self) -> String {
        self.name
            .strip_suffix('.')
            .unwrap_or(&self.name)
            .to_ascii_lowercase()
    }
}

/// Transport-independent view of an inbound DNS request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub op_code: OpCode,
    pub questions: Vec<DnsQuestion>,
    pub client_ip: Option<IpAddr>,
}

impl DnsQuery {
    pub fn new(op_code: OpCode, questions: Vec<DnsQuestion>) -> Self {
        Self {
            op_code,
            questions,
            client_ip: None,
        }
    }

    pub fn with_client_ip(mut self, client_ip: IpAddr) -> Self {
        self.client_ip = Some(client_ip);
        self
    }

    pub fn question_names(&self) -> Vec<String> {
        self.questions.iter().map(|q| q.name.clone()).collect()
    }
}

/// One address answer, ready for the transport to encode.
///
/// IPv6 addresses are answered with AAAA data since an A record cannot carry
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub name: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub address: IpAddr,
}

impl From<&Record> for DnsAnswer {
    fn from(record: &Record) -> Self {
        let record_type = match record.ip() {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::AAAA,
        };
        Self {
            name: record.domain().to_string(),
            record_type,
            ttl: record.ttl(),
            address: record.ip(),
        }
    }
}
