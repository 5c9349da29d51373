use vinyl_domain::{DnsQuery, DnsQuestion, DomainError, OpCode, Record, RecordType};

pub struct RecordBuilder {
    domain: String,
    address: String,
    ttl: u32,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            domain: "test.com".to_string(),
            address: "127.0.0.1".to_string(),
            ttl: 3000,
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn try_build(self) -> Result<Record, DomainError> {
        Record::new(self.domain, self.address, self.ttl)
    }

    pub fn build(self) -> Record {
        self.try_build().expect("builder produced an invalid record")
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn a_query(names: &[&str]) -> DnsQuery {
    DnsQuery::new(
        OpCode::QUERY,
        names
            .iter()
            .map(|name| DnsQuestion::new(*name, RecordType::A))
            .collect(),
    )
}
