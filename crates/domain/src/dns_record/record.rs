use std::net::IpAddr;

use crate::errors::DomainError;
use crate::validation;

/// A validated `(domain, address, ttl)` mapping.
///
/// Fields are private so a `Record` can only come out of [`Record::new`],
/// which runs every field check first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    domain: String,
    address: String,
    ip: IpAddr,
    ttl: u32,
}

impl Record {
    pub fn new(
        domain: impl Into<String>,
        address: impl Into<String>,
        ttl: u32,
    ) -> Result<Self, DomainError> {
        let domain = domain.into();
        let address = address.into();

        validation::validate_domain(&domain)?;
        let ip = validation::validate_address(&address)?;
        validation::validate_ttl(ttl)?;

        Ok(Self {
            domain,
            address,
            ip,
            ttl,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Address exactly as it was supplied.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }
}
