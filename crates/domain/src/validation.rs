//! Record field validation.
//!
//! Checks run in a fixed order (domain, address, TTL) and the first failure
//! wins. Nothing here touches shared state.

use std::net::IpAddr;

use crate::errors::DomainError;

/// Longest presentation-format name accepted, excluding the optional root dot.
pub const MAX_DOMAIN_LENGTH: usize = 253;

pub const MAX_LABEL_LENGTH: usize = 63;

const LABEL_SEPARATOR: char = '.';

/// Validate all three record fields.
///
/// # Examples
///
/// ```
/// use vinyl_domain::validation::validate;
///
/// assert!(validate("test.com", "127.0.0.1", 3000).is_ok());
/// assert!(validate("test!.com", "127.0.0.1", 3000).is_err());
/// assert!(validate("test.com", "127.0.0.1", 0).is_err());
/// ```
pub fn validate(domain: &str, address: &str, ttl: u32) -> Result<(), DomainError> {
    validate_domain(domain)?;
    validate_address(address)?;
    validate_ttl(ttl)?;
    Ok(())
}

pub fn validate_domain(domain: &str) -> Result<(), DomainError> {
    if is_dns_name(domain) {
        Ok(())
    } else {
        Err(DomainError::InvalidDomain {
            domain: domain.to_string(),
        })
    }
}

pub fn validate_address(address: &str) -> Result<IpAddr, DomainError> {
    address
        .parse::<IpAddr>()
        .map_err(|_| DomainError::InvalidAddress {
            address: address.to_string(),
        })
}

pub fn validate_ttl(ttl: u32) -> Result<u32, DomainError> {
    if ttl == 0 {
        return Err(DomainError::InvalidTtl { ttl });
    }
    Ok(ttl)
}

/// DNS host name syntax: dot separated labels of letters, digits and hyphens,
/// no label starting or ending with a hyphen. A single trailing root dot is
/// allowed. IP literals are not names.
pub fn is_dns_name(domain: &str) -> bool {
    let name = domain.strip_suffix(LABEL_SEPARATOR).unwrap_or(domain);

    if name.is_empty() || name.len() > MAX_DOMAIN_LENGTH {
        return false;
    }

    if name.parse::<IpAddr>().is_ok() {
        return false;
    }

    name.split(LABEL_SEPARATOR).all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return false;
    }

    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }

    label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
