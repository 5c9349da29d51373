use thiserror::Error;
use vinyl_domain::DomainError;

/// Every variant's message starts with the client method that failed.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{method}: {source}")]
    Validation {
        method: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("{method}: {message}")]
    Server {
        method: &'static str,
        status: u16,
        message: String,
    },

    #[error("{method}: {source}")]
    Transport {
        method: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
