//! Typed client for the record management API.

pub mod client;
pub mod errors;

pub use client::RecordsClient;
pub use errors::ClientError;
pub use vinyl_api::dto::RecordDto;
