use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use vinyl_api::dto::{CreateRecordRequest, ListRecordsResponse, RecordDto, RecordResponse};
use vinyl_domain::validation;

use crate::errors::ClientError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct RecordsClient {
    http: Client,
    base_url: String,
}

impl RecordsClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| ClientError::Transport {
                method: "New",
                source,
            })?;

        Ok(Self::with_http_client(http, base_url))
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Fields are checked locally first; an invalid record never leaves the
    /// process.
    pub async fn create(
        &self,
        domain: &str,
        address: &str,
        ttl: u32,
    ) -> Result<RecordDto, ClientError> {
        const METHOD: &str = "Create";

        validation::validate(domain, address, ttl).map_err(|source| ClientError::Validation {
            method: METHOD,
            source,
        })?;

        let body = CreateRecordRequest {
            domain: domain.to_string(),
            address: address.to_string(),
            ttl,
        };
        let response = self
            .http
            .post(self.url("/api/records"))
            .json(&body)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                method: METHOD,
                source,
            })?;

        let parsed: RecordResponse = Self::parse(METHOD, response).await?;
        Ok(parsed.record)
    }

    pub async fn remove(&self, domain: &str) -> Result<RecordDto, ClientError> {
        const METHOD: &str = "Remove";

        let response = self
            .http
            .delete(self.record_url(domain))
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                method: METHOD,
                source,
            })?;

        let parsed: RecordResponse = Self::parse(METHOD, response).await?;
        Ok(parsed.record)
    }

    pub async fn get(&self, domain: &str) -> Result<RecordDto, ClientError> {
        const METHOD: &str = "Get";

        let response = self
            .http
            .get(self.record_url(domain))
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                method: METHOD,
                source,
            })?;

        let parsed: RecordResponse = Self::parse(METHOD, response).await?;
        Ok(parsed.record)
    }

    pub async fn list(&self) -> Result<Vec<RecordDto>, ClientError> {
        const METHOD: &str = "List";

        let response = self
            .http
            .get(self.url("/api/records"))
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                method: METHOD,
                source,
            })?;

        let parsed: ListRecordsResponse = Self::parse(METHOD, response).await?;
        Ok(parsed.records)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn record_url(&self, domain: &str) -> String {
        self.url(&format!("/api/records/{domain}"))
    }

    async fn parse<T: DeserializeOwned>(
        method: &'static str,
        response: Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            debug!(method, status = status.as_u16(), error = %message, "Server rejected request");
            return Err(ClientError::Server {
                method,
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Transport { method, source })
    }
}
