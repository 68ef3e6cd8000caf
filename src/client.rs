use crate::{
    config::ClientConfig,
    error::NetworkError,
    models::{CalculateResponse, CalculationResult, ValidatedInput},
};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Remote calculation service
///
/// The orchestrator only talks to the service through this trait, so tests and
/// alternative transports can stand in for the HTTP implementation.
#[async_trait]
pub trait CalculationClient: Send + Sync {
    /// Request the cost comparison for a validated input.
    ///
    /// Implementations must not retry or cache.
    async fn fetch_calculation(
        &self,
        input: &ValidatedInput,
    ) -> Result<CalculationResult, NetworkError>;
}

#[async_trait]
impl<C: CalculationClient + ?Sized> CalculationClient for Arc<C> {
    async fn fetch_calculation(
        &self,
        input: &ValidatedInput,
    ) -> Result<CalculationResult, NetworkError> {
        (**self).fetch_calculation(input).await
    }
}

/// Calculation service over HTTP: `GET <base_url>?batterySize=..&..`
#[derive(Debug, Clone)]
pub struct HttpCalculationClient {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpCalculationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CalculationClient for HttpCalculationClient {
    async fn fetch_calculation(
        &self,
        input: &ValidatedInput,
    ) -> Result<CalculationResult, NetworkError> {
        let mut req = self.client.get(&self.base_url).query(&input.query_pairs());

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        tracing::debug!(url = %self.base_url, "Requesting calculation");
        let response = req.send().await?;

        // Check for HTTP errors
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: CalculateResponse = serde_json::from_slice(&body)?;

        Ok(parsed.into())
    }
}
