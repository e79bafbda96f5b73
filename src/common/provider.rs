use crate::common::{Config, DatasourceError, QueryParams};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;
use serde_json::{Map, Value};

// Common provider trait definition
#[async_trait]
pub trait ProviderTrait: Send + Sync {
    // Provider specific methods
    fn client(&self) -> &reqwest::Client;
    fn config(&self) -> &Config;
    fn provider_name(&self) -> &str;
    /// Path below the gateway base URL, e.g. `cryptoquant/btc` or `glassnode`.
    fn path_prefix(&self) -> String;

    // Default implementations

    /// Full request URL for an endpoint and parameter set. No I/O.
    fn request_url(&self, endpoint: &str, params: &QueryParams) -> Result<Url, DatasourceError> {
        let base = self.config().base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/{}/{}", base, self.path_prefix(), endpoint))?;
        if !params.is_empty() {
            url.set_query(Some(&params.encode()));
        }
        Ok(url)
    }

    /// One authenticated GET round trip; returns the raw response body.
    async fn get_raw(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<Bytes, DatasourceError> {
        let url = self.request_url(endpoint, params)?;
        let response = self
            .client()
            .get(url)
            .header("accept", "application/json")
            .header("X-API-KEY", self.config().api_key.as_str())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(DatasourceError::ApiError(format!(
                "{} API error: {} - {}",
                self.provider_name(),
                status,
                error_text
            )));
        }

        // Reading the body to completion consumes the response, so the
        // connection is released on every path, including read failures.
        Ok(response.bytes().await?)
    }

    /// Fetch and decode into a caller-chosen type.
    async fn get<T: for<'de> serde::Deserialize<'de>>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<T, DatasourceError> {
        let body = self.get_raw(endpoint, params).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch and decode into a generic key-value map.
    async fn get_map(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<Map<String, Value>, DatasourceError> {
        let value: Value = self.get(endpoint, params).await?;
        match value {
            Value::Object(map) => Ok(map),
            other => Err(DatasourceError::ApiError(format!(
                "{} returned non-object JSON: {}",
                self.provider_name(),
                other
            ))),
        }
    }

    // Trait methods
    async fn health_check(&self) -> Result<(), DatasourceError>;
}
