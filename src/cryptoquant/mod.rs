mod types;
use crate::common::{
    Config, DatasourceError, MetricResponse, ProviderTrait, QueryParams, create_http_client,
};
use async_trait::async_trait;
pub use types::CryptoQuantQuery;

const PROVIDER_SEGMENT: &str = "cryptoquant";
const DEFAULT_ASSET: &str = "btc";

/// CryptoQuant provider behind the gateway (`cryptoquant/<asset>/...`).
pub struct CryptoQuant {
    client: reqwest::Client,
    config: Config,
    asset: String,
}

impl CryptoQuant {
    pub fn new(config: Config) -> Self {
        let client = create_http_client(config.timeout);
        Self {
            client,
            config,
            asset: DEFAULT_ASSET.to_string(),
        }
    }

    /// Builds the provider from `DATASOURCE_API_KEY` in the environment.
    pub fn from_env() -> Result<Self, DatasourceError> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Asset segment of the resource path (`btc` by default).
    pub fn with_asset(mut self, asset: &str) -> Self {
        self.asset = asset.to_lowercase();
        self
    }

    /// Coin reserve held across exchanges (`exchange-flows/reserve`).
    pub async fn exchange_reserve(
        &self,
        query: &CryptoQuantQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("exchange-flows/reserve", &query.to_params()).await
    }

    /// Entities known to the provider (`status/entity-list`).
    pub async fn entity_list(
        &self,
        query: &CryptoQuantQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("status/entity-list", &query.to_params()).await
    }

    /// Fund market price in USD (`fund-data/market-price-usd`).
    pub async fn market_price_usd(
        &self,
        query: &CryptoQuantQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("fund-data/market-price-usd", &query.to_params())
            .await
    }

    /// Fund market volume (`fund-data/market-volume`).
    pub async fn market_volume(
        &self,
        query: &CryptoQuantQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("fund-data/market-volume", &query.to_params()).await
    }

    /// Tokens transferred on-chain (`network-data/tokens-transferred`).
    pub async fn tokens_transferred(
        &self,
        query: &CryptoQuantQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("network-data/tokens-transferred", &query.to_params())
            .await
    }
}

#[async_trait]
impl ProviderTrait for CryptoQuant {
    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn provider_name(&self) -> &str {
        "CryptoQuant"
    }

    fn path_prefix(&self) -> String {
        format!("{}/{}", PROVIDER_SEGMENT, self.asset)
    }

    async fn health_check(&self) -> Result<(), DatasourceError> {
        // Entity list with limit=1 - cheapest round trip that exercises auth
        let params = QueryParams::new()
            .set("type", "exchange")
            .set("limit", 1i64);
        self.get::<serde_json::Value>("status/entity-list", &params)
            .await
            .map_err(|_| DatasourceError::HealthCheckFailed)?;

        Ok(())
    }
}
