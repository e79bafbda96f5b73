mod types;
use crate::common::{
    Config, DatasourceError, MetricResponse, ProviderTrait, QueryParams, create_http_client,
};
use async_trait::async_trait;
pub use types::GlassnodeQuery;

const PROVIDER_SEGMENT: &str = "glassnode";

/// Glassnode provider behind the gateway (`glassnode/...`).
pub struct Glassnode {
    client: reqwest::Client,
    config: Config,
}

impl Glassnode {
    pub fn new(config: Config) -> Self {
        let client = create_http_client(config.timeout);
        Self { client, config }
    }

    /// Builds the provider from `DATASOURCE_API_KEY` in the environment.
    pub fn from_env() -> Result<Self, DatasourceError> {
        Ok(Self::new(Config::from_env()?))
    }

    /// New addresses with a non-zero balance (`addresses/new_non_zero_count`).
    pub async fn new_non_zero_addresses(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("addresses/new_non_zero_count", &query.to_params())
            .await
    }

    /// Mean network hash rate (`mining/hash_rate_mean`).
    pub async fn hash_rate_mean(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("mining/hash_rate_mean", &query.to_params()).await
    }

    /// Total coins mined (`mining/volume_mined_sum`).
    pub async fn volume_mined_sum(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("mining/volume_mined_sum", &query.to_params()).await
    }

    /// Miner revenue from fees (`mining/revenue_from_fees`).
    pub async fn revenue_from_fees(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("mining/revenue_from_fees", &query.to_params())
            .await
    }

    /// Total miner revenue (`mining/revenue_sum`).
    pub async fn revenue_sum(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("mining/revenue_sum", &query.to_params()).await
    }

    /// MVRV ratio, account based (`indicators/mvrv_account_based`).
    pub async fn mvrv_account_based(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("indicators/mvrv_account_based", &query.to_params())
            .await
    }

    /// USD closing price (`market/price_usd_close`).
    pub async fn price_usd_close(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("market/price_usd_close", &query.to_params()).await
    }

    /// Adjusted on-chain transfer volume (`transactions/transfers_volume_adjusted_sum`).
    pub async fn transfers_volume_adjusted_sum(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("transactions/transfers_volume_adjusted_sum", &query.to_params())
            .await
    }

    /// Net transfer volume to/from exchanges (`transactions/transfers_volume_exchanges_net`).
    pub async fn transfers_volume_exchanges_net(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("transactions/transfers_volume_exchanges_net", &query.to_params())
            .await
    }

    /// Count of transfers out of exchanges (`transactions/transfers_from_exchanges_count`).
    pub async fn transfers_from_exchanges_count(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("transactions/transfers_from_exchanges_count", &query.to_params())
            .await
    }

    /// Mean transfer volume into exchanges (`transactions/transfers_volume_to_exchanges_mean`).
    pub async fn transfers_volume_to_exchanges_mean(
        &self,
        query: &GlassnodeQuery,
    ) -> Result<MetricResponse, DatasourceError> {
        self.get("transactions/transfers_volume_to_exchanges_mean", &query.to_params())
            .await
    }
}

#[async_trait]
impl ProviderTrait for Glassnode {
    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn provider_name(&self) -> &str {
        "Glassnode"
    }

    fn path_prefix(&self) -> String {
        PROVIDER_SEGMENT.to_string()
    }

    async fn health_check(&self) -> Result<(), DatasourceError> {
        // Closing price with limit=1 - always available for BTC
        let params = QueryParams::new()
            .set("a", "BTC")
            .set("i", "24h")
            .set("limit", 1i64);
        self.get::<serde_json::Value>("market/price_usd_close", &params)
            .await
            .map_err(|_| DatasourceError::HealthCheckFailed)?;

        Ok(())
    }
}
