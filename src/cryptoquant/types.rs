use crate::common::{QueryParams, epoch_seconds};
use chrono::{DateTime, Utc};

/// Query parameters accepted by CryptoQuant endpoints.
///
/// Every field is optional and only set fields reach the wire. `from`/`to`
/// take the gateway's compact timestamp format (e.g. `20191003T220000`);
/// `start_time`/`end_time` take epoch seconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CryptoQuantQuery {
    pub exchange: Option<String>,
    /// Fund ticker for `fund-data` endpoints, e.g. `gbtc`.
    pub symbol: Option<String>,
    pub window: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub limit: Option<i64>,
    pub flatten: Option<bool>,
    /// Entity filter for `status/entity-list` (`type` on the wire).
    pub entity_type: Option<String>,
}

impl CryptoQuantQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exchange name, or `all_exchange` for the aggregate series.
    pub fn exchange(mut self, exchange: &str) -> Self {
        self.exchange = Some(exchange.to_string());
        self
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    /// Sampling window: `day`, `hour` or `block`.
    pub fn window(mut self, window: &str) -> Self {
        self.window = Some(window.to_string());
        self
    }

    pub fn from(mut self, from: &str) -> Self {
        self.from = Some(from.to_string());
        self
    }

    pub fn to(mut self, to: &str) -> Self {
        self.to = Some(to.to_string());
        self
    }

    pub fn start_time(mut self, epoch_secs: i64) -> Self {
        self.start_time = Some(epoch_secs);
        self
    }

    pub fn end_time(mut self, epoch_secs: i64) -> Self {
        self.end_time = Some(epoch_secs);
        self
    }

    pub fn start_at(self, ts: DateTime<Utc>) -> Self {
        self.start_time(epoch_seconds(ts))
    }

    pub fn end_at(self, ts: DateTime<Utc>) -> Self {
        self.end_time(epoch_seconds(ts))
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn flatten(mut self, flatten: bool) -> Self {
        self.flatten = Some(flatten);
        self
    }

    pub fn entity_type(mut self, entity_type: &str) -> Self {
        self.entity_type = Some(entity_type.to_string());
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .opt("exchange", self.exchange.clone())
            .opt("symbol", self.symbol.clone())
            .opt("window", self.window.clone())
            .opt("from", self.from.clone())
            .opt("to", self.to.clone())
            .opt("start_time", self.start_time)
            .opt("end_time", self.end_time)
            .opt("limit", self.limit)
            .opt("flatten", self.flatten)
            .opt("type", self.entity_type.clone())
    }
}
