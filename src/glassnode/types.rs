use crate::common::{QueryParams, epoch_millis};
use chrono::{DateTime, Utc};

/// Query parameters accepted by Glassnode endpoints.
///
/// Glassnode uses short wire names: `a` for the asset, `i` for the sampling
/// interval. `start_time`/`end_time` take epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlassnodeQuery {
    pub asset: Option<String>,
    pub interval: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub limit: Option<i64>,
}

impl GlassnodeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asset ticker, e.g. `BTC`.
    pub fn asset(mut self, asset: &str) -> Self {
        self.asset = Some(asset.to_string());
        self
    }

    /// Sampling interval: `1h`, `24h`, etc.
    pub fn interval(mut self, interval: &str) -> Self {
        self.interval = Some(interval.to_string());
        self
    }

    pub fn start_time(mut self, epoch_ms: i64) -> Self {
        self.start_time = Some(epoch_ms);
        self
    }

    pub fn end_time(mut self, epoch_ms: i64) -> Self {
        self.end_time = Some(epoch_ms);
        self
    }

    pub fn start_at(self, ts: DateTime<Utc>) -> Self {
        self.start_time(epoch_millis(ts))
    }

    pub fn end_at(self, ts: DateTime<Utc>) -> Self {
        self.end_time(epoch_millis(ts))
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .opt("a", self.asset.clone())
            .opt("i", self.interval.clone())
            .opt("start_time", self.start_time)
            .opt("end_time", self.end_time)
            .opt("limit", self.limit)
    }
}
