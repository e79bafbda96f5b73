// src/common/utils.rs
use chrono::{DateTime, Utc};

// CryptoQuant start_time/end_time are epoch seconds
pub fn epoch_seconds(ts: DateTime<Utc>) -> i64 {
    ts.timestamp()
}

// Glassnode start_time/end_time are epoch milliseconds
pub fn epoch_millis(ts: DateTime<Utc>) -> i64 {
    ts.timestamp_millis()
}
