use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Gateway response envelope.
///
/// Both providers wrap their rows in a top-level `data` array; each row is a
/// flat object whose keys depend on the metric, so rows stay generic maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricResponse {
    #[serde(default)]
    pub data: Vec<Map<String, Value>>,
}

impl MetricResponse {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}
