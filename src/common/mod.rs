pub mod client;
pub mod config;
pub mod errors;
pub mod params;
pub mod provider;
pub mod response;
pub mod utils;

// Re-export
pub use client::create_http_client;
pub use config::{API_KEY_ENV, Config, DEFAULT_BASE_URL, load_dotenv};
pub use errors::DatasourceError;
pub use params::{ParamValue, QueryParams};
pub use provider::ProviderTrait;
pub use response::MetricResponse;
pub use utils::{epoch_millis, epoch_seconds};
