//! `onchain-datasource-rs`
//!
//! Typed client for the Cybotrade market-data gateway: fetch CryptoQuant and
//! Glassnode on-chain metrics (exchange flows, fund data, network data) with
//! one authenticated GET per call.
//!
//! ## Quickstart (CryptoQuant)
//!
//! ```no_run
//! use onchain_datasource_rs::{CryptoQuant, CryptoQuantQuery};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), onchain_datasource_rs::DatasourceError> {
//! let cryptoquant = CryptoQuant::from_env()?;
//! let query = CryptoQuantQuery::new()
//!     .exchange("all_exchange")
//!     .window("day")
//!     .limit(20);
//!
//! let reserve = cryptoquant.exchange_reserve(&query).await?;
//! for row in &reserve.data {
//!     println!("{}", serde_json::Value::Object(row.clone()));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Quickstart (Glassnode)
//!
//! ```no_run
//! use onchain_datasource_rs::{Glassnode, GlassnodeQuery};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), onchain_datasource_rs::DatasourceError> {
//! let glassnode = Glassnode::from_env()?;
//! let query = GlassnodeQuery::new().asset("BTC").interval("24h").limit(100);
//!
//! let prices = glassnode.price_usd_close(&query).await?;
//! println!("{} rows", prices.len());
//! # Ok(())
//! # }
//! ```
//!
//! The API key is read from the `DATASOURCE_API_KEY` environment variable
//! (a `.env` file is honored); it is attached to every request as the
//! `X-API-KEY` header and never appears in code.

pub mod common;
pub mod cryptoquant;
pub mod export;
pub mod glassnode;

// Re-export common types
pub use common::{
    API_KEY_ENV, Config, DEFAULT_BASE_URL, DatasourceError, MetricResponse, ParamValue,
    ProviderTrait, QueryParams, create_http_client, epoch_millis, epoch_seconds, load_dotenv,
};
pub use cryptoquant::{CryptoQuant, CryptoQuantQuery};
pub use export::{append_csv, write_json};
pub use glassnode::{Glassnode, GlassnodeQuery};
