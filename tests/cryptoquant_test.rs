use onchain_datasource_rs::{Config, CryptoQuant, CryptoQuantQuery, ProviderTrait};

// Live tests run only when DATASOURCE_API_KEY is available (.env is honored).
fn live_config() -> Option<Config> {
    match Config::from_env() {
        Ok(config) => Some(config),
        Err(_) => {
            println!("DATASOURCE_API_KEY not set, skipping live test");
            None
        }
    }
}

#[tokio::test]
async fn test_cryptoquant_health_check() {
    let Some(config) = live_config() else { return };
    let cryptoquant = CryptoQuant::new(config);

    let result = cryptoquant.health_check().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_cryptoquant_exchange_reserve() {
    let Some(config) = live_config() else { return };
    let cryptoquant = CryptoQuant::new(config);

    let query = CryptoQuantQuery::new()
        .exchange("all_exchange")
        .window("day")
        .limit(20);
    let result = cryptoquant.exchange_reserve(&query).await;
    assert!(result.is_ok(), "reserve fetch failed: {:?}", result.err());

    let response = result.unwrap();
    println!("Reserve rows: {}", response.len());
    assert!(!response.is_empty(), "reserve response should carry rows");
    assert!(response.len() <= 20, "limit should cap the row count");
}

#[tokio::test]
async fn test_cryptoquant_entity_list() {
    let Some(config) = live_config() else { return };
    let cryptoquant = CryptoQuant::new(config);

    let query = CryptoQuantQuery::new().entity_type("exchange").limit(5);
    let result = cryptoquant.entity_list(&query).await;
    assert!(result.is_ok(), "entity list failed: {:?}", result.err());

    let response = result.unwrap();
    println!("Entities: {}", response.len());
    assert!(!response.is_empty());
}

#[tokio::test]
async fn test_cryptoquant_get_map() {
    let Some(config) = live_config() else { return };
    let cryptoquant = CryptoQuant::new(config);

    let query = CryptoQuantQuery::new()
        .exchange("all_exchange")
        .window("day")
        .limit(1);
    let result = cryptoquant
        .get_map("exchange-flows/reserve", &query.to_params())
        .await;
    assert!(result.is_ok(), "get_map failed: {:?}", result.err());

    let map = result.unwrap();
    println!("Top-level keys: {:?}", map.keys().collect::<Vec<_>>());
    assert!(!map.is_empty(), "decoded map should have top-level keys");
}

#[tokio::test]
async fn test_cryptoquant_bad_key_is_api_error() {
    // Only meaningful against the live gateway
    if live_config().is_none() {
        return;
    }
    let cryptoquant = CryptoQuant::new(Config::new("invalid-key"));

    let query = CryptoQuantQuery::new().limit(1);
    let result = cryptoquant.exchange_reserve(&query).await;
    assert!(
        matches!(
            result,
            Err(onchain_datasource_rs::DatasourceError::ApiError(_))
        ),
        "invalid key should surface as an API error"
    );
}
