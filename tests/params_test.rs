use onchain_datasource_rs::{CryptoQuantQuery, GlassnodeQuery, QueryParams};

#[test]
fn test_reserve_query_encoding() {
    // The canonical reserve query: parameter order is normalized alphabetically
    let query = CryptoQuantQuery::new()
        .exchange("all_exchange")
        .window("day")
        .limit(20);

    let encoded = query.to_params().encode();
    assert_eq!(encoded, "exchange=all_exchange&limit=20&window=day");
}

#[test]
fn test_unset_fields_are_omitted() {
    let query = CryptoQuantQuery::new().window("day");
    let params = query.to_params();

    assert!(params.contains("window"));
    for name in [
        "exchange",
        "symbol",
        "from",
        "to",
        "start_time",
        "end_time",
        "limit",
        "flatten",
        "type",
    ] {
        assert!(
            !params.contains(name),
            "unset field '{}' should not be encoded",
            name
        );
        assert!(
            !params.encode().contains(name),
            "unset field '{}' leaked into the query string",
            name
        );
    }
}

#[test]
fn test_empty_query_encodes_to_empty_string() {
    let params = CryptoQuantQuery::new().to_params();
    assert!(params.is_empty());
    assert_eq!(params.encode(), "");
}

#[test]
fn test_field_can_be_toggled_without_changing_the_rest() {
    // Mirrors the entity-list query: type + start_time/end_time + limit,
    // with the window field toggled off.
    let with_window = CryptoQuantQuery::new()
        .entity_type("exchange")
        .window("day")
        .start_time(1735689600)
        .end_time(1738368000)
        .limit(1);
    let without_window = CryptoQuantQuery::new()
        .entity_type("exchange")
        .start_time(1735689600)
        .end_time(1738368000)
        .limit(1);

    assert_eq!(
        with_window.to_params().encode(),
        "end_time=1738368000&limit=1&start_time=1735689600&type=exchange&window=day"
    );
    assert_eq!(
        without_window.to_params().encode(),
        "end_time=1738368000&limit=1&start_time=1735689600&type=exchange"
    );
}

#[test]
fn test_scalar_value_rendering() {
    let params = QueryParams::new()
        .set("flatten", true)
        .set("limit", 10000i64)
        .set("a", "BTC");

    assert_eq!(params.encode(), "a=BTC&flatten=true&limit=10000");
}

#[test]
fn test_values_are_percent_encoded() {
    let params = QueryParams::new().set("from", "2019-10-03 22:00");
    assert_eq!(params.encode(), "from=2019-10-03+22%3A00");
}

#[test]
fn test_glassnode_short_wire_names() {
    let query = GlassnodeQuery::new()
        .asset("BTC")
        .interval("1h")
        .start_time(1430697600000)
        .limit(10000);

    assert_eq!(
        query.to_params().encode(),
        "a=BTC&i=1h&limit=10000&start_time=1430697600000"
    );
}

#[test]
fn test_chrono_timestamp_builders() {
    use chrono::TimeZone;

    let ts = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let cq = CryptoQuantQuery::new().start_at(ts);
    assert_eq!(cq.start_time, Some(1735689600));

    let gn = GlassnodeQuery::new().start_at(ts);
    assert_eq!(gn.start_time, Some(1735689600000));
}
