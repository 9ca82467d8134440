use std::time::Duration;

use httpmock::{Method::GET, MockServer};
use portfolio_quotes::{AlphaClient, QuoteError, fetch_quote};
use url::Url;

use crate::common::{TEST_API_KEY, global_quote_body, setup_client};

#[tokio::test]
async fn fetch_normalizes_symbol_and_price() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "GLOBAL_QUOTE")
            .query_param("symbol", "AAPL")
            .query_param("apikey", TEST_API_KEY)
            .query_param("datatype", "json");
        then.status(200)
            .header("content-type", "application/json")
            .body(global_quote_body("150.25"));
    });

    let client = setup_client(&server);
    let quote = fetch_quote(&client, "  aapl ").await.unwrap();

    mock.assert();
    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.short_name, "AAPL");
    assert_eq!(quote.price, 150.25);
    assert_eq!(quote.currency, "USD");
    assert_eq!(quote.source, "Alpha Vantage");
}

#[tokio::test]
async fn quote_serializes_with_camel_case_wire_names() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body(global_quote_body("150.25"));
    });

    let quote = fetch_quote(&setup_client(&server), "aapl").await.unwrap();
    let wire = serde_json::to_value(&quote).unwrap();
    assert_eq!(
        wire,
        serde_json::json!({
            "symbol": "AAPL",
            "shortName": "AAPL",
            "price": 150.25,
            "currency": "USD",
            "source": "Alpha Vantage",
        })
    );
}

#[tokio::test]
async fn underscore_payload_spelling_is_accepted() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .body(r#"{ "Global_Quote": { "05. price": "42.5" } }"#);
    });

    let quote = fetch_quote(&setup_client(&server), "MSFT").await.unwrap();
    assert_eq!(quote.price, 42.5);
}

#[tokio::test]
async fn whitespace_symbol_fails_before_any_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body(global_quote_body("1.0"));
    });

    let err = fetch_quote(&setup_client(&server), "   ").await.unwrap_err();
    assert!(matches!(err, QuoteError::InvalidInput));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn placeholder_api_key_fails_before_any_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body(global_quote_body("1.0"));
    });

    let client = AlphaClient::builder()
        .api_key("YOUR_API_KEY")
        .base_query(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .build()
        .unwrap();

    let err = fetch_quote(&client, "AAPL").await.unwrap_err();
    assert!(matches!(err, QuoteError::Unconfigured));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn rate_limit_advisory_wins_over_valid_payload() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body(
            r#"{
                "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute.",
                "Global Quote": { "05. price": "150.25" }
            }"#,
        );
    });

    let err = fetch_quote(&setup_client(&server), "AAPL").await.unwrap_err();
    match err {
        QuoteError::RateLimited(text) => assert!(text.contains("call frequency")),
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn information_field_also_signals_rate_limiting() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .body(r#"{ "Information": "You have exceeded your daily quota." }"#);
    });

    let err = fetch_quote(&setup_client(&server), "AAPL").await.unwrap_err();
    assert!(matches!(err, QuoteError::RateLimited(text) if text.contains("daily quota")));
}

#[tokio::test]
async fn unparseable_price_is_bad_upstream_data() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body(global_quote_body("abc"));
    });

    let err = fetch_quote(&setup_client(&server), "AAPL").await.unwrap_err();
    assert!(matches!(err, QuoteError::BadUpstreamData(raw) if raw == "abc"));
}

#[tokio::test]
async fn missing_payload_is_not_found() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body(r#"{ "unrelated": {} }"#);
    });

    let err = fetch_quote(&setup_client(&server), "NOPE").await.unwrap_err();
    assert!(matches!(err, QuoteError::NotFound(_)));
}

#[tokio::test]
async fn empty_body_is_not_found_rather_than_a_crash() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body("");
    });

    let err = fetch_quote(&setup_client(&server), "AAPL").await.unwrap_err();
    assert!(matches!(err, QuoteError::NotFound(_)));
}

#[tokio::test]
async fn slow_upstream_times_out_as_upstream_unavailable() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .delay(Duration::from_millis(250))
            .body(global_quote_body("150.25"));
    });

    let client = AlphaClient::builder()
        .api_key(TEST_API_KEY)
        .base_query(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = fetch_quote(&client, "AAPL").await.unwrap_err();
    assert!(matches!(err, QuoteError::UpstreamUnavailable(e) if e.is_timeout()));
}

#[tokio::test]
async fn connection_failure_is_upstream_unavailable() {
    // Nothing listens on port 1.
    let client = AlphaClient::builder()
        .api_key(TEST_API_KEY)
        .base_query(Url::parse("http://127.0.0.1:1/query").unwrap())
        .build()
        .unwrap();

    let err = fetch_quote(&client, "AAPL").await.unwrap_err();
    assert!(matches!(err, QuoteError::UpstreamUnavailable(_)));
}
