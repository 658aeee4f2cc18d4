//! End-to-end fallback behaviour against mocked HTTP sources

use agent_finance::api::{FinancialDatasetsClient, SecApiClient};
use agent_finance::{ExpertTeam, FilingLookup, FinanceConfig, QuoteResolver};
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Port that nothing listens on, for transport failures
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn config(primary: &str, secondary: &str) -> FinanceConfig {
    FinanceConfig::builder()
        .primary_token("key-a")
        .secondary_token("key-b")
        .primary_base_url(primary)
        .secondary_base_url(secondary)
        .build()
        .expect("valid config")
}

/// Primary and secondary only, so no test reaches the live Yahoo source
fn http_chain(config: &FinanceConfig) -> QuoteResolver {
    let client = Client::new();
    QuoteResolver::new(vec![
        Box::new(FinancialDatasetsClient::from_config(client.clone(), config)),
        Box::new(SecApiClient::from_config(client, config)),
    ])
}

async fn mount_primary(server: &MockServer, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/prices/historical"))
        .and(query_param("symbol", "TSLA"))
        .and(header("authorization", "Bearer key-a"))
        .respond_with(response)
        .expect(calls)
        .mount(server)
        .await;
}

async fn mount_secondary(server: &MockServer, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/stocks/TSLA/price"))
        .and(header("authorization", "Bearer key-b"))
        .respond_with(response)
        .expect(calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn primary_success_never_calls_secondary() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_primary(
        &primary,
        ResponseTemplate::new(200).set_body_json(json!({ "data": [{ "close": 242.1 }] })),
        1,
    )
    .await;
    mount_secondary(&secondary, ResponseTemplate::new(200), 0).await;

    let resolver = http_chain(&config(&primary.uri(), &secondary.uri()));
    assert_eq!(
        resolver.resolve("TSLA").await,
        "FinancialDatasets.ai: Latest stock price for TSLA is $242.10"
    );
}

#[tokio::test]
async fn primary_server_error_falls_back_to_secondary() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_primary(&primary, ResponseTemplate::new(500), 1).await;
    mount_secondary(
        &secondary,
        ResponseTemplate::new(200).set_body_json(json!({ "price": 187.5 })),
        1,
    )
    .await;

    let resolver = http_chain(&config(&primary.uri(), &secondary.uri()));
    assert_eq!(
        resolver.resolve("TSLA").await,
        "SEC-API: Latest stock price for TSLA is $187.50"
    );
}

#[tokio::test]
async fn primary_malformed_payload_falls_back_to_secondary() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_primary(
        &primary,
        ResponseTemplate::new(200).set_body_json(json!({ "prices": [] })),
        1,
    )
    .await;
    mount_secondary(
        &secondary,
        ResponseTemplate::new(200).set_body_json(json!({ "price": 187 })),
        1,
    )
    .await;

    let resolver = http_chain(&config(&primary.uri(), &secondary.uri()));
    let quote = resolver.lookup("TSLA").await.expect("secondary answers");
    assert_eq!(quote.source, "SEC-API");
    assert_eq!(quote.to_string(), "SEC-API: Latest stock price for TSLA is $187.00");
}

#[tokio::test]
async fn primary_transport_failure_falls_back_to_secondary() {
    let secondary = MockServer::start().await;
    mount_secondary(
        &secondary,
        ResponseTemplate::new(200).set_body_json(json!({ "price": 187.5 })),
        1,
    )
    .await;

    let resolver = http_chain(&config(UNREACHABLE, &secondary.uri()));
    let quote = resolver.lookup("TSLA").await.expect("secondary answers");
    assert_eq!(quote.source, "SEC-API");
}

#[tokio::test]
async fn missing_primary_token_skips_the_request() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_primary(&primary, ResponseTemplate::new(200), 0).await;
    mount_secondary(
        &secondary,
        ResponseTemplate::new(200).set_body_json(json!({ "price": 187.5 })),
        1,
    )
    .await;

    let config = FinanceConfig {
        primary_token: None,
        ..config(&primary.uri(), &secondary.uri())
    };

    let resolver = http_chain(&config);
    assert_eq!(
        resolver.resolve("TSLA").await,
        "SEC-API: Latest stock price for TSLA is $187.50"
    );
}

#[tokio::test]
async fn every_source_failing_yields_terminal_message() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_primary(&primary, ResponseTemplate::new(503), 1).await;
    mount_secondary(&secondary, ResponseTemplate::new(404), 1).await;

    let resolver = http_chain(&config(&primary.uri(), &secondary.uri()));
    let message = resolver.resolve("TSLA").await;

    assert!(message.contains("All API calls failed for TSLA"));
    assert!(!message.contains("FinancialDatasets.ai:"));
    assert!(!message.contains("SEC-API:"));
}

#[tokio::test]
async fn repeated_calls_have_the_same_shape() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_primary(&primary, ResponseTemplate::new(500), 2).await;
    mount_secondary(
        &secondary,
        ResponseTemplate::new(200).set_body_json(json!({ "price": 187.5 })),
        2,
    )
    .await;

    let resolver = http_chain(&config(&primary.uri(), &secondary.uri()));
    let first = resolver.lookup("TSLA").await.expect("first lookup");
    let second = resolver.lookup("TSLA").await.expect("second lookup");
    assert_eq!(first.source, second.source);
    assert_eq!(first.ticker, second.ticker);
}

#[tokio::test]
async fn filing_lookup_messages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filings"))
        .and(query_param("ticker", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filings": [{ "link": "https://www.sec.gov/aapl-10k" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/filings"))
        .and(query_param("ticker", "msft"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filings": [{ "link": "https://www.sec.gov/msft-10q" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/filings"))
        .and(query_param("ticker", "NULLCO"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "filings": null })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/filings"))
        .and(query_param("ticker", "NEWCO"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "filings": [] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/filings"))
        .and(query_param("ticker", "DENIED"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let lookup = FilingLookup::from_config(&config(UNREACHABLE, &server.uri()));
    assert_eq!(
        lookup.resolve("AAPL").await,
        "Latest SEC filing for AAPL:\nhttps://www.sec.gov/aapl-10k"
    );
    // Ticker goes out as passed; only the message upper-cases it
    assert_eq!(
        lookup.resolve("msft").await,
        "Latest SEC filing for MSFT:\nhttps://www.sec.gov/msft-10q"
    );
    assert_eq!(lookup.resolve("NEWCO").await, "No recent SEC filings found.");
    assert_eq!(lookup.resolve("NULLCO").await, "No recent SEC filings found.");
    assert_eq!(lookup.resolve("DENIED").await, "Failed to retrieve SEC filings.");

    let offline = FilingLookup::from_config(&config(UNREACHABLE, UNREACHABLE));
    assert_eq!(offline.resolve("AAPL").await, "Error fetching SEC filings.");
}

#[tokio::test]
async fn blank_deserialized_token_is_never_sent() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&primary)
        .await;
    mount_secondary(
        &secondary,
        ResponseTemplate::new(200).set_body_json(json!({ "price": 187.5 })),
        1,
    )
    .await;

    let config: FinanceConfig = serde_json::from_value(json!({
        "primary_token": "",
        "secondary_token": "key-b",
        "primary_base_url": primary.uri(),
        "secondary_base_url": secondary.uri(),
    }))
    .expect("valid config");

    let resolver = http_chain(&config);
    assert_eq!(
        resolver.resolve("TSLA").await,
        "SEC-API: Latest stock price for TSLA is $187.50"
    );
}

#[tokio::test]
async fn team_dispatches_stock_tools() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_primary(
        &primary,
        ResponseTemplate::new(200).set_body_json(json!({ "data": [{ "close": 250.0 }] })),
        1,
    )
    .await;

    let config = config(&primary.uri(), &secondary.uri());
    let team = ExpertTeam::with_services(
        Arc::new(QuoteResolver::from_config(&config)),
        Arc::new(FilingLookup::from_config(&config)),
    );

    let output = team
        .execute("get_stock_price", json!({ "ticker": "TSLA" }))
        .await
        .expect("tool runs");
    assert_eq!(output["status"], "ok");
    assert_eq!(output["source"], "FinancialDatasets.ai");
    assert_eq!(output["price"], 250.0);
}
