//! Ordered fallback across quote sources

use super::result::{Quote, QuoteError, SourceAttempt, render};
use super::source::QuoteSource;
use crate::api::{FinancialDatasetsClient, SecApiClient, YahooFinanceClient};
use crate::config::FinanceConfig;
use crate::error::SourceFailure;
use reqwest::Client;
use tracing::{info, warn};

/// Resolves a ticker to a price by trying sources in priority order
///
/// Sources are tried one at a time and the first success wins. A call
/// never fails outright: when every source fails the result is
/// [`QuoteError::AllSourcesExhausted`] carrying each source's failure.
/// Latency is the sum of every failed source before the one that answers.
pub struct QuoteResolver {
    sources: Vec<Box<dyn QuoteSource>>,
}

impl QuoteResolver {
    /// Resolver over a custom, ordered list of sources
    pub fn new(sources: Vec<Box<dyn QuoteSource>>) -> Self {
        Self { sources }
    }

    /// The standard chain: FinancialDatasets.ai, then SEC-API, then Yahoo Finance
    pub fn from_config(config: &FinanceConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// The standard chain sharing an existing HTTP client
    pub fn with_client(client: Client, config: &FinanceConfig) -> Self {
        Self::new(vec![
            Box::new(FinancialDatasetsClient::from_config(client.clone(), config)),
            Box::new(SecApiClient::from_config(client, config)),
            Box::new(YahooFinanceClient::new()),
        ])
    }

    /// Labels of the configured sources, in the order they are tried
    pub fn source_labels(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.label()).collect()
    }

    /// Look up the latest price for `ticker`
    pub async fn lookup(&self, ticker: &str) -> Result<Quote, QuoteError> {
        let mut attempts = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let label = source.label();
            info!(source = label, ticker, "Trying quote source");

            let failure = match source.fetch_price(ticker).await {
                Ok(price) if price.is_finite() => {
                    info!(source = label, ticker, price, "Quote source answered");
                    return Ok(Quote::new(label, ticker, price));
                }
                Ok(price) => SourceFailure::MalformedPayload(format!("non-finite price {price}")),
                Err(failure) => failure,
            };

            warn!(source = label, ticker, %failure, "Quote source failed");
            attempts.push(SourceAttempt {
                source: label,
                failure,
            });
        }

        warn!(ticker, tried = attempts.len(), "All quote sources failed");
        Err(QuoteError::AllSourcesExhausted {
            ticker: ticker.to_string(),
            attempts,
        })
    }

    /// Look up the latest price and render it as a display message
    pub async fn resolve(&self, ticker: &str) -> String {
        render(&self.lookup(ticker).await)
    }
}
