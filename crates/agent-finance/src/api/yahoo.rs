//! Yahoo Finance client

use crate::error::SourceFailure;
use yahoo_finance_api as yahoo;

/// Yahoo Finance client
///
/// Needs no credential. Used as the last resort in the quote chain.
#[derive(Debug, Clone, Default)]
pub struct YahooFinanceClient {}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }

    /// Most recent close from the daily series
    pub async fn latest_close(&self, ticker: &str) -> Result<f64, SourceFailure> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| SourceFailure::Transport(e.to_string()))?;

        let response = provider
            .get_latest_quotes(ticker, "1d")
            .await
            .map_err(|e| SourceFailure::Transport(e.to_string()))?;

        let quote = response
            .last_quote()
            .map_err(|e| SourceFailure::MalformedPayload(e.to_string()))?;

        Ok(quote.close)
    }
}
