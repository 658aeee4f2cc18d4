//! FinancialDatasets.ai client
//!
//! Historical price endpoint, queried for the most recent trading day.

use super::get_json;
use crate::config::FinanceConfig;
use crate::error::SourceFailure;
use agent_utils::normalize_secret;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// FinancialDatasets.ai API client
#[derive(Debug, Clone)]
pub struct FinancialDatasetsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoricalPrices {
    data: Vec<PriceBar>,
}

#[derive(Debug, Deserialize)]
struct PriceBar {
    close: f64,
}

impl FinancialDatasetsClient {
    /// Create a client against `base_url`
    ///
    /// A blank `api_key` counts as absent.
    pub fn new(client: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: normalize_secret(api_key),
        }
    }

    /// Create a client from the primary source settings
    pub fn from_config(client: Client, config: &FinanceConfig) -> Self {
        Self::new(
            client,
            config.primary_base_url.clone(),
            config.primary_token.clone(),
        )
    }

    /// Closing price of the first bar for the most recent trading day
    pub async fn latest_close(&self, ticker: &str) -> Result<f64, SourceFailure> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SourceFailure::MissingCredential)?;

        let url = format!("{}/prices/historical", self.base_url);
        debug!(%url, ticker, "Requesting historical prices");

        let request = self
            .client
            .get(&url)
            .bearer_auth(api_key)
            .query(&[("symbol", ticker), ("date_range", "1d")]);

        let prices: HistoricalPrices = get_json(request).await?;

        prices
            .data
            .first()
            .map(|bar| bar.close)
            .ok_or_else(|| SourceFailure::MalformedPayload("no price bars in response".to_string()))
    }
}
