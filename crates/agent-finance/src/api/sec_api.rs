//! SEC-API.io client
//!
//! Serves both the secondary price lookup and the filing lookup.

use super::get_json;
use crate::config::FinanceConfig;
use crate::error::SourceFailure;
use agent_utils::normalize_secret;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// SEC-API.io client
#[derive(Debug, Clone)]
pub struct SecApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

/// A filing as returned by the filings endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecFiling {
    /// Link to the filing
    pub link: String,
    /// Form type (10-K, 8-K, ...)
    #[serde(rename = "formType", default, skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,
    /// Filing timestamp
    #[serde(rename = "filedAt", default, skip_serializing_if = "Option::is_none")]
    pub filed_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PriceResponse {
    price: f64,
}

#[derive(Debug, Deserialize)]
struct FilingsResponse {
    #[serde(default)]
    filings: Option<Vec<serde_json::Value>>,
}

impl SecApiClient {
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

    /// Create a client from the secondary source settings
    pub fn from_config(client: Client, config: &FinanceConfig) -> Self {
        Self::new(
            client,
            config.secondary_base_url.clone(),
            config.secondary_token.clone(),
        )
    }

    fn api_key(&self) -> Result<&str, SourceFailure> {
        self.api_key
            .as_deref()
            .ok_or(SourceFailure::MissingCredential)
    }

    /// Current price for `ticker`
    pub async fn price(&self, ticker: &str) -> Result<f64, SourceFailure> {
        let api_key = self.api_key()?;
        let url = format!("{}/stocks/{ticker}/price", self.base_url);
        debug!(%url, "Requesting price");

        let response: PriceResponse = get_json(self.client.get(&url).bearer_auth(api_key)).await?;
        Ok(response.price)
    }

    /// Most recent filing for `ticker`, or `None` when the list is empty
    ///
    /// A first filing without a `link` is a malformed payload.
    pub async fn latest_filing(&self, ticker: &str) -> Result<Option<SecFiling>, SourceFailure> {
        let api_key = self.api_key()?;
        let url = format!("{}/filings", self.base_url);
        debug!(%url, ticker, "Requesting filings");

        let request = self
            .client
            .get(&url)
            .bearer_auth(api_key)
            .query(&[("ticker", ticker)]);

        let response: FilingsResponse = get_json(request).await?;

        match response.filings.unwrap_or_default().into_iter().next() {
            Some(first) => Ok(Some(serde_json::from_value(first)?)),
            None => Ok(None),
        }
    }
}
