//! The seam between the resolver and individual price providers

use crate::api::{FinancialDatasetsClient, SecApiClient, YahooFinanceClient};
use crate::error::SourceFailure;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Label of the primary source
pub const FINANCIAL_DATASETS_LABEL: &str = "FinancialDatasets.ai";
/// Label of the secondary source
pub const SEC_API_LABEL: &str = "SEC-API";
/// Label of the offline library source
pub const YAHOO_FINANCE_LABEL: &str = "Yahoo Finance";

/// A provider of the latest price for a ticker
///
/// Implementations make exactly one attempt per call and report every
/// problem as a [`SourceFailure`] instead of panicking.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Display label used in results and logs
    fn label(&self) -> &'static str;

    /// Fetch the latest price for `ticker`
    async fn fetch_price(&self, ticker: &str) -> Result<f64, SourceFailure>;
}

#[async_trait]
impl QuoteSource for FinancialDatasetsClient {
    fn label(&self) -> &'static str {
        FINANCIAL_DATASETS_LABEL
    }

    async fn fetch_price(&self, ticker: &str) -> Result<f64, SourceFailure> {
        self.latest_close(ticker).await
    }
}

#[async_trait]
impl QuoteSource for SecApiClient {
    fn label(&self) -> &'static str {
        SEC_API_LABEL
    }

    async fn fetch_price(&self, ticker: &str) -> Result<f64, SourceFailure> {
        self.price(ticker).await
    }
}

#[async_trait]
impl QuoteSource for YahooFinanceClient {
    fn label(&self) -> &'static str {
        YAHOO_FINANCE_LABEL
    }

    async fn fetch_price(&self, ticker: &str) -> Result<f64, SourceFailure> {
        self.latest_close(ticker).await
    }
}
