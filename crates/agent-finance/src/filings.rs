//! SEC filing lookup
//!
//! A single-source lookup with no fallback: one request to SEC-API, then the
//! outcome is classified as found, empty, rejected or errored.

use crate::api::{SecApiClient, SecFiling};
use crate::config::FinanceConfig;
use crate::error::SourceFailure;
use reqwest::Client;
use std::fmt;
use tracing::{info, warn};

/// Outcome of a filing lookup
#[derive(Debug, Clone, PartialEq)]
pub enum FilingOutcome {
    /// The most recent filing
    Found { ticker: String, filing: SecFiling },
    /// The source answered with no filings
    NoneFound,
    /// The source answered with a status other than 200
    Rejected { status: u16 },
    /// The request or its payload could not be used
    Error(SourceFailure),
}

impl FilingOutcome {
    fn from_result(ticker: &str, result: Result<Option<SecFiling>, SourceFailure>) -> Self {
        match result {
            Ok(Some(filing)) => FilingOutcome::Found {
                ticker: ticker.to_uppercase(),
                filing,
            },
            Ok(None) => FilingOutcome::NoneFound,
            Err(SourceFailure::UnsuccessfulResponse { status, .. }) => {
                FilingOutcome::Rejected { status }
            }
            Err(failure) => FilingOutcome::Error(failure),
        }
    }

    /// Short machine-readable status
    pub fn status(&self) -> &'static str {
        match self {
            FilingOutcome::Found { .. } => "found",
            FilingOutcome::NoneFound => "none",
            FilingOutcome::Rejected { .. } => "failed",
            FilingOutcome::Error(_) => "error",
        }
    }
}

impl fmt::Display for FilingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilingOutcome::Found { ticker, filing } => {
                write!(f, "Latest SEC filing for {ticker}:\n{}", filing.link)
            }
            FilingOutcome::NoneFound => f.write_str("No recent SEC filings found."),
            FilingOutcome::Rejected { .. } => f.write_str("Failed to retrieve SEC filings."),
            FilingOutcome::Error(_) => f.write_str("Error fetching SEC filings."),
        }
    }
}

/// Looks up the most recent SEC filing for a ticker
pub struct FilingLookup {
    client: SecApiClient,
}

impl FilingLookup {
    /// Create a lookup over an existing client
    pub fn new(client: SecApiClient) -> Self {
        Self { client }
    }

    /// Create a lookup from the secondary source settings
    pub fn from_config(config: &FinanceConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a lookup sharing an existing HTTP client
    pub fn with_client(client: Client, config: &FinanceConfig) -> Self {
        Self::new(SecApiClient::from_config(client, config))
    }

    /// Look up the latest filing for `ticker`
    pub async fn lookup(&self, ticker: &str) -> FilingOutcome {
        info!(ticker, "Fetching SEC filings");
        let outcome = FilingOutcome::from_result(ticker, self.client.latest_filing(ticker).await);

        match &outcome {
            FilingOutcome::Rejected { status } => {
                warn!(ticker, status, "SEC filings request rejected");
            }
            FilingOutcome::Error(failure) => warn!(ticker, %failure, "Error fetching SEC filings"),
            _ => {}
        }

        outcome
    }

    /// Look up the latest filing and render it as a display message
    pub async fn resolve(&self, ticker: &str) -> String {
        self.lookup(ticker).await.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filing(link: &str) -> SecFiling {
        SecFiling {
            link: link.to_string(),
            form_type: None,
            filed_at: None,
        }
    }

    #[test]
    fn test_found_message() {
        let outcome = FilingOutcome::from_result("aapl", Ok(Some(filing("https://sec.gov/x"))));
        assert_eq!(outcome.status(), "found");
        assert_eq!(outcome.to_string(), "Latest SEC filing for AAPL:\nhttps://sec.gov/x");
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            FilingOutcome::from_result("A", Ok(None)).to_string(),
            "No recent SEC filings found."
        );

        let rejected = FilingOutcome::from_result(
            "A",
            Err(SourceFailure::UnsuccessfulResponse {
                status: 403,
                body: "forbidden".to_string(),
            }),
        );
        assert_eq!(rejected, FilingOutcome::Rejected { status: 403 });
        assert_eq!(rejected.to_string(), "Failed to retrieve SEC filings.");

        for failure in [
            SourceFailure::MissingCredential,
            SourceFailure::Transport("reset".to_string()),
            SourceFailure::MalformedPayload("missing link".to_string()),
        ] {
            let outcome = FilingOutcome::from_result("A", Err(failure));
            assert_eq!(outcome.status(), "error");
            assert_eq!(outcome.to_string(), "Error fetching SEC filings.");
        }
    }

    #[tokio::test]
    async fn test_missing_token_is_an_error() {
        let lookup = FilingLookup::from_config(&FinanceConfig::default());
        assert_eq!(
            lookup.lookup("AAPL").await,
            FilingOutcome::Error(SourceFailure::MissingCredential)
        );
    }
}
