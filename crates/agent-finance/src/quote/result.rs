//! Tagged quote results and their rendering

use crate::error::SourceFailure;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A price obtained from one source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Label of the source that answered
    pub source: &'static str,
    /// Ticker, upper-cased
    pub ticker: String,
    /// Price in the source's native precision
    pub price: f64,
}

impl Quote {
    /// Create a quote, upper-casing the ticker
    pub fn new(source: &'static str, ticker: &str, price: f64) -> Self {
        Self {
            source,
            ticker: ticker.to_uppercase(),
            price,
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Latest stock price for {} is ${:.2}",
            self.source, self.ticker, self.price
        )
    }
}

/// One failed source in a lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceAttempt {
    pub source: &'static str,
    #[serde(serialize_with = "serialize_failure")]
    pub failure: SourceFailure,
}

fn serialize_failure<S: serde::Serializer>(
    failure: &SourceFailure,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(failure)
}

/// Terminal outcome of a lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Every configured source failed
    ///
    /// `ticker` is kept exactly as the caller passed it.
    #[error("❌ All API calls failed for {ticker}.")]
    AllSourcesExhausted {
        ticker: String,
        attempts: Vec<SourceAttempt>,
    },
}

impl QuoteError {
    /// Per-source failures, in the order the sources were tried
    pub fn attempts(&self) -> &[SourceAttempt] {
        match self {
            QuoteError::AllSourcesExhausted { attempts, .. } => attempts,
        }
    }
}

/// Render a lookup outcome as the message a caller displays
pub fn render(outcome: &Result<Quote, QuoteError>) -> String {
    match outcome {
        Ok(quote) => quote.to_string(),
        Err(err) => err.to_string(),
    }
}
