//! Tool for fetching the latest SEC filing

use agent_core::Result;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::{parse_params, require_non_blank};
use crate::filings::{FilingLookup, FilingOutcome};

/// Tool wrapping [`FilingLookup`]
pub struct SecFilingsTool {
    lookup: Arc<FilingLookup>,
}

#[derive(Debug, Deserialize)]
struct SecFilingsParams {
    ticker: String,
}

impl SecFilingsTool {
    /// Create a new SEC filings tool
    pub fn new(lookup: Arc<FilingLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl Tool for SecFilingsTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: SecFilingsParams = parse_params(params)?;
        require_non_blank("ticker", &params.ticker)?;

        let outcome = self.lookup.lookup(&params.ticker).await;
        let mut output = json!({
            "status": outcome.status(),
            "ticker": params.ticker.to_uppercase(),
            "message": outcome.to_string(),
        });

        if let FilingOutcome::Found { filing, .. } = &outcome {
            output["link"] = json!(filing.link);
            output["filing"] = json!(filing);
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "get_sec_filings"
    }

    fn description(&self) -> &'static str {
        "Fetch the most recent SEC filing for a ticker from SEC-API.io."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol (e.g., 'AAPL')"),
            }),
            &["ticker"],
        )
    }
}
