//! Tool for fetching the latest stock price

use agent_core::Result;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::{parse_params, require_non_blank};
use crate::quote::QuoteResolver;

/// Tool that resolves a ticker through the quote fallback chain
///
/// Terminal failure is not a tool error: the output carries
/// `"status": "failed"` alongside the display message.
pub struct StockPriceTool {
    resolver: Arc<QuoteResolver>,
}

#[derive(Debug, Deserialize)]
struct StockPriceParams {
    ticker: String,
}

impl StockPriceTool {
    /// Create a new stock price tool
    pub fn new(resolver: Arc<QuoteResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Tool for StockPriceTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: StockPriceParams = parse_params(params)?;
        require_non_blank("ticker", &params.ticker)?;

        let output = match self.resolver.lookup(&params.ticker).await {
            Ok(quote) => json!({
                "status": "ok",
                "ticker": quote.ticker,
                "source": quote.source,
                "price": quote.price,
                "message": quote.to_string(),
            }),
            Err(err) => json!({
                "status": "failed",
                "ticker": params.ticker,
                "attempts": err.attempts(),
                "message": err.to_string(),
            }),
        };

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "get_stock_price"
    }

    fn description(&self) -> &'static str {
        "Fetch the latest stock price for a ticker. Tries FinancialDatasets.ai, \
         then SEC-API, then Yahoo Finance, and returns the first price found."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol (e.g., 'TSLA', 'AAPL')"),
            }),
            &["ticker"],
        )
    }
}
