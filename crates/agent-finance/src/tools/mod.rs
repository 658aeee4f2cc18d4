//! Tools exposed to an agent orchestration layer

pub mod math;
pub mod research;
pub mod sec_filings;
pub mod stock_price;

pub use math::{AddTool, MultiplyTool};
pub use research::WebSearchTool;
pub use sec_filings::SecFilingsTool;
pub use stock_price::StockPriceTool;

use agent_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode tool parameters into `T`
pub(crate) fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    Ok(serde_json::from_value(params)?)
}

/// Reject empty or whitespace-only string parameters
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidParameters(format!("{field} must not be empty")));
    }
    Ok(())
}
