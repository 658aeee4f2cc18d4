//! Research tool placeholder

use agent_core::Result;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::{parse_params, require_non_blank};

/// Simulated web search
///
/// Echoes the query back; no search backend is wired in.
pub struct WebSearchTool;

#[derive(Debug, Deserialize)]
struct WebSearchParams {
    query: String,
}

#[async_trait]
impl Tool for WebSearchTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: WebSearchParams = parse_params(params)?;
        require_non_blank("query", &params.query)?;

        Ok(json!({ "message": format!("Searching for news on: {}", params.query) }))
    }

    fn name(&self) -> &'static str {
        "web_search"
    }

    fn description(&self) -> &'static str {
        "Search the web for stock news on a topic."
    }

    fn input_schema(&self) -> Value {
        schema::object(json!({ "query": schema::string("Search query") }), &["query"])
    }
}
