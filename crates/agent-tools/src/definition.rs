//! Tool descriptors handed to an orchestration layer

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition for an LLM provider
///
/// Describes a tool the model can call: its name, what it does, and the
/// JSON schema of its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (must match the tool in ToolRegistry)
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON schema for the tool's input parameters
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Helpers for building tool input schemas
pub mod schema {
    use serde_json::{Value, json};

    /// Object schema with the given properties and required keys
    pub fn object(properties: Value, required: &[&str]) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// String property schema
    pub fn string(description: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
        })
    }

    /// Number property schema
    pub fn number(description: &str) -> Value {
        json!({
            "type": "number",
            "description": description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_definition_creation() {
        let schema = schema::object(json!({ "ticker": schema::string("Ticker") }), &["ticker"]);

        let def = ToolDefinition::new("get_stock_price", "Latest price", schema.clone());
        assert_eq!(def.name, "get_stock_price");
        assert_eq!(def.input_schema, schema);
        assert_eq!(def.input_schema["required"][0], "ticker");
    }

    #[test]
    fn test_schema_builders() {
        assert_eq!(schema::string("q")["type"], "string");
        assert_eq!(schema::number("n")["type"], "number");
    }
}
