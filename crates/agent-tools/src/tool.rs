//! Tool trait definition

use agent_core::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::ToolDefinition;

/// Trait for tools that agents can execute
///
/// Tools are functions an orchestration layer calls on behalf of an agent.
/// Each tool must provide a name, description, and JSON schema for its input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// Tool output as JSON value
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// # Example
    ///
    /// ```
    /// use agent_tools::schema;
    /// use serde_json::json;
    ///
    /// let schema = schema::object(
    ///     json!({
    ///         "a": schema::number("First operand"),
    ///         "b": schema::number("Second operand"),
    ///     }),
    ///     &["a", "b"],
    /// );
    /// assert_eq!(schema["required"][1], "b");
    /// ```
    fn input_schema(&self) -> Value;

    /// Describe the tool for an LLM provider
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }
}
