//! Arithmetic tools for the math expert

use agent_core::Result;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::parse_params;

#[derive(Debug, Deserialize)]
struct Operands {
    a: f64,
    b: f64,
}

fn operands_schema() -> Value {
    schema::object(
        json!({
            "a": schema::number("First operand"),
            "b": schema::number("Second operand"),
        }),
        &["a", "b"],
    )
}

/// Adds two numbers
pub struct AddTool;

#[async_trait]
impl Tool for AddTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let Operands { a, b } = parse_params(params)?;
        Ok(json!({ "result": a + b }))
    }

    fn name(&self) -> &'static str {
        "add"
    }

    fn description(&self) -> &'static str {
        "Add two numbers."
    }

    fn input_schema(&self) -> Value {
        operands_schema()
    }
}

/// Multiplies two numbers
pub struct MultiplyTool;

#[async_trait]
impl Tool for MultiplyTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let Operands { a, b } = parse_params(params)?;
        Ok(json!({ "result": a * b }))
    }

    fn name(&self) -> &'static str {
        "multiply"
    }

    fn description(&self) -> &'static str {
        "Multiply two numbers."
    }

    fn input_schema(&self) -> Value {
        operands_schema()
    }
}
