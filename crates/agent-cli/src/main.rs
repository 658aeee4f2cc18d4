//! Command-line interface for the finance agent toolkit
//!
//! Invokes the same tools an agent would, without an LLM in the loop.
//!
//! ```bash
//! finance-cli price TSLA
//! finance-cli filings AAPL
//! finance-cli add 2 3
//! finance-cli tools
//! ```

use agent_finance::{ExpertTeam, FinanceConfig};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "finance-cli")]
#[command(about = "Run the finance agent tools from the command line", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Latest stock price, with fallback across sources
    Price { ticker: String },
    /// Most recent SEC filing
    Filings { ticker: String },
    /// Add two numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Multiply two numbers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Search for news on a topic
    Search { query: String },
    /// List every expert and its tools
    Tools,
}

impl Command {
    /// Tool name and parameters for this command, if it runs a tool
    fn tool_call(&self) -> Option<(&'static str, Value)> {
        match self {
            Self::Price { ticker } => Some(("get_stock_price", json!({ "ticker": ticker }))),
            Self::Filings { ticker } => Some(("get_sec_filings", json!({ "ticker": ticker }))),
            Self::Add { a, b } => Some(("add", json!({ "a": a, "b": b }))),
            Self::Multiply { a, b } => Some(("multiply", json!({ "a": a, "b": b }))),
            Self::Search { query } => Some(("web_search", json!({ "query": query }))),
            Self::Tools => None,
        }
    }
}

fn print_tools(team: &ExpertTeam) {
    for (expert, toolkit) in team.members() {
        println!("{expert} - {}", expert.description());
        for definition in toolkit.definitions() {
            println!("  {:<16} {}", definition.name, definition.description);
        }
    }
}

/// Text shown for a tool's output
fn display(output: &Value) -> String {
    if let Some(message) = output.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    match output.get("result") {
        Some(result) => result.to_string(),
        None => output.to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agent_utils::load_env_file();
    agent_utils::init_tracing_with_default("warn,agent_finance=info");

    let args = Args::parse();
    let config = FinanceConfig::builder().with_env_tokens().build()?;
    info!(?config, "Starting finance-cli");

    let team = ExpertTeam::from_config(&config);

    match args.command.tool_call() {
        Some((tool, params)) => {
            let output = team.execute(tool, params).await?;
            println!("{}", display(&output));
        }
        None => print_tools(&team),
    }

    Ok(())
}
