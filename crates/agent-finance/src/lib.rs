//! Financial data tools for LLM agents
//!
//! This crate provides the deterministic half of a small multi-agent finance
//! assistant. Agent reasoning and routing live in whatever orchestration layer
//! calls these tools; everything here is plain data retrieval:
//!
//! - A quote resolver that walks an ordered chain of price sources
//!   (FinancialDatasets.ai, SEC-API, Yahoo Finance) and returns the first success
//! - A single-source SEC filing lookup
//! - Placeholder math and research tools
//! - Expert toolkits grouping those tools the way the agents use them
//!
//! # Example
//!
//! ```rust,no_run
//! use agent_finance::{FinanceConfig, QuoteResolver};
//!
//! # async fn example() {
//! let config = FinanceConfig::from_env();
//! let resolver = QuoteResolver::from_config(&config);
//!
//! match resolver.lookup("TSLA").await {
//!     Ok(quote) => println!("{quote}"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod experts;
pub mod filings;
pub mod quote;
pub mod tools;

pub use config::FinanceConfig;
pub use error::{FinanceError, Result, SourceFailure};
pub use experts::{Expert, ExpertTeam};
pub use filings::{FilingLookup, FilingOutcome};
pub use quote::{Quote, QuoteError, QuoteResolver, QuoteSource, SourceAttempt};
pub use tools::{AddTool, MultiplyTool, SecFilingsTool, StockPriceTool, WebSearchTool};
