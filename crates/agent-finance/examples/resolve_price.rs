//! Resolve a price through the fallback chain
//!
//! ```bash
//! export FINANCIAL_DATASETS_API_KEY=...
//! export SEC_API_KEY=...
//! cargo run -p agent-finance --example resolve_price -- TSLA
//! ```

use agent_finance::{FilingLookup, FinanceConfig, QuoteResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agent_utils::init_tracing();

    let ticker = std::env::args().nth(1).unwrap_or_else(|| "TSLA".to_string());
    let config = FinanceConfig::builder().with_env_tokens().build()?;

    let resolver = QuoteResolver::from_config(&config);
    match resolver.lookup(&ticker).await {
        Ok(quote) => println!("{quote}"),
        Err(err) => {
            println!("{err}");
            for attempt in err.attempts() {
                println!("  {}: {}", attempt.source, attempt.failure);
            }
        }
    }

    println!("{}", FilingLookup::from_config(&config).resolve(&ticker).await);
    Ok(())
}
