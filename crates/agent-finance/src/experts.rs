//! Expert toolkits
//!
//! The assistant is a team of three experts behind a supervisor. Choosing an
//! expert and deciding which tool to call belongs to the orchestration layer;
//! this module only fixes which tools each expert is allowed to use.

use agent_core::{Error, Result};
use agent_tools::{Tool, ToolRegistry};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::config::FinanceConfig;
use crate::filings::FilingLookup;
use crate::quote::QuoteResolver;
use crate::tools::{AddTool, MultiplyTool, SecFilingsTool, StockPriceTool, WebSearchTool};

/// Members of the team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expert {
    /// Prices and filings
    Stock,
    /// Arithmetic
    Math,
    /// News and general research
    Research,
}

impl Expert {
    /// Every expert, in the order the supervisor lists them
    pub const ALL: [Expert; 3] = [Expert::Stock, Expert::Research, Expert::Math];

    /// Agent name used by the orchestration layer
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stock => "stock_expert",
            Self::Math => "math_expert",
            Self::Research => "research_expert",
        }
    }

    /// What the expert handles
    pub fn description(&self) -> &'static str {
        match self {
            Self::Stock => "Stock prices and SEC filings",
            Self::Math => "Arithmetic, one tool call at a time",
            Self::Research => "Web research and stock news, no math",
        }
    }

    /// Look up an expert by agent name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }
}

impl fmt::Display for Expert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One tool registry per expert
pub struct ExpertTeam {
    stock: ToolRegistry,
    math: ToolRegistry,
    research: ToolRegistry,
}

impl ExpertTeam {
    /// Build the team with the standard data sources
    pub fn from_config(config: &FinanceConfig) -> Self {
        let client = Client::new();
        let resolver = Arc::new(QuoteResolver::with_client(client.clone(), config));
        let filings = Arc::new(FilingLookup::with_client(client, config));
        Self::with_services(resolver, filings)
    }

    /// Build the team around existing services
    pub fn with_services(resolver: Arc<QuoteResolver>, filings: Arc<FilingLookup>) -> Self {
        let stock = ToolRegistry::new();
        stock.register(Arc::new(StockPriceTool::new(resolver)));
        stock.register(Arc::new(SecFilingsTool::new(filings)));

        let math = ToolRegistry::new();
        math.register(Arc::new(AddTool));
        math.register(Arc::new(MultiplyTool));

        let research = ToolRegistry::new();
        research.register(Arc::new(WebSearchTool));

        Self {
            stock,
            math,
            research,
        }
    }

    /// Tools available to `expert`
    pub fn toolkit(&self, expert: Expert) -> &ToolRegistry {
        match expert {
            Expert::Stock => &self.stock,
            Expert::Math => &self.math,
            Expert::Research => &self.research,
        }
    }

    /// Iterate experts with their toolkits
    pub fn members(&self) -> impl Iterator<Item = (Expert, &ToolRegistry)> {
        Expert::ALL.into_iter().map(|expert| (expert, self.toolkit(expert)))
    }

    /// Find which expert owns a tool
    pub fn find_tool(&self, name: &str) -> Option<(Expert, Arc<dyn Tool>)> {
        self.members()
            .find_map(|(expert, registry)| registry.get(name).map(|tool| (expert, tool)))
    }

    /// Execute a tool by name, whichever expert owns it
    pub async fn execute(&self, tool_name: &str, params: Value) -> Result<Value> {
        let (expert, tool) = self
            .find_tool(tool_name)
            .ok_or_else(|| Error::ToolNotFound(tool_name.to_string()))?;

        debug!(%expert, tool = tool_name, "Dispatching tool call");
        tool.execute(params).await
    }
}
