//! Configuration for the financial data sources

use crate::error::{FinanceError, Result};
use agent_utils::normalize_secret;
use reqwest::Url;
use serde::Deserialize;
use std::fmt;

/// Default base URL of the primary market-data API
pub const DEFAULT_PRIMARY_BASE_URL: &str = "https://api.financialdatasets.ai";
/// Default base URL of the secondary filings/price API
pub const DEFAULT_SECONDARY_BASE_URL: &str = "https://api.sec-api.io";

/// Environment variable holding the primary API key
pub const PRIMARY_TOKEN_ENV: &str = "FINANCIAL_DATASETS_API_KEY";
/// Environment variable holding the secondary API key
pub const SECONDARY_TOKEN_ENV: &str = "SEC_API_KEY";

/// Credentials and endpoints for the quote and filing sources
///
/// A missing token is not an error: the source that needs it reports
/// itself unreachable and the fallback chain moves on.
///
/// Requests are sent without a timeout override and without retries.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct FinanceConfig {
    /// Bearer token for FinancialDatasets.ai
    pub primary_token: Option<String>,

    /// Bearer token for SEC-API
    pub secondary_token: Option<String>,

    /// Base URL for FinancialDatasets.ai (no trailing slash)
    pub primary_base_url: String,

    /// Base URL for SEC-API (no trailing slash)
    pub secondary_base_url: String,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            primary_token: None,
            secondary_token: None,
            primary_base_url: DEFAULT_PRIMARY_BASE_URL.to_string(),
            secondary_base_url: DEFAULT_SECONDARY_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for FinanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(token: Option<&String>) -> &'static str {
            if token.is_some() { "<set>" } else { "<unset>" }
        }

        f.debug_struct("FinanceConfig")
            .field("primary_token", &redact(self.primary_token.as_ref()))
            .field("secondary_token", &redact(self.secondary_token.as_ref()))
            .field("primary_base_url", &self.primary_base_url)
            .field("secondary_base_url", &self.secondary_base_url)
            .finish()
    }
}

impl FinanceConfig {
    /// Create a new configuration builder
    pub fn builder() -> FinanceConfigBuilder {
        FinanceConfigBuilder::default()
    }

    /// Default endpoints with both tokens read from the environment
    pub fn from_env() -> Self {
        Self {
            primary_token: agent_utils::secret_from_env(PRIMARY_TOKEN_ENV),
            secondary_token: agent_utils::secret_from_env(SECONDARY_TOKEN_ENV),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_base_url("primary_base_url", &self.primary_base_url)?;
        validate_base_url("secondary_base_url", &self.secondary_base_url)?;
        Ok(())
    }
}

fn validate_base_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| FinanceError::ConfigError(format!("{field} is not a valid URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FinanceError::ConfigError(format!(
            "{field} must use http or https, got {}",
            url.scheme()
        )));
    }

    Ok(())
}

/// Builder for FinanceConfig
#[derive(Debug, Default)]
pub struct FinanceConfigBuilder {
    primary_token: Option<String>,
    secondary_token: Option<String>,
    primary_base_url: Option<String>,
    secondary_base_url: Option<String>,
}

impl FinanceConfigBuilder {
    /// Set the FinancialDatasets.ai token
    pub fn primary_token(mut self, token: impl Into<String>) -> Self {
        self.primary_token = Some(token.into());
        self
    }

    /// Set the SEC-API token
    pub fn secondary_token(mut self, token: impl Into<String>) -> Self {
        self.secondary_token = Some(token.into());
        self
    }

    /// Override the FinancialDatasets.ai base URL
    pub fn primary_base_url(mut self, url: impl Into<String>) -> Self {
        self.primary_base_url = Some(url.into());
        self
    }

    /// Override the SEC-API base URL
    pub fn secondary_base_url(mut self, url: impl Into<String>) -> Self {
        self.secondary_base_url = Some(url.into());
        self
    }

    /// Fill unset tokens from the environment
    pub fn with_env_tokens(mut self) -> Self {
        if self.primary_token.is_none() {
            self.primary_token = agent_utils::secret_from_env(PRIMARY_TOKEN_ENV);
        }
        if self.secondary_token.is_none() {
            self.secondary_token = agent_utils::secret_from_env(SECONDARY_TOKEN_ENV);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<FinanceConfig> {
        let defaults = FinanceConfig::default();

        let config = FinanceConfig {
            primary_token: normalize_secret(self.primary_token),
            secondary_token: normalize_secret(self.secondary_token),
            primary_base_url: trim_base_url(
                self.primary_base_url.unwrap_or(defaults.primary_base_url),
            ),
            secondary_base_url: trim_base_url(
                self.secondary_base_url.unwrap_or(defaults.secondary_base_url),
            ),
        };

        config.validate()?;
        Ok(config)
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
