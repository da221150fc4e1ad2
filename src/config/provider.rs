use super::traits::ConfigSection;
use crate::error::TickerboardError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub chart_url: String,
    pub user_agent: String,
    /// Request timeout; requests wait indefinitely when unset
    pub timeout_secs: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com/v8/finance/chart".to_string(),
            chart_url: "https://finance.yahoo.com/chart".to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            timeout_secs: None,
        }
    }
}

impl ConfigSection for ProviderConfig {
    fn section_name() -> &'static str {
        "provider"
    }

    fn validate(&self) -> Result<(), TickerboardError> {
        if !self.base_url.starts_with("http") {
            return Err(TickerboardError::Configuration(
                format!("Provider base URL must be http(s): {}", self.base_url)
            ));
        }
        if !self.chart_url.starts_with("http") {
            return Err(TickerboardError::Configuration(
                format!("Chart URL must be http(s): {}", self.chart_url)
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(TickerboardError::Configuration(
                "Timeout must be at least 1 second when set".to_string()
            ));
        }
        Ok(())
    }
}
