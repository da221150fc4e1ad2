use super::traits::ConfigSection;
use crate::error::TickerboardError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest accepted refresh interval, one day
pub const MAX_INTERVAL_SECS: u64 = 86_400;
/// Longest accepted UI poll interval, one minute
pub const MAX_POLL_INTERVAL_MS: u64 = 60_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between the end of one fetch and the start of the next
    pub interval_secs: u64,
    /// Milliseconds between UI checks for a finished fetch
    pub poll_interval_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            poll_interval_ms: 100,
        }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl ConfigSection for RefreshConfig {
    fn section_name() -> &'static str {
        "refresh"
    }

    fn validate(&self) -> Result<(), TickerboardError> {
        if self.interval_secs == 0 || self.interval_secs > MAX_INTERVAL_SECS {
            return Err(TickerboardError::Configuration(format!(
                "Refresh interval must be between 1 and {} seconds",
                MAX_INTERVAL_SECS
            )));
        }
        if self.poll_interval_ms == 0 || self.poll_interval_ms > MAX_POLL_INTERVAL_MS {
            return Err(TickerboardError::Configuration(format!(
                "Poll interval must be between 1 and {} milliseconds",
                MAX_POLL_INTERVAL_MS
            )));
        }
        Ok(())
    }
}
