use super::traits::ConfigSection;
use crate::error::TickerboardError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchlistConfig {
    pub watchlist_file: PathBuf,
    pub focus_file: PathBuf,
    /// Symbol file read by the ranking window
    pub ranking_file: PathBuf,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            watchlist_file: PathBuf::from("watchlist.txt"),
            focus_file: PathBuf::from("focus.txt"),
            ranking_file: PathBuf::from("stock_list.txt"),
        }
    }
}

impl ConfigSection for WatchlistConfig {
    fn section_name() -> &'static str {
        "watchlist"
    }

    fn validate(&self) -> Result<(), TickerboardError> {
        if self.watchlist_file.as_os_str().is_empty()
            || self.focus_file.as_os_str().is_empty()
            || self.ranking_file.as_os_str().is_empty()
        {
            return Err(TickerboardError::Configuration(
                "Watchlist file names must not be empty".to_string()
            ));
        }
        if self.watchlist_file == self.focus_file {
            return Err(TickerboardError::Configuration(
                "Watchlist and focus list must use different files".to_string()
            ));
        }
        Ok(())
    }
}
