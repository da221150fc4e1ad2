use super::{
    display::DisplayConfig,
    provider::ProviderConfig,
    refresh::RefreshConfig,
    traits::ConfigSection,
    watchlist::WatchlistConfig,
};
use crate::error::TickerboardError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Settings file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tickerboard.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub refresh: RefreshConfig,
    pub watchlist: WatchlistConfig,
    pub display: DisplayConfig,
    pub provider: ProviderConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), TickerboardError> {
        self.refresh.validate()?;
        self.watchlist.validate()?;
        self.display.validate()?;
        self.provider.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Build a manager from `path`, keeping defaults when the file is
    /// missing or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let manager = Self::new();
        if let Err(e) = manager.load_from_file(&path) {
            log::warn!(
                "Ignoring settings file {}: {}",
                path.as_ref().display(),
                e
            );
        }
        manager
    }

    /// Load settings from a TOML file. A missing file leaves every section at
    /// its default; keys absent from the file keep their defaults too.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TickerboardError> {
        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::from(path.as_ref())
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        log::debug!("Loaded settings from {}", path.as_ref().display());
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TickerboardError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| TickerboardError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| TickerboardError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Apply `f` to a copy of the settings and keep the result only if it
    /// validates.
    pub fn update<F>(&self, f: F) -> Result<(), TickerboardError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::new();
        manager.load_from_file(dir.path().join("absent.toml")).unwrap();

        let config = manager.get();
        assert_eq!(config.refresh.interval(), Duration::from_secs(60));
        assert_eq!(config.refresh.poll_interval(), Duration::from_millis(100));
        assert_eq!(config.display.color_threshold, 0.5);
        assert_eq!(config.display.grid_columns, 10);
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickerboard.toml");
        std::fs::write(
            &path,
            "[refresh]\ninterval_secs = 30\n\n[watchlist]\nfocus_file = \"hot.txt\"\n",
        )
        .unwrap();

        let manager = ConfigManager::new();
        manager.load_from_file(&path).unwrap();
        let config = manager.get();

        assert_eq!(config.refresh.interval_secs, 30);
        assert_eq!(config.refresh.poll_interval_ms, 100);
        assert_eq!(config.watchlist.focus_file, std::path::PathBuf::from("hot.txt"));
        assert_eq!(config.watchlist.watchlist_file, std::path::PathBuf::from("watchlist.txt"));
    }

    #[test]
    fn test_invalid_file_is_rejected_and_defaults_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickerboard.toml");
        std::fs::write(&path, "[refresh]\ninterval_secs = 0\n").unwrap();

        let manager = ConfigManager::new();
        assert!(manager.load_from_file(&path).is_err());
        assert_eq!(manager.get().refresh.interval_secs, 60);

        let fallback = ConfigManager::load_or_default(&path);
        assert_eq!(fallback.get().refresh.interval_secs, 60);
    }

    #[test]
    fn test_out_of_range_interval_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickerboard.toml");
        std::fs::write(
            &path,
            format!("[refresh]\ninterval_secs = {}\n", i64::MAX),
        )
        .unwrap();

        let manager = ConfigManager::new();
        assert!(manager.load_from_file(&path).is_err());
        assert_eq!(manager.get().refresh.interval_secs, 60);

        assert!(manager.update(|c| c.refresh.interval_secs = 86_400).is_ok());
        assert!(manager.update(|c| c.refresh.interval_secs = 86_401).is_err());
        assert!(manager.update(|c| c.refresh.poll_interval_ms = 60_001).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickerboard.toml");

        let manager = ConfigManager::new();
        manager.update(|c| c.display.grid_columns = 6).unwrap();
        manager.save_to_file(&path).unwrap();

        let reloaded = ConfigManager::new();
        reloaded.load_from_file(&path).unwrap();
        assert_eq!(reloaded.get().display.grid_columns, 6);
    }

    #[test]
    fn test_update_rejects_invalid_values() {
        let manager = ConfigManager::new();

        assert!(manager.update(|c| c.refresh.poll_interval_ms = 0).is_err());
        assert!(manager.update(|c| c.display.color_threshold = -1.0).is_err());
        assert!(manager.update(|c| c.display.grid_columns = 0).is_err());
        assert!(manager.update(|c| c.watchlist.focus_file = c.watchlist.watchlist_file.clone()).is_err());

        let config = manager.get();
        assert_eq!(config.refresh.poll_interval_ms, 100);
        assert_eq!(config.display.grid_columns, 10);
    }
}
