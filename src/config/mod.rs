pub mod traits;
pub mod refresh;
pub mod watchlist;
pub mod display;
pub mod provider;
pub mod manager;

pub use manager::{ConfigManager, AppConfig, DEFAULT_CONFIG_FILE};
pub use refresh::RefreshConfig;
pub use watchlist::WatchlistConfig;
pub use display::DisplayConfig;
pub use provider::ProviderConfig;
