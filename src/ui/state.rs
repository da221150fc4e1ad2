use crate::config::AppConfig;
use crate::data::{ListKind, Watchlists};
use crate::display::SortMode;
use crate::types::{QuoteMap, StockQuote, Symbol};
use chrono::{DateTime, Local};

/// Central state of the board window
pub struct BoardState {
    // Lists
    pub lists: Watchlists,

    // Latest refresh
    pub quotes: QuoteMap,
    pub last_updated: Option<DateTime<Local>>,

    // Display
    pub sort_mode: SortMode,
    pub color_threshold: f64,
    pub grid_columns: usize,

    // Input
    pub new_symbol: String,
    pub status_message: String,
}

impl BoardState {
    pub fn new(lists: Watchlists, config: &AppConfig) -> Self {
        Self {
            lists,
            quotes: QuoteMap::new(),
            last_updated: None,
            sort_mode: SortMode::Default,
            color_threshold: config.display.color_threshold,
            grid_columns: config.display.grid_columns,
            new_symbol: String::new(),
            status_message: "Loading quotes...".to_string(),
        }
    }

    /// Replace every quote with the result of the latest refresh.
    pub fn apply_quotes(&mut self, quotes: QuoteMap) {
        self.status_message = format!("Quotes: {}", quotes.len());
        self.quotes = quotes;
        self.last_updated = Some(Local::now());
    }

    pub fn quote(&self, symbol: &str) -> Option<&StockQuote> {
        self.quotes.get(symbol)
    }

    /// Add the symbol typed into the input box. Returns whether the lists
    /// changed, in which case a refresh is needed.
    pub fn add_symbol(&mut self) -> bool {
        let symbol = self.new_symbol.trim().to_string();
        if symbol.is_empty() {
            return false;
        }

        match self.lists.add(&symbol) {
            Ok(true) => {
                self.status_message = format!("Added {}", symbol);
                self.new_symbol.clear();
                true
            }
            Ok(false) => {
                self.status_message = format!("{} is already listed", symbol);
                false
            }
            Err(e) => {
                log::error!("Failed to save watchlist: {}", e);
                self.status_message = format!("Added {} but saving failed: {}", symbol, e);
                self.new_symbol.clear();
                true
            }
        }
    }

    /// Move a symbol between the watchlist and the focus list.
    pub fn toggle(&mut self, symbol: &Symbol) {
        match self.lists.toggle(symbol) {
            Ok(Some(ListKind::Focus)) => {
                self.status_message = format!("{} moved to focus", symbol);
            }
            Ok(Some(ListKind::Watch)) => {
                self.status_message = format!("{} moved to watchlist", symbol);
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Failed to save lists after moving {}: {}", symbol, e);
                self.status_message = format!("Saving lists failed: {}", e);
            }
        }
    }
}

/// State of the one-shot ranking window
pub struct RankingState {
    /// Sorted by change percent, largest first
    pub quotes: Vec<StockQuote>,
    pub chart_base_url: String,
    pub fetched_at: DateTime<Local>,
}

impl RankingState {
    pub fn new(quotes: Vec<StockQuote>, chart_base_url: String) -> Self {
        Self {
            quotes,
            chart_base_url,
            fetched_at: Local::now(),
        }
    }
}
