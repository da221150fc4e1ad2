use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tickerboard::market::QuoteProvider;
use tickerboard::{PriceSnapshot, Result, TickerboardError};

/// Provider answering from a fixed table; unknown symbols fail.
#[derive(Default)]
pub struct MockProvider {
    prices: Mutex<HashMap<String, PriceSnapshot>>,
    pub calls: AtomicUsize,
}

impl MockProvider {
    pub fn with(prices: &[(&str, f64, f64)]) -> Self {
        let provider = Self::default();
        for (symbol, previous_close, current_price) in prices {
            provider.set(symbol, *previous_close, *current_price);
        }
        provider
    }

    pub fn set(&self, symbol: &str, previous_close: f64, current_price: f64) {
        self.prices.lock().unwrap().insert(
            symbol.to_string(),
            PriceSnapshot { previous_close, current_price },
        );
    }

    fn lookup(&self, symbol: &str) -> Result<PriceSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prices
            .lock()
            .unwrap()
            .get(symbol)
            .copied()
            .ok_or_else(|| TickerboardError::provider(symbol, "no such symbol"))
    }
}

impl QuoteProvider for MockProvider {
    fn latest(&self, symbol: &str) -> Result<PriceSnapshot> {
        self.lookup(symbol)
    }

    fn last_two_closes(&self, symbol: &str) -> Result<PriceSnapshot> {
        self.lookup(symbol)
    }
}

pub fn symbols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
