use crate::error::{Result, TickerboardError};
use std::collections::HashMap;

/// Ticker identifier, e.g. `"2330.TW"`.
pub type Symbol = String;

/// Quotes keyed by symbol; replaced wholesale on every refresh.
pub type QuoteMap = HashMap<Symbol, StockQuote>;

/// Raw price pair reported by a provider for one symbol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSnapshot {
    pub previous_close: f64,
    pub current_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockQuote {
    pub symbol: Symbol,
    pub previous_close: f64,
    pub current_price: f64,
    pub change_percent: f64,
}

impl StockQuote {
    /// Derive a quote from a provider snapshot.
    ///
    /// Fails when the previous close cannot serve as a divisor, so a quote
    /// never carries a NaN or infinite percentage.
    pub fn from_snapshot(symbol: &str, snapshot: PriceSnapshot) -> Result<Self> {
        let PriceSnapshot { previous_close, current_price } = snapshot;

        if !previous_close.is_finite() || previous_close <= 0.0 {
            return Err(TickerboardError::InvalidPrice {
                symbol: symbol.to_string(),
                value: previous_close,
            });
        }
        if !current_price.is_finite() {
            return Err(TickerboardError::provider(symbol, "current price is not finite"));
        }

        Ok(Self {
            symbol: symbol.to_string(),
            previous_close,
            current_price,
            change_percent: change_percent(previous_close, current_price),
        })
    }
}

/// Percentage delta from `previous` to `current`.
pub fn change_percent(previous: f64, current: f64) -> f64 {
    (current - previous) / previous * 100.0
}
