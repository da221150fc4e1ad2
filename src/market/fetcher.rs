use super::QuoteProvider;
use crate::error::Result;
use crate::types::{PriceSnapshot, QuoteMap, StockQuote, Symbol};
use std::collections::HashSet;

/// Query the current price of every symbol once.
///
/// A symbol whose lookup fails is logged and left out; the remaining symbols
/// are still fetched. Nothing is retried.
pub fn fetch_quotes<P: QuoteProvider + ?Sized>(provider: &P, symbols: &[Symbol]) -> QuoteMap {
    let mut quotes = QuoteMap::with_capacity(symbols.len());

    for symbol in unique(symbols) {
        match quote_for(symbol, provider.latest(symbol)) {
            Ok(quote) => {
                quotes.insert(symbol.clone(), quote);
            }
            Err(e) => log::warn!("Failed to fetch {}: {}", symbol, e),
        }
    }

    log::info!("Fetched {}/{} quotes", quotes.len(), symbols.len());
    quotes
}

/// Fetch the last two closes of every symbol and rank them by change,
/// largest gain first.
pub fn fetch_ranked<P: QuoteProvider + ?Sized>(provider: &P, symbols: &[Symbol]) -> Vec<StockQuote> {
    let quotes: Vec<StockQuote> = unique(symbols)
        .filter_map(|symbol| match quote_for(symbol, provider.last_two_closes(symbol)) {
            Ok(quote) => Some(quote),
            Err(e) => {
                log::warn!("Error fetching {}: {}", symbol, e);
                None
            }
        })
        .collect();

    rank_by_change(quotes)
}

/// Stable sort, descending by change percent.
pub fn rank_by_change(mut quotes: Vec<StockQuote>) -> Vec<StockQuote> {
    quotes.sort_by(|a, b| {
        b.change_percent
            .partial_cmp(&a.change_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    quotes
}

fn quote_for(symbol: &str, snapshot: Result<PriceSnapshot>) -> Result<StockQuote> {
    StockQuote::from_snapshot(symbol, snapshot?)
}

fn unique(symbols: &[Symbol]) -> impl Iterator<Item = &Symbol> {
    let mut seen = HashSet::new();
    symbols.iter().filter(move |s| seen.insert(s.as_str()))
}
