use crate::types::{QuoteMap, Symbol};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Insertion order of the list
    #[default]
    Default,
    /// Largest change percent first
    Percent,
}

/// Order `symbols` for display. In percent mode a symbol without a quote
/// counts as 0%, and ties keep their list order.
pub fn sort_symbols(symbols: &[Symbol], quotes: &QuoteMap, mode: SortMode) -> Vec<Symbol> {
    let mut sorted = symbols.to_vec();
    if mode == SortMode::Percent {
        let percent = |s: &Symbol| quotes.get(s).map(|q| q.change_percent).unwrap_or(0.0);
        sorted.sort_by(|a, b| percent(b).partial_cmp(&percent(a)).unwrap_or(Ordering::Equal));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PriceSnapshot, StockQuote};

    fn quotes(entries: &[(&str, f64)]) -> QuoteMap {
        entries
            .iter()
            .map(|(symbol, current)| {
                let quote = StockQuote::from_snapshot(
                    symbol,
                    PriceSnapshot { previous_close: 100.0, current_price: *current },
                )
                .unwrap();
                (symbol.to_string(), quote)
            })
            .collect()
    }

    fn symbols(names: &[&str]) -> Vec<Symbol> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_keeps_insertion_order() {
        let list = symbols(&["C", "A", "B"]);
        let map = quotes(&[("A", 110.0), ("B", 90.0), ("C", 100.0)]);
        assert_eq!(sort_symbols(&list, &map, SortMode::Default), list);
    }

    #[test]
    fn test_percent_descending_with_missing_in_middle() {
        let list = symbols(&["DOWN", "MISSING", "UP", "FLAT"]);
        let map = quotes(&[("DOWN", 95.0), ("UP", 103.0), ("FLAT", 100.0)]);

        let sorted = sort_symbols(&list, &map, SortMode::Percent);
        assert_eq!(sorted, symbols(&["UP", "MISSING", "FLAT", "DOWN"]));
    }
}
