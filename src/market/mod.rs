//! Market data access.
//!
//! A [`QuoteProvider`] answers price questions for one symbol at a time; the
//! fetch functions in [`fetcher`] run it over a whole symbol list and turn
//! each answer into a [`StockQuote`](crate::types::StockQuote).

pub mod fetcher;
pub mod yahoo;

pub use fetcher::{fetch_quotes, fetch_ranked, rank_by_change};
pub use yahoo::YahooProvider;

use crate::error::Result;
use crate::types::PriceSnapshot;

/// Source of prices for a single symbol.
///
/// Implementations are called from a background thread, so they must be
/// shareable across threads.
pub trait QuoteProvider: Send + Sync {
    /// Previous close and current market price.
    fn latest(&self, symbol: &str) -> Result<PriceSnapshot>;

    /// The last two daily closes, older first. Fails when fewer than two
    /// closes are available.
    fn last_two_closes(&self, symbol: &str) -> Result<PriceSnapshot>;
}
