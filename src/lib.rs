pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod market;
pub mod types;
pub mod ui;

pub use error::{Result, TickerboardError};
pub use types::{PriceSnapshot, QuoteMap, StockQuote, Symbol};
