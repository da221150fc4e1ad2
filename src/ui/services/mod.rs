pub mod quote_refresher;

pub use quote_refresher::{QuoteRefresher, RefreshState};
