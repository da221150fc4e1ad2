pub mod lists;
pub mod store;

pub use lists::{ListKind, Watchlists};
pub use store::{load_symbols, parse_symbols, save_symbols};
