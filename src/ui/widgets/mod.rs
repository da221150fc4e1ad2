pub mod quote_cell;
pub mod quote_grid;
pub mod ranking_table;

pub use quote_cell::QuoteCell;
pub use quote_grid::QuoteGrid;
pub use ranking_table::RankingTable;
