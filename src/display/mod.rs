pub mod color;
pub mod sort;

pub use color::{classify, ColorClass};
pub use sort::{sort_symbols, SortMode};

/// Provider chart page for `symbol`.
pub fn chart_url(base: &str, symbol: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), symbol)
}

/// Cell label: the ticker without its exchange suffix (`2330.TW` -> `2330`).
pub fn short_label(symbol: &str) -> &str {
    symbol.split('.').next().unwrap_or(symbol)
}

/// Background of the board window
pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x3F, 0x3F, 0x3F);
