use super::QuoteCell;
use crate::display::sort_symbols;
use crate::types::Symbol;
use crate::ui::state::BoardState;

pub struct QuoteGrid;

impl QuoteGrid {
    /// Lay out the quoted symbols of `symbols` in rows of
    /// `state.grid_columns`. Symbols without a quote are skipped.
    ///
    /// Returns the symbol whose cell was clicked this frame.
    pub fn show(
        ui: &mut egui::Ui,
        id: &str,
        symbols: &[Symbol],
        state: &BoardState,
    ) -> Option<Symbol> {
        let ordered = sort_symbols(symbols, &state.quotes, state.sort_mode);
        let columns = state.grid_columns.max(1);
        let mut clicked = None;

        egui::Grid::new(id)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                let quoted = ordered.iter().filter_map(|s| state.quote(s));
                for (idx, quote) in quoted.enumerate() {
                    if QuoteCell::show(ui, quote, state.color_threshold).clicked() {
                        clicked = Some(quote.symbol.clone());
                    }
                    if (idx + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });

        clicked
    }
}
