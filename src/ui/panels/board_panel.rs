use crate::types::Symbol;
use crate::ui::state::BoardState;
use crate::ui::widgets::QuoteGrid;
use egui::{Color32, RichText};

#[derive(Default)]
pub struct BoardPanel;

impl BoardPanel {
    pub fn new() -> Self {
        Self
    }

    /// Focus section above the watchlist. Returns the clicked symbol, if any.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &BoardState) -> Option<Symbol> {
        let mut clicked = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            Self::section_header(ui, "★ Focus");
            if let Some(symbol) = QuoteGrid::show(ui, "focus_grid", state.lists.focus_list(), state) {
                clicked = Some(symbol);
            }

            ui.add_space(12.0);

            Self::section_header(ui, "Watchlist");
            if let Some(symbol) = QuoteGrid::show(ui, "watch_grid", state.lists.watchlist(), state) {
                clicked = Some(symbol);
            }

            if state.quotes.is_empty() {
                ui.add_space(12.0);
                ui.label(RichText::new("No quotes yet.").color(Color32::LIGHT_GRAY));
            }
        });

        clicked
    }

    fn section_header(ui: &mut egui::Ui, title: &str) {
        ui.label(
            RichText::new(title)
                .strong()
                .size(16.0)
                .color(Color32::from_rgb(0xF0, 0xF0, 0xF0))
                .background_color(Color32::BLACK),
        );
        ui.add_space(4.0);
    }
}
