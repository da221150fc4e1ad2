use crate::ui::state::RankingState;
use egui::RichText;

pub struct RankingTable;

impl RankingTable {
    /// Returns the symbol whose row was right-clicked this frame.
    pub fn show(ui: &mut egui::Ui, state: &RankingState) -> Option<String> {
        let mut right_clicked = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("ranking_table")
                .striped(true)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    // Header
                    ui.label(RichText::new("Symbol").strong());
                    ui.label(RichText::new("Prev Close").strong());
                    ui.label(RichText::new("Last Close").strong());
                    ui.label(RichText::new("Change %").strong());
                    ui.end_row();

                    for quote in &state.quotes {
                        let cells = [
                            quote.symbol.clone(),
                            format!("{:.2}", quote.previous_close),
                            format!("{:.2}", quote.current_price),
                            format!("{:.2}%", quote.change_percent),
                        ];
                        let mut row_clicked = false;
                        for text in cells {
                            let response = ui
                                .add(
                                    egui::Label::new(text)
                                        .selectable(false)
                                        .sense(egui::Sense::click()),
                                )
                                .on_hover_text("Right-click to open the chart");
                            row_clicked |= response.secondary_clicked();
                        }
                        ui.end_row();

                        if row_clicked {
                            right_clicked = Some(quote.symbol.clone());
                        }
                    }
                });
        });

        right_clicked
    }
}
