use crate::display::{classify, short_label};
use crate::types::StockQuote;
use egui::{Color32, RichText};

pub struct QuoteCell;

impl QuoteCell {
    /// Draw one clickable cell: short ticker, price, and signed percent, all
    /// in the color of the move.
    pub fn show(ui: &mut egui::Ui, quote: &StockQuote, threshold: f64) -> egui::Response {
        let color = classify(quote.change_percent, threshold).color();

        let inner = egui::Frame::new()
            .fill(Color32::BLACK)
            .stroke(egui::Stroke::new(1.0, Color32::DARK_GRAY))
            .inner_margin(egui::Margin::symmetric(10, 5))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            RichText::new(short_label(&quote.symbol))
                                .color(color)
                                .strong()
                                .size(16.0),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        egui::Label::new(
                            RichText::new(format!("{:.2}", quote.current_price)).color(color),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        egui::Label::new(
                            RichText::new(format!("{:+.2}%", quote.change_percent))
                                .color(color)
                                .strong(),
                        )
                        .selectable(false),
                    );
                });
            });

        inner
            .response
            .interact(egui::Sense::click())
            .on_hover_text(format!(
                "{}\nprev close {:.2}\nclick to move between lists",
                quote.symbol, quote.previous_close
            ))
    }
}
