use super::state::RankingState;
use super::widgets::RankingTable;
use crate::display::chart_url;

/// One-shot table of symbols ranked by their last daily change.
pub struct RankingApp {
    state: RankingState,
}

impl RankingApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: RankingState) -> Self {
        Self { state }
    }
}

impl eframe::App for RankingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(format!(
                "{} symbols, fetched {}",
                self.state.quotes.len(),
                self.state.fetched_at.format("%Y-%m-%d %H:%M:%S")
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.quotes.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("No quotes available.");
                });
                return;
            }

            if let Some(symbol) = RankingTable::show(ui, &self.state) {
                let url = chart_url(&self.state.chart_base_url, &symbol);
                log::info!("Opening chart {}", url);
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
        });
    }
}
