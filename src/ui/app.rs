use super::panels::{BoardPanel, ControlPanel};
use super::services::QuoteRefresher;
use super::state::BoardState;
use crate::config::AppConfig;
use crate::data::Watchlists;
use crate::display::BACKGROUND;
use crate::market::QuoteProvider;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Live board: focus list and watchlist, refreshed in the background.
pub struct BoardApp {
    state: BoardState,
    refresher: QuoteRefresher,
    poll_interval: Duration,
    control_panel: ControlPanel,
    board_panel: BoardPanel,
}

impl BoardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        lists: Watchlists,
        provider: Arc<dyn QuoteProvider>,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            state: BoardState::new(lists, config),
            refresher: QuoteRefresher::new(provider, config.refresh.interval()),
            poll_interval: config.refresh.poll_interval(),
            control_panel: ControlPanel::new(),
            board_panel: BoardPanel::new(),
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // At most one finished refresh per frame
        if let Some(quotes) = self.refresher.poll(now) {
            self.state.apply_quotes(quotes);
        }
        self.refresher.tick(now, &self.state.lists.all_symbols());

        egui::TopBottomPanel::top("control_panel").show(ctx, |ui| {
            if self.control_panel.show(ui, &mut self.state) {
                self.refresher.request_now();
            }
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(BACKGROUND))
            .show(ctx, |ui| {
                if let Some(symbol) = self.board_panel.show(ui, &self.state) {
                    self.state.toggle(&symbol);
                }
            });

        ctx.request_repaint_after(self.poll_interval);
    }
}
