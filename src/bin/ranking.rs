use anyhow::Context;
use eframe::NativeOptions;
use tickerboard::config::{AppConfig, ConfigManager, DEFAULT_CONFIG_FILE};
use tickerboard::data::load_symbols;
use tickerboard::market::{fetch_ranked, YahooProvider};
use tickerboard::ui::{RankingApp, RankingState};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ConfigManager::load_or_default(DEFAULT_CONFIG_FILE).get();

    // Everything is fetched before the window opens.
    let state = match rank(&config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{:#}", e);
            return Err(eframe::Error::AppCreation(e.into()));
        }
    };

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 600.0])
            .with_title("Daily Change Ranking"),
        ..Default::default()
    };

    eframe::run_native(
        "Tickerboard Ranking",
        native_options,
        Box::new(move |cc| Ok(Box::new(RankingApp::new(cc, state)))),
    )
}

fn rank(config: &AppConfig) -> anyhow::Result<RankingState> {
    let symbols = load_symbols(&config.watchlist.ranking_file).with_context(|| {
        format!("Failed to read {}", config.watchlist.ranking_file.display())
    })?;
    let provider = YahooProvider::new(&config.provider).context("Failed to build quote provider")?;

    let quotes = fetch_ranked(&provider, &symbols);
    log::info!("Ranked {}/{} symbols", quotes.len(), symbols.len());

    Ok(RankingState::new(quotes, config.provider.chart_url.clone()))
}
