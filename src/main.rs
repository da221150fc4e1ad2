use anyhow::Context;
use eframe::NativeOptions;
use std::sync::Arc;
use tickerboard::config::{ConfigManager, DEFAULT_CONFIG_FILE};
use tickerboard::data::Watchlists;
use tickerboard::market::YahooProvider;
use tickerboard::ui::BoardApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ConfigManager::load_or_default(DEFAULT_CONFIG_FILE).get();

    let (lists, provider) = match setup(&config) {
        Ok(parts) => parts,
        Err(e) => {
            log::error!("{:#}", e);
            return Err(eframe::Error::AppCreation(e.into()));
        }
    };

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 500.0])
            .with_title("Tickerboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Tickerboard",
        native_options,
        Box::new(move |cc| Ok(Box::new(BoardApp::new(cc, &config, lists, provider)))),
    )
}

fn setup(
    config: &tickerboard::config::AppConfig,
) -> anyhow::Result<(Watchlists, Arc<YahooProvider>)> {
    let lists = Watchlists::load(&config.watchlist.watchlist_file, &config.watchlist.focus_file)
        .context("Failed to load watchlists")?;
    log::info!(
        "Watching {} symbols, {} in focus",
        lists.watchlist().len(),
        lists.focus_list().len()
    );

    let provider = YahooProvider::new(&config.provider).context("Failed to build quote provider")?;
    Ok((lists, Arc::new(provider)))
}
