mod app;
mod panels;
mod ranking_app;
mod state;
mod widgets;
pub mod services;

pub use app::BoardApp;
pub use ranking_app::RankingApp;
pub use state::{BoardState, RankingState};
