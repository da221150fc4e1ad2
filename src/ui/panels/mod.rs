pub mod board_panel;
pub mod control_panel;

pub use board_panel::BoardPanel;
pub use control_panel::ControlPanel;
