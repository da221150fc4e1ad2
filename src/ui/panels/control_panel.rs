use crate::display::SortMode;
use crate::ui::state::BoardState;

#[derive(Default)]
pub struct ControlPanel;

impl ControlPanel {
    pub fn new() -> Self {
        Self
    }

    /// Symbol input and sort buttons. Returns true when a symbol was added.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut BoardState) -> bool {
        let mut added = false;

        ui.horizontal(|ui| {
            let input = ui.add(
                egui::TextEdit::singleline(&mut state.new_symbol)
                    .hint_text("e.g. 2330.TW")
                    .desired_width(120.0),
            );
            let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button("Add Symbol").clicked() || submitted {
                added = state.add_symbol();
            }

            ui.separator();

            if ui
                .selectable_label(state.sort_mode == SortMode::Default, "Default Order")
                .clicked()
            {
                state.sort_mode = SortMode::Default;
            }
            if ui
                .selectable_label(state.sort_mode == SortMode::Percent, "Sort by Change")
                .clicked()
            {
                state.sort_mode = SortMode::Percent;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(updated) = state.last_updated {
                    ui.label(format!("Updated {}", updated.format("%H:%M:%S")));
                }
                ui.label(&state.status_message);
            });
        });

        added
    }
}
