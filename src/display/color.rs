/// Direction of a move relative to the color threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    Up,
    Down,
    Neutral,
}

/// Classify a change percent; the threshold itself is neutral.
pub fn classify(change_percent: f64, threshold: f64) -> ColorClass {
    if change_percent > threshold {
        ColorClass::Up
    } else if change_percent < -threshold {
        ColorClass::Down
    } else {
        ColorClass::Neutral
    }
}

impl ColorClass {
    pub fn color(self) -> egui::Color32 {
        match self {
            ColorClass::Up => egui::Color32::from_rgb(0x33, 0xFF, 0x77),
            ColorClass::Down => egui::Color32::from_rgb(0xFF, 0x19, 0x19),
            ColorClass::Neutral => egui::Color32::from_rgb(0xF0, 0xF0, 0xF0),
        }
    }
}
