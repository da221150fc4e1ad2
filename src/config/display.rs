use super::traits::ConfigSection;
use crate::error::TickerboardError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Percent change beyond which a symbol is colored up or down (exclusive)
    pub color_threshold: f64,
    pub grid_columns: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_threshold: 0.5,
            grid_columns: 10,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), TickerboardError> {
        if !self.color_threshold.is_finite() || self.color_threshold < 0.0 {
            return Err(TickerboardError::Configuration(
                "Color threshold must be a non-negative number".to_string()
            ));
        }
        if self.grid_columns == 0 {
            return Err(TickerboardError::Configuration(
                "Grid must have at least one column".to_string()
            ));
        }
        Ok(())
    }
}
