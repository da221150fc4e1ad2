use thiserror::Error;

#[derive(Error, Debug)]
pub enum TickerboardError {
    #[error("Provider error for {symbol}: {message}")]
    Provider { symbol: String, message: String },

    #[error("Missing field `{field}` for {symbol}")]
    MissingField { symbol: String, field: String },

    #[error("Invalid previous close for {symbol}: {value}")]
    InvalidPrice { symbol: String, value: f64 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] ::config::ConfigError),
}

impl TickerboardError {
    pub fn provider(symbol: &str, message: impl Into<String>) -> Self {
        Self::Provider {
            symbol: symbol.to_string(),
            message: message.into(),
        }
    }

    pub fn missing_field(symbol: &str, field: &str) -> Self {
        Self::MissingField {
            symbol: symbol.to_string(),
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TickerboardError>;
