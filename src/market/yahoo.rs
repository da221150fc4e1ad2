//! Yahoo Finance chart API provider.
//!
//! Both lookups hit the v8 chart endpoint: the latest price comes from the
//! response `meta`, the daily closes from `indicators.quote[0].close`.

use super::QuoteProvider;
use crate::config::ProviderConfig;
use crate::error::{Result, TickerboardError};
use crate::types::PriceSnapshot;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::time::Duration;

pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            TickerboardError::Configuration(format!("Invalid user agent: {}", e))
        })?;
        headers.insert(USER_AGENT, agent);

        // The blocking client defaults to a 30s timeout; requests here wait
        // as long as the provider takes unless a timeout is configured.
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn symbol_url(&self, symbol: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(symbol))
    }

    fn fetch_chart(&self, symbol: &str, range: &str) -> Result<Value> {
        let url = self.symbol_url(symbol);
        log::debug!("Fetching Yahoo chart for {} from {} (range {})", symbol, url, range);

        let response = self
            .client
            .get(&url)
            .query(&[("interval", "1d"), ("range", range)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::error!("Yahoo API error for {}: {} - {}", symbol, status, body);
            return Err(TickerboardError::provider(symbol, format!("HTTP {}", status)));
        }

        parse_body(&response.text()?)
    }
}

impl QuoteProvider for YahooProvider {
    fn latest(&self, symbol: &str) -> Result<PriceSnapshot> {
        let data = self.fetch_chart(symbol, "1d")?;
        parse_latest(symbol, &data)
    }

    fn last_two_closes(&self, symbol: &str) -> Result<PriceSnapshot> {
        // Five days spans a weekend plus a holiday.
        let data = self.fetch_chart(symbol, "5d")?;
        parse_last_two_closes(symbol, &data)
    }
}

/// Decode a response body; an HTML error page from Yahoo fails here.
pub fn parse_body(body: &str) -> Result<Value> {
    Ok(serde_json::from_str(body)?)
}

/// First chart result, or the error Yahoo embedded in the body.
fn chart_result<'a>(symbol: &str, data: &'a Value) -> Result<&'a Value> {
    let chart = data
        .get("chart")
        .ok_or_else(|| TickerboardError::missing_field(symbol, "chart"))?;

    if let Some(error) = chart.get("error").and_then(|e| e.as_object()) {
        let code = error.get("code").and_then(|c| c.as_str()).unwrap_or("unknown");
        let desc = error
            .get("description")
            .and_then(|d| d.as_str())
            .unwrap_or("No description");
        return Err(TickerboardError::provider(symbol, format!("{} - {}", code, desc)));
    }

    chart
        .get("result")
        .and_then(|r| r.get(0))
        .ok_or_else(|| TickerboardError::missing_field(symbol, "chart.result"))
}

/// Previous close and regular market price from the chart `meta` block.
pub fn parse_latest(symbol: &str, data: &Value) -> Result<PriceSnapshot> {
    let meta = chart_result(symbol, data)?
        .get("meta")
        .ok_or_else(|| TickerboardError::missing_field(symbol, "meta"))?;

    let current_price = meta
        .get("regularMarketPrice")
        .and_then(|p| p.as_f64())
        .ok_or_else(|| TickerboardError::missing_field(symbol, "regularMarketPrice"))?;

    let previous_close = meta
        .get("chartPreviousClose")
        .and_then(|p| p.as_f64())
        .or_else(|| meta.get("previousClose").and_then(|p| p.as_f64()))
        .ok_or_else(|| TickerboardError::missing_field(symbol, "previousClose"))?;

    Ok(PriceSnapshot {
        previous_close,
        current_price,
    })
}

/// The last two non-null daily closes.
pub fn parse_last_two_closes(symbol: &str, data: &Value) -> Result<PriceSnapshot> {
    let closes: Vec<f64> = chart_result(symbol, data)?
        .get("indicators")
        .and_then(|i| i.get("quote"))
        .and_then(|q| q.get(0))
        .and_then(|q| q.get("close"))
        .and_then(|c| c.as_array())
        .ok_or_else(|| TickerboardError::missing_field(symbol, "indicators.quote.close"))?
        .iter()
        .filter_map(|v| v.as_f64())
        .collect();

    match closes.as_slice() {
        [.., previous_close, last_close] => Ok(PriceSnapshot {
            previous_close: *previous_close,
            current_price: *last_close,
        }),
        _ => Err(TickerboardError::provider(
            symbol,
            format!("need two closes, got {}", closes.len()),
        )),
    }
}
