//! Market data provider interfaces.

use chrono::Duration;
use std::collections::HashMap;

use crate::models::bars::PriceBar;
use crate::models::market::MarketMetadata;
use crate::services::error::ProviderError;

pub trait PriceTableProvider {
    /// Daily bars for `symbol` covering the last `lookback_days` calendar days,
    /// oldest first. An empty table means the provider has no data.
    fn daily_bars(&self, symbol: &str, lookback_days: u32) -> Result<Vec<PriceBar>, ProviderError>;
}

pub trait MetadataProvider {
    /// Company fields for `symbol`. Any field may be missing.
    fn metadata(&self, symbol: &str) -> Result<MarketMetadata, ProviderError>;
}

/// Keep the bars within `lookback_days` of the most recent one.
pub fn within_lookback(bars: &[PriceBar], lookback_days: u32) -> Vec<PriceBar> {
    let Some(latest) = bars.iter().map(|b| b.date).max() else {
        return Vec::new();
    };
    let cutoff = latest - Duration::days(i64::from(lookback_days));
    bars.iter().filter(|b| b.date > cutoff).cloned().collect()
}

/// Map-backed provider for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketData {
    bars: HashMap<String, Vec<PriceBar>>,
    metadata: HashMap<String, MarketMetadata>,
}

impl InMemoryMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<PriceBar>) -> Self {
        self.bars.insert(symbol.to_string(), bars);
        self
    }

    pub fn with_metadata(mut self, symbol: &str, metadata: MarketMetadata) -> Self {
        self.metadata.insert(symbol.to_string(), metadata);
        self
    }
}

impl PriceTableProvider for InMemoryMarketData {
    fn daily_bars(&self, symbol: &str, lookback_days: u32) -> Result<Vec<PriceBar>, ProviderError> {
        Ok(self
            .bars
            .get(symbol)
            .map(|bars| within_lookback(bars, lookback_days))
            .unwrap_or_default())
    }
}

impl MetadataProvider for InMemoryMarketData {
    fn metadata(&self, symbol: &str) -> Result<MarketMetadata, ProviderError> {
        self.metadata
            .get(symbol)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(symbol.to_string()))
    }
}
