//! JSON snapshot of one ticker's price table and metadata.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::bars::PriceBar;
use crate::models::market::MarketMetadata;
use crate::services::error::ProviderError;
use crate::services::market_data::{within_lookback, MetadataProvider, PriceTableProvider};

/// `{ "bars": [...], "metadata": {...} }`, as exported from the data-fetch
/// client. The snapshot answers for whatever symbol it is asked about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub bars: Vec<PriceBar>,
    #[serde(default)]
    pub metadata: MarketMetadata,
}

impl SnapshotFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl PriceTableProvider for SnapshotFile {
    fn daily_bars(&self, _symbol: &str, lookback_days: u32) -> Result<Vec<PriceBar>, ProviderError> {
        Ok(within_lookback(&self.bars, lookback_days))
    }
}

impl MetadataProvider for SnapshotFile {
    fn metadata(&self, _symbol: &str) -> Result<MarketMetadata, ProviderError> {
        Ok(self.metadata.clone())
    }
}
