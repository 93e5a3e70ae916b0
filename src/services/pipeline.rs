//! Raw ticker in, report out.

use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::{AnalysisError, Analyzer};
use crate::config::LOOKBACK_DAYS;
use crate::models::analysis::AnalysisReport;
use crate::services::error::ProviderError;
use crate::services::market_data::{MetadataProvider, PriceTableProvider};
use crate::symbols::{classify_market, normalize};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{symbol}: {source}")]
    Provider {
        symbol: String,
        #[source]
        source: ProviderError,
    },

    #[error("{symbol}: {source}")]
    Analysis {
        symbol: String,
        #[source]
        source: AnalysisError,
    },
}

impl PipelineError {
    pub fn symbol(&self) -> &str {
        match self {
            PipelineError::Provider { symbol, .. } | PipelineError::Analysis { symbol, .. } => symbol,
        }
    }

    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            PipelineError::Analysis {
                source: AnalysisError::InsufficientData { .. },
                ..
            }
        )
    }
}

/// Normalize the ticker, fetch about three years of bars and analyze them.
///
/// Metadata is best effort: a failing lookup is logged and the report falls
/// back to the symbol as its display name.
pub fn run_analysis<P, M>(
    raw_ticker: &str,
    prices: &P,
    metadata: &M,
    analyzer: &Analyzer,
) -> Result<AnalysisReport, PipelineError>
where
    P: PriceTableProvider + ?Sized,
    M: MetadataProvider + ?Sized,
{
    let symbol = normalize(raw_ticker);
    let market = classify_market(&symbol);
    info!(raw = raw_ticker, symbol = %symbol, market = market.label(), "Resolved ticker");

    let bars = prices
        .daily_bars(&symbol, LOOKBACK_DAYS)
        .map_err(|source| PipelineError::Provider {
            symbol: symbol.clone(),
            source,
        })?;

    let meta = metadata.metadata(&symbol).unwrap_or_else(|e| {
        warn!(symbol = %symbol, error = %e, "Metadata unavailable");
        Default::default()
    });

    let result = analyzer
        .analyze(&bars, &meta)
        .map_err(|source| PipelineError::Analysis {
            symbol: symbol.clone(),
            source,
        })?;

    Ok(AnalysisReport {
        display_name: meta.display_name(&symbol),
        currency: market.currency_label().to_string(),
        market,
        symbol,
        result,
    })
}
