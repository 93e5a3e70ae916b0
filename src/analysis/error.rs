use thiserror::Error;

use crate::indicators::IndicatorError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The table was empty or held no usable close once cleaned.
    #[error("insufficient price data: no valid close among {bars} bars")]
    InsufficientData { bars: usize },

    #[error(transparent)]
    Indicator(#[from] IndicatorError),
}
