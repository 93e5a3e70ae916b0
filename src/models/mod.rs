//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod bars;
pub mod indicators;
pub mod market;
pub mod signal;
pub mod zones;

pub use analysis::{AnalysisReport, AnalysisResult};
pub use bars::{PriceBar, PriceSeries};
pub use indicators::{
    AtrIndicator, DegradedIndicator, IndicatorKind, IndicatorSnapshot, PercentileRankIndicator,
    RsiSeries,
};
pub use market::{format_ratio, Market, MarketMetadata, UNAVAILABLE};
pub use signal::{ConditionSet, DiagnosticScores, Signal, SignalResult};
pub use zones::{AddOnLevels, PriceBand, PriceZones};
