//! Composes indicators, classifier and zones into one result.

use tracing::{debug, info, warn};

use crate::analysis::error::AnalysisError;
use crate::config::AnalysisConfig;
use crate::indicators::{calculate_atr, calculate_percentile_rank, calculate_rsi};
use crate::models::analysis::AnalysisResult;
use crate::models::bars::{PriceBar, PriceSeries};
use crate::models::indicators::{DegradedIndicator, IndicatorKind, IndicatorSnapshot};
use crate::models::market::MarketMetadata;
use crate::signals::{classify_signal, diagnostic_scores, evaluate_conditions};
use crate::zones::{calculate_add_ons, calculate_zones};

/// Stateless analyzer; holds only the thresholds it applies.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a raw price table. Bars without a usable close are dropped
    /// first; an empty remainder is an error. Short tables degrade the
    /// indicator windows instead of failing.
    pub fn analyze(
        &self,
        bars: &[PriceBar],
        metadata: &MarketMetadata,
    ) -> Result<AnalysisResult, AnalysisError> {
        let series = PriceSeries::from_bars(bars);
        let Some(last_price) = series.last_close() else {
            return Err(AnalysisError::InsufficientData { bars: bars.len() });
        };
        if series.len() < bars.len() {
            debug!(dropped = bars.len() - series.len(), "Dropped bars without a valid close");
        }

        let closes = series.closes();
        let rsi = calculate_rsi(&closes, self.config.rsi_period)?;
        let rank = calculate_percentile_rank(&closes, self.config.percentile_window)?;
        let atr = calculate_atr(series.bars(), self.config.atr_period)?;

        let indicators = IndicatorSnapshot {
            rsi_last: rsi.last(),
            rsi_previous: rsi.previous(),
            percentile_rank_3y: rank.value,
            atr14: atr.value,
        };
        debug!(
            rsi_last = ?indicators.rsi_last,
            rsi_previous = ?indicators.rsi_previous,
            percentile_rank = indicators.percentile_rank_3y,
            atr = indicators.atr14,
            "Indicators computed"
        );

        let degraded = self.degraded_indicators(series.len(), rank.observations, atr.bars_used);
        for d in &degraded {
            warn!(
                indicator = ?d.indicator,
                window_used = d.window_used,
                nominal_window = d.nominal_window,
                "Indicator computed over a shortened window"
            );
        }

        let conditions = evaluate_conditions(&indicators, &self.config);
        let signal = classify_signal(&conditions);
        let zones = calculate_zones(last_price, indicators.atr14, &self.config);
        let adds = calculate_add_ons(&zones);
        let diagnostics = diagnostic_scores(&conditions, indicators.atr14, last_price);

        info!(
            last_price = last_price,
            signal = %signal.label,
            below_value_percentile = conditions.below_value_percentile,
            oversold = conditions.oversold,
            turning_up = conditions.turning_up,
            "Analysis complete"
        );

        Ok(AnalysisResult {
            last_price,
            signal,
            zones,
            adds,
            indicators,
            conditions,
            diagnostics,
            degraded,
            name: metadata.short_name.clone().or_else(|| metadata.long_name.clone()),
            trailing_pe: metadata.trailing_pe.filter(|v| v.is_finite()),
            price_to_sales: metadata.price_to_sales.filter(|v| v.is_finite()),
        })
    }

    fn degraded_indicators(
        &self,
        bars: usize,
        rank_observations: usize,
        atr_bars: usize,
    ) -> Vec<DegradedIndicator> {
        let rsi_nominal = self.config.rsi_period + 1;
        [
            (IndicatorKind::Rsi, bars, rsi_nominal),
            (IndicatorKind::PercentileRank, rank_observations, self.config.percentile_window),
            (IndicatorKind::Atr, atr_bars, self.config.atr_period),
        ]
        .into_iter()
        .filter(|&(_, used, nominal)| used < nominal)
        .map(|(indicator, window_used, nominal_window)| DegradedIndicator {
            indicator,
            window_used,
            nominal_window,
        })
        .collect()
    }
}

/// Analyze with the default thresholds.
pub fn analyze(bars: &[PriceBar], metadata: &MarketMetadata) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::new().analyze(bars, metadata)
}
