//! Bottom-feature conditions derived from the indicator snapshot

use crate::config::AnalysisConfig;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::ConditionSet;

/// Evaluate the three conditions against the configured thresholds.
///
/// A missing RSI reading satisfies neither the oversold nor the turning-up
/// condition.
pub fn evaluate_conditions(snapshot: &IndicatorSnapshot, config: &AnalysisConfig) -> ConditionSet {
    let below_value_percentile = snapshot.percentile_rank_3y < config.value_percentile_threshold;
    let oversold = snapshot.rsi_last.is_some_and(|rsi| rsi < config.oversold_rsi);
    let turning_up = match (snapshot.rsi_last, snapshot.rsi_previous) {
        (Some(last), Some(prev)) => last > prev,
        _ => false,
    };

    ConditionSet::new(below_value_percentile, oversold, turning_up)
}
