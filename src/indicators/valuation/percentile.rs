//! Trailing percentile rank of the latest close

use crate::config::PERCENTILE_WINDOW;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::PercentileRankIndicator;

/// Fraction of the trailing `window` closes that are at or below the latest
/// close. Ties count inclusively, so the highest close ranks at 1.0. A shorter
/// series is ranked against everything it has.
pub fn calculate_percentile_rank(
    closes: &[f64],
    window: usize,
) -> Result<PercentileRankIndicator, IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::InvalidPeriod { indicator: "percentile rank" });
    }
    let Some(&last) = closes.last() else {
        return Err(IndicatorError::EmptyInput { indicator: "percentile rank" });
    };

    let trailing = &closes[closes.len().saturating_sub(window)..];
    let at_or_below = trailing.iter().filter(|&&c| c <= last).count();

    Ok(PercentileRankIndicator {
        value: at_or_below as f64 / trailing.len() as f64,
        window,
        observations: trailing.len(),
    })
}

/// Rank over roughly three trading years (756 bars)
pub fn calculate_percentile_rank_3y(closes: &[f64]) -> Result<PercentileRankIndicator, IndicatorError> {
    calculate_percentile_rank(closes, PERCENTILE_WINDOW)
}
