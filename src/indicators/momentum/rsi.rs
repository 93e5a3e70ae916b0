//! RSI (Relative Strength Index) indicator, Wilder smoothing

use crate::common::math;
use crate::config::RSI_PERIOD;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::RsiSeries;

/// Calculate the Wilder RSI series for `closes`.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = smoothed gain / smoothed loss
///
/// Gains and losses are smoothed recursively from the first change with
/// alpha = 1 / period, without a simple-average warm-up. A smoothed loss of
/// exactly zero yields RSI 100.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Result<RsiSeries, IndicatorError> {
    if closes.is_empty() {
        return Err(IndicatorError::EmptyInput { indicator: "RSI" });
    }
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { indicator: "RSI" });
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    let avg_gains = math::wilder_smooth(&gains, period);
    let avg_losses = math::wilder_smooth(&losses, period);

    let mut values = Vec::with_capacity(closes.len());
    values.push(None);
    values.extend(
        avg_gains
            .iter()
            .zip(&avg_losses)
            .map(|(&gain, &loss)| Some(rsi_from_averages(gain, loss))),
    );

    Ok(RsiSeries { values, period })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Result<RsiSeries, IndicatorError> {
    calculate_rsi(closes, RSI_PERIOD)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
