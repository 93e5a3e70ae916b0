/// Mean of the trailing `period` values, or of all values when fewer exist.
pub fn trailing_mean(values: &[f64], period: usize) -> Option<f64> {
    if values.is_empty() || period == 0 {
        return None;
    }
    let window = &values[values.len().saturating_sub(period)..];
    Some(window.iter().sum::<f64>() / window.len() as f64)
}

/// Exponential smoothing with factor `alpha`, seeded by the first value.
///
/// avg[0] = x[0]; avg[i] = alpha * x[i] + (1 - alpha) * avg[i - 1]
pub fn exponential_smooth(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let next = match prev {
            Some(avg) => alpha * value + (1.0 - alpha) * avg,
            None => value,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Wilder smoothing: exponential smoothing with alpha = 1 / period.
pub fn wilder_smooth(values: &[f64], period: usize) -> Vec<f64> {
    exponential_smooth(values, 1.0 / period.max(1) as f64)
}

/// Largest of the three candle ranges. Without a previous close the plain
/// high-low range is used.
pub fn true_range(high: f64, low: f64, prev_close: Option<f64>) -> f64 {
    let range = high - low;
    match prev_close {
        Some(prev) => range.max((high - prev).abs()).max((low - prev).abs()),
        None => range,
    }
}
