use serde::{Deserialize, Serialize};

/// Wilder RSI aligned 1:1 with the input closes. The first entry is always
/// `None` because it has no preceding change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiSeries {
    pub values: Vec<Option<f64>>,
    pub period: usize,
}

impl RsiSeries {
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied().flatten()
    }

    /// Second to last value, or the last one when the series is too short to
    /// tell a direction.
    pub fn previous(&self) -> Option<f64> {
        if self.values.len() > 2 {
            self.values[self.values.len() - 2]
        } else {
            self.last()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileRankIndicator {
    pub value: f64,
    pub window: usize,
    /// Number of observations actually ranked against.
    pub observations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    pub period: usize,
    pub bars_used: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi_last: Option<f64>,
    pub rsi_previous: Option<f64>,
    pub percentile_rank_3y: f64,
    pub atr14: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Rsi,
    PercentileRank,
    Atr,
}

/// An indicator computed over fewer bars than its nominal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradedIndicator {
    pub indicator: IndicatorKind,
    pub window_used: usize,
    pub nominal_window: usize,
}
