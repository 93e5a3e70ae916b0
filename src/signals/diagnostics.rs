//! Four-axis diagnostic scores

use crate::models::signal::{ConditionSet, DiagnosticScores};

pub const AXIS_MAX: f64 = 25.0;

const POSITION_FLOOR: f64 = 8.0;
const SENTIMENT_FLOOR: f64 = 10.0;
const MOMENTUM_FLOOR: f64 = 12.0;
const VOLATILITY_SCALE: f64 = 150.0;

/// Each satisfied condition maxes its axis; volatility scales with ATR as a
/// fraction of price.
pub fn diagnostic_scores(conditions: &ConditionSet, atr: f64, last_price: f64) -> DiagnosticScores {
    let axis = |hit: bool, floor: f64| if hit { AXIS_MAX } else { floor };

    let volatility = if last_price > 0.0 && atr.is_finite() {
        (atr / last_price * VOLATILITY_SCALE).clamp(0.0, AXIS_MAX)
    } else {
        0.0
    };

    DiagnosticScores {
        position: axis(conditions.below_value_percentile, POSITION_FLOOR),
        sentiment: axis(conditions.oversold, SENTIMENT_FLOOR),
        momentum: axis(conditions.turning_up, MOMENTUM_FLOOR),
        volatility,
    }
}
