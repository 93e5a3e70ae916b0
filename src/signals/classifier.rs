//! Decision table from conditions to a recommendation

use crate::models::signal::{ConditionSet, Signal, SignalResult};

/// Map a condition set to a signal. First match wins:
///
/// | value zone | oversold | turning up | signal |
/// |------------|----------|------------|--------|
/// | yes        | yes      | yes        | Add    |
/// | yes        | yes      | -          | Build  |
/// | either one |          | -          | Probe  |
/// | no         | no       | -          | Watch  |
pub fn classify(conditions: &ConditionSet) -> Signal {
    match (
        conditions.below_value_percentile,
        conditions.oversold,
        conditions.turning_up,
    ) {
        (true, true, true) => Signal::Add,
        (true, true, false) => Signal::Build,
        (true, false, _) | (false, true, _) => Signal::Probe,
        (false, false, _) => Signal::Watch,
    }
}

pub fn classify_signal(conditions: &ConditionSet) -> SignalResult {
    SignalResult::from(classify(conditions))
}
