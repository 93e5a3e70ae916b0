//! Unit tests for diagnostic scores

use crate::fixtures::assert_close;
use zonewise::models::ConditionSet;
use zonewise::signals::{diagnostic_scores, AXIS_MAX};

#[test]
fn test_satisfied_conditions_max_their_axis() {
    let scores = diagnostic_scores(&ConditionSet::new(true, true, true), 1.0, 100.0);
    assert_close(scores.position, AXIS_MAX);
    assert_close(scores.sentiment, AXIS_MAX);
    assert_close(scores.momentum, AXIS_MAX);
}

#[test]
fn test_unsatisfied_conditions_use_floors() {
    let scores = diagnostic_scores(&ConditionSet::new(false, false, false), 1.0, 100.0);
    assert_close(scores.position, 8.0);
    assert_close(scores.sentiment, 10.0);
    assert_close(scores.momentum, 12.0);
}

#[test]
fn test_volatility_axis_scales_and_caps() {
    let calm = diagnostic_scores(&ConditionSet::new(false, false, false), 1.0, 100.0);
    assert_close(calm.volatility, 1.5);

    let wild = diagnostic_scores(&ConditionSet::new(false, false, false), 50.0, 100.0);
    assert_close(wild.volatility, AXIS_MAX);
}
