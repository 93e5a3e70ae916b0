//! Unit tests for the analysis orchestrator

use crate::fixtures::{assert_close, bar, bars_from_closes, day, linear_closes};
use zonewise::analysis::{analyze, AnalysisError, Analyzer};
use zonewise::config::AnalysisConfig;
use zonewise::models::{IndicatorKind, MarketMetadata, PriceBar, Signal, UNAVAILABLE};

fn downtrend(count: usize) -> Vec<f64> {
    linear_closes(200.0, 200.0 - 0.1 * (count - 1) as f64, count)
}

#[test]
fn test_empty_table_is_insufficient_data() {
    let result = analyze(&[], &MarketMetadata::default());
    assert!(matches!(result, Err(AnalysisError::InsufficientData { bars: 0 })));
}

#[test]
fn test_table_without_valid_closes_is_insufficient_data() {
    let bars = vec![
        PriceBar::new(day(0), 1.0, 2.0, 0.5, f64::NAN),
        PriceBar::new(day(1), 1.0, 2.0, 0.5, f64::NAN),
    ];
    let result = analyze(&bars, &MarketMetadata::default());
    assert!(matches!(result, Err(AnalysisError::InsufficientData { bars: 2 })));
}

#[test]
fn test_single_bar_still_produces_result() {
    let bars = vec![PriceBar::new(day(0), 50.0, 52.0, 49.0, 51.0)];
    let result = analyze(&bars, &MarketMetadata::default()).unwrap();

    assert_close(result.last_price, 51.0);
    assert_eq!(result.indicators.rsi_previous, result.indicators.rsi_last);
    assert_close(result.indicators.atr14, 3.0);
    assert_close(result.indicators.percentile_rank_3y, 1.0);
    assert_eq!(result.signal.signal, Signal::Watch);
    assert_eq!(result.degraded.len(), 3);
    assert!(result.is_degraded());
}

#[test]
fn test_full_history_is_not_degraded() {
    let bars = bars_from_closes(&linear_closes(100.0, 200.0, 800), 0.2);
    let result = analyze(&bars, &MarketMetadata::default()).unwrap();
    assert!(!result.is_degraded());
}

#[test]
fn test_short_history_reports_shortened_windows() {
    let bars = bars_from_closes(&linear_closes(100.0, 110.0, 100), 0.2);
    let result = analyze(&bars, &MarketMetadata::default()).unwrap();
    assert_eq!(result.degraded.len(), 1);
    let degraded = result.degraded[0];
    assert_eq!(degraded.indicator, IndicatorKind::PercentileRank);
    assert_eq!(degraded.window_used, 100);
    assert_eq!(degraded.nominal_window, 756);
}

#[test]
fn test_steady_uptrend_never_signals_accumulation() {
    let bars = bars_from_closes(&linear_closes(100.0, 200.0, 756), 0.2);
    let result = analyze(&bars, &MarketMetadata::default()).unwrap();

    assert_close(result.indicators.percentile_rank_3y, 1.0);
    assert!(!result.conditions.below_value_percentile);
    assert!(matches!(result.signal.signal, Signal::Watch | Signal::Probe));
}

#[test]
fn test_persistent_decline_builds() {
    let bars = bars_from_closes(&downtrend(800), 0.2);
    let result = analyze(&bars, &MarketMetadata::default()).unwrap();

    assert!(result.conditions.below_value_percentile);
    assert!(result.conditions.oversold);
    assert!(!result.conditions.turning_up);
    assert_eq!(result.signal.signal, Signal::Build);
}

#[test]
fn test_decline_with_uptick_adds() {
    let mut closes = downtrend(799);
    let last = *closes.last().unwrap();
    closes.push(last + 0.05);

    let result = analyze(&bars_from_closes(&closes, 0.2), &MarketMetadata::default()).unwrap();
    assert!(result.conditions.turning_up);
    assert!(result.indicators.rsi_last.unwrap() < 35.0);
    assert_eq!(result.signal.signal, Signal::Add);
    assert_eq!(result.signal.label, "Add");
}

#[test]
fn test_sharp_rebound_from_lows_probes() {
    let mut closes = downtrend(700);
    let mut price = *closes.last().unwrap();
    for _ in 0..10 {
        price += 1.0;
        closes.push(price);
    }

    let result = analyze(&bars_from_closes(&closes, 0.2), &MarketMetadata::default()).unwrap();
    assert!(result.conditions.below_value_percentile);
    assert!(!result.conditions.oversold);
    assert_eq!(result.signal.signal, Signal::Probe);
}

#[test]
fn test_zones_follow_last_price() {
    let bars = bars_from_closes(&linear_closes(100.0, 200.0, 300), 0.2);
    let result = analyze(&bars, &MarketMetadata::default()).unwrap();

    assert_close(result.zones.center, 0.92 * result.last_price);
    assert!(result.zones.width >= 0.08 * result.last_price);
    assert_close(result.adds.first_add, result.zones.neutral.low);
    assert_close(result.adds.pullback_add, result.zones.aggressive.midpoint());
}

#[test]
fn test_missing_closes_are_ignored() {
    let closes = linear_closes(150.0, 120.0, 60);
    let clean = bars_from_closes(&closes, 0.3);
    let mut dirty = clean.clone();
    dirty.insert(30, PriceBar::new(day(1_000), 1.0, 1.0, 1.0, f64::NAN));

    let a = analyze(&clean, &MarketMetadata::default()).unwrap();
    let b = analyze(&dirty, &MarketMetadata::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_metadata_is_passed_through() {
    let bars = vec![bar(0, 10.0, 0.5), bar(1, 11.0, 0.5)];

    let bare = analyze(&bars, &MarketMetadata::default()).unwrap();
    assert!(bare.name.is_none());
    assert_eq!(bare.trailing_pe_display(), UNAVAILABLE);
    assert_eq!(bare.price_to_sales_display(), UNAVAILABLE);

    let meta = MarketMetadata {
        long_name: Some("Example Holdings".to_string()),
        trailing_pe: Some(21.5),
        ..Default::default()
    };
    let rich = analyze(&bars, &meta).unwrap();
    assert_eq!(rich.name.as_deref(), Some("Example Holdings"));
    assert_eq!(rich.trailing_pe_display(), "21.50");
    assert_eq!(rich.price_to_sales_display(), UNAVAILABLE);
}

#[test]
fn test_repeated_calls_are_independent() {
    let analyzer = Analyzer::new();
    let bars = bars_from_closes(&downtrend(300), 0.4);
    let first = analyzer.analyze(&bars, &MarketMetadata::default()).unwrap();
    let _other = analyzer
        .analyze(&bars_from_closes(&[5.0, 6.0], 0.1), &MarketMetadata::default())
        .unwrap();
    let second = analyzer.analyze(&bars, &MarketMetadata::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_config_is_applied() {
    let config = AnalysisConfig {
        value_percentile_threshold: 1.01,
        ..Default::default()
    };
    let bars = bars_from_closes(&linear_closes(100.0, 200.0, 100), 0.2);
    let result = Analyzer::with_config(config).analyze(&bars, &MarketMetadata::default()).unwrap();
    assert!(result.conditions.below_value_percentile);
    assert_eq!(result.signal.signal, Signal::Probe);
}
