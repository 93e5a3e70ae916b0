//! Snapshot file provider tests

use std::fs;
use zonewise::analysis::Analyzer;
use zonewise::models::Signal;
use zonewise::services::{run_analysis, ProviderError, SnapshotFile};

const SNAPSHOT: &str = r#"{
    "bars": [
        {"date": "2024-03-01", "open": 10.0, "high": 10.6, "low": 9.8, "close": 10.4, "volume": 1200},
        {"date": "2024-03-04", "open": 10.4, "high": 10.5, "low": 9.9, "close": null},
        {"date": "2024-03-05", "open": 10.1, "high": 10.3, "low": 9.7, "close": 9.9, "volume": 900}
    ],
    "metadata": {"shortName": "Example Corp", "priceToSalesTrailing12Months": 3.456}
}"#;

#[test]
fn test_snapshot_parses_and_analyzes() {
    let snapshot = SnapshotFile::from_json(SNAPSHOT).unwrap();
    assert_eq!(snapshot.bars.len(), 3);

    let report = run_analysis("exm", &snapshot, &snapshot, &Analyzer::new()).unwrap();
    assert_eq!(report.symbol, "EXM");
    assert_eq!(report.display_name, "Example Corp");
    assert_eq!(report.result.last_price, 9.9);
    assert_eq!(report.result.price_to_sales_display(), "3.46");
    assert!(report.result.is_degraded());
    assert_eq!(report.result.signal.signal, Signal::Probe);
}

#[test]
fn test_snapshot_loads_from_disk() {
    let path = std::env::temp_dir().join(format!("zonewise-snapshot-{}.json", std::process::id()));
    fs::write(&path, SNAPSHOT).unwrap();
    let snapshot = SnapshotFile::load(&path);
    fs::remove_file(&path).ok();

    assert_eq!(snapshot.unwrap().metadata.short_name.as_deref(), Some("Example Corp"));
}

#[test]
fn test_malformed_snapshot_is_reported() {
    assert!(matches!(
        SnapshotFile::from_json("{\"bars\": 12}"),
        Err(ProviderError::Parse(_))
    ));
    assert!(matches!(
        SnapshotFile::load("/nonexistent/zonewise/snapshot.json"),
        Err(ProviderError::Io(_))
    ));
}

#[test]
fn test_empty_snapshot_is_insufficient_data() {
    let snapshot = SnapshotFile::default();
    let err = run_analysis("AAPL", &snapshot, &snapshot, &Analyzer::new()).unwrap_err();
    assert!(err.is_insufficient_data());
}
