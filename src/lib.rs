//! Accumulation signal and staged entry-zone engine for a single equity ticker.

pub mod analysis;
pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
pub mod symbols;
pub mod zones;

pub use analysis::{analyze, AnalysisError, Analyzer};
pub use models::{AnalysisResult, MarketMetadata, PriceBar};
