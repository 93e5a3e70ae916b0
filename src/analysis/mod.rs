//! One-shot analysis of a daily price table.

pub mod engine;
pub mod error;

pub use engine::*;
pub use error::AnalysisError;
