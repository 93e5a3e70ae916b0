//! Data-provider seams and the end-to-end analysis pipeline.

pub mod error;
pub mod market_data;
pub mod pipeline;
pub mod snapshot;

pub use error::ProviderError;
pub use market_data::*;
pub use pipeline::*;
pub use snapshot::SnapshotFile;
