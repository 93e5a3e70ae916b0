//! Signal evaluation: conditions, decision table and diagnostics.

pub mod classifier;
pub mod conditions;
pub mod diagnostics;

pub use classifier::*;
pub use conditions::*;
pub use diagnostics::*;
