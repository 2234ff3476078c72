//! poprank-common — Shared data model and error type used across all poprank crates.

pub mod error;
pub mod document;
pub mod snapshot;

// Re-export commonly used types
pub use document::{DayRecord, InputConfig, InputDocument, Source};
pub use error::{PoprankError, Result};
pub use snapshot::{
    AggregateOutput, DayMeta, DeltaMap, PercentMap, Person, PositionMap, WeightTable,
};
