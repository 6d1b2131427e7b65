#![forbid(unsafe_code)]

pub mod clock;
pub mod domain;
pub mod error;
pub mod fixture;
pub mod output;

pub mod split;

pub mod count;

// Re-exports: stable API surface
pub use count::{CountOptions, CountOutcome, EmptyTokens, Report, Tally, WordCounts, count_words};
pub use domain::{ChunkFile, ChunkSpec, SourceFile, SplitOutcome};
pub use error::{Result, WfcError};
pub use fixture::generate_test_data;
pub use output::OverwritePolicy;
pub use split::{ChunkPlan, SplitOptions, plan_chunks, split};
