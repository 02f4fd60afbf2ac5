//! Pipelines.
//!
//! - [Build] loads sentence pair files, cleans the merged corpus and writes it, along with optional metrics.
//! - [Stats] computes metrics on an already built corpus.
//!
//! Both implement the light [pipeline::Pipeline] trait.
mod build;
pub mod pipeline;
mod stats;

pub use build::{Build, BuildReport};
pub use pipeline::Pipeline;
pub use stats::Stats;
