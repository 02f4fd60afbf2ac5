/*! Corpus processing

Cleaning of incomplete records ([clean]) and computation of corpus statistics ([metrics]).
!*/
pub mod chunks;
pub mod clean;
pub mod metrics;

pub use clean::filter_complete;
pub use metrics::{compute_metrics, Metrics};
