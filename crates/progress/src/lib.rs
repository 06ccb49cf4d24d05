//! Progress Tracking
//!
//! Per-user progress reports and completion estimates for a track.

#![warn(missing_docs)]

pub mod tracker;
pub mod estimator;

pub use tracker::{ProgressTracker, ProgressSnapshot, UserProgress, BasicProgressTracker};
pub use estimator::CompletionEstimator;
