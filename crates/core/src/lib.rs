//! Trackman core data models.
//!
//! Content items, users, and the tracks they enroll into, along with the
//! derived metrics a track computes on demand.

#![warn(missing_docs)]

// Core identities
mod id;

// Catalog and learners
mod content;
mod user;

// Tracks and their derived metrics
mod track;
mod error;

// Re-exports
pub use id::UserId;
pub use content::{ContentItem, Level, ParseLevelError};
pub use user::User;
pub use track::{Track, TrackProgress, TrackSummary};
pub use error::{Result, TrackError};
