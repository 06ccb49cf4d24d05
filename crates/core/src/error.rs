//! Errors raised by track computations.

/// Result type for track operations.
pub type Result<T> = std::result::Result<T, TrackError>;

/// Errors that can occur when querying a track.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    /// The track offers no content items
    #[error("track '{track}' has no content items")]
    EmptyCatalog {
        /// Track name
        track: String,
    },

    /// The user is not enrolled in the track
    #[error("user '{user}' is not enrolled in track '{track}'")]
    NotEnrolled {
        /// User name
        user: String,
        /// Track name
        track: String,
    },
}
