//! Progress tracking service.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use trackman_core::{Result, Track, TrackProgress, TrackSummary, User, UserId};

/// Progress tracking service.
pub trait ProgressTracker {
    /// Get one user's progress.
    fn progress_of(&self, user: &User) -> Result<TrackProgress>;

    /// Take a progress snapshot of every enrolled user found in `users`.
    fn snapshot(&self, users: &[User]) -> ProgressSnapshot;
}

/// A snapshot of progress at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// When snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Track name
    pub track: String,

    /// Track metrics, absent when the catalog is empty
    pub summary: Option<TrackSummary>,

    /// Progress by user, in enrollment order
    pub entries: Vec<UserProgress>,

    /// Enrolled ids with no matching user
    pub unknown_users: usize,
}

/// One user's line in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    /// User id
    pub user_id: UserId,

    /// User name
    pub name: String,

    /// Progress through the track
    pub progress: TrackProgress,
}

/// Basic progress tracker implementation.
pub struct BasicProgressTracker<'a> {
    track: &'a Track,
}

impl<'a> BasicProgressTracker<'a> {
    /// Create a new progress tracker.
    pub fn new(track: &'a Track) -> Self {
        Self { track }
    }
}

impl ProgressTracker for BasicProgressTracker<'_> {
    fn progress_of(&self, user: &User) -> Result<TrackProgress> {
        self.track.progress_detail(user)
    }

    fn snapshot(&self, users: &[User]) -> ProgressSnapshot {
        let mut entries = Vec::new();
        let mut unknown_users = 0;
        let mut seen = HashSet::new();

        for id in self.track.enrolled() {
            if !seen.insert(*id) {
                continue;
            }

            let Some(user) = users.iter().find(|u| u.id() == *id) else {
                warn!("Track {}: enrolled user {} not provided", self.track.name(), id);
                unknown_users += 1;
                continue;
            };

            match self.track.progress_detail(user) {
                Ok(progress) => entries.push(UserProgress {
                    user_id: *id,
                    name: user.name().to_string(),
                    progress,
                }),
                Err(e) => debug!("Skipping {}: {}", user.name(), e),
            }
        }

        ProgressSnapshot {
            taken_at: Utc::now(),
            track: self.track.name().to_string(),
            summary: self.track.summary().ok(),
            entries,
            unknown_users,
        }
    }
}
