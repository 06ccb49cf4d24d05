//! User model - a learner and the content they have studied.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::ContentItem;
use crate::id::UserId;

/// A learner who can enroll in tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    studied: HashSet<ContentItem>,
}

impl User {
    /// Create a user with nothing studied yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            studied: HashSet::new(),
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// User name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record that the user studied `item`.
    ///
    /// Any item is accepted, whether or not a track offers it. Returns
    /// `false` if the item was already recorded.
    pub fn mark_studied(&mut self, item: ContentItem) -> bool {
        debug!("{} studied {}", self.name, item);
        self.studied.insert(item)
    }

    /// Whether the user studied `item`.
    pub fn has_studied(&self, item: &ContentItem) -> bool {
        self.studied.contains(item)
    }

    /// Items studied, in no particular order.
    pub fn studied(&self) -> impl Iterator<Item = &ContentItem> {
        self.studied.iter()
    }

    /// Number of distinct items studied.
    pub fn studied_count(&self) -> usize {
        self.studied.len()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
