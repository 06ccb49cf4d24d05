//! Track model - a catalog of content that users enroll into.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::{ContentItem, Level};
use crate::error::{Result, TrackError};
use crate::id::UserId;
use crate::user::User;

/// A named collection of content items offered to enrolled users.
///
/// The catalog behaves as a set (items are deduplicated by value) but keeps
/// insertion order. Enrollment is an append-only list and does not reject
/// repeated enrollments.
///
/// Enrollment is keyed on [`UserId`], not on the user's name or studied
/// items: a separately built user with the same name is not enrolled, while
/// a clone of an enrolled user is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    name: String,
    contents: Catalog,
    enrolled: Vec<UserId>,
}

/// Insertion-ordered set of content items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ContentItem>", into = "Vec<ContentItem>")]
struct Catalog {
    items: Vec<ContentItem>,
    index: HashSet<ContentItem>,
}

impl Catalog {
    fn insert(&mut self, item: ContentItem) -> bool {
        if !self.index.insert(item.clone()) {
            return false;
        }
        self.items.push(item);
        true
    }
}

impl From<Vec<ContentItem>> for Catalog {
    fn from(items: Vec<ContentItem>) -> Self {
        let mut catalog = Catalog::default();
        for item in items {
            catalog.insert(item);
        }
        catalog
    }
}

impl From<Catalog> for Vec<ContentItem> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}

/// Progress of one user through a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackProgress {
    /// Catalog items the user studied
    pub studied_items: usize,

    /// Items in the catalog
    pub total_items: usize,

    /// Percentage complete (0-100)
    pub percentage: f64,
}

/// Derived metrics of a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    /// Track name
    pub name: String,

    /// Items in the catalog
    pub total_items: usize,

    /// Sum of item durations, in minutes
    pub total_duration: u64,

    /// Most frequent level in the catalog
    pub dominant_level: Level,

    /// Enrollment count, repeats included
    pub enrolled_users: usize,
}

impl Track {
    /// Create an empty track.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: Catalog::default(),
            enrolled: Vec::new(),
        }
    }

    /// Track name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Offered items, in the order they were first added.
    pub fn contents(&self) -> &[ContentItem] {
        &self.contents.items
    }

    /// Enrolled user ids, in enrollment order.
    pub fn enrolled(&self) -> &[UserId] {
        &self.enrolled
    }

    /// Number of enrollments, repeats included.
    pub fn enrollment_count(&self) -> usize {
        self.enrolled.len()
    }

    /// Add items to the catalog, skipping ones already offered.
    ///
    /// Returns how many items were new.
    pub fn add_content<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = ContentItem>,
    {
        let mut added = 0;
        for item in items {
            if self.contents.insert(item) {
                if let Some(offered) = self.contents.items.last() {
                    debug!("Track {}: offering {}", self.name, offered);
                }
                added += 1;
            }
        }
        added
    }

    /// Enroll users in call order.
    pub fn enroll<'a, I>(&mut self, users: I)
    where
        I: IntoIterator<Item = &'a User>,
    {
        for user in users {
            debug!("Track {}: enrolling {} ({})", self.name, user.name(), user.id());
            self.enrolled.push(user.id());
        }
    }

    /// Whether `user` is enrolled.
    pub fn is_enrolled(&self, user: &User) -> bool {
        self.enrolled.contains(&user.id())
    }

    /// Total duration of the catalog, in minutes.
    pub fn total_duration(&self) -> Result<u64> {
        self.ensure_catalog()?;
        Ok(self.contents.items.iter().map(|c| u64::from(c.duration())).sum())
    }

    /// Item count per level, in level declaration order. Levels with no
    /// items are omitted.
    pub fn level_tally(&self) -> Vec<(Level, usize)> {
        Level::ALL
            .iter()
            .map(|&level| {
                let count = self.contents.items.iter().filter(|c| c.level() == level).count();
                (level, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// The level carried by the most catalog items.
    ///
    /// Ties go to the level declared first (`Basic` before `Intermediate`
    /// before `Advanced`).
    pub fn dominant_level(&self) -> Result<Level> {
        self.ensure_catalog()?;

        let mut best: Option<(Level, usize)> = None;
        for (level, count) in self.level_tally() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((level, count)),
            }
        }

        best.map(|(level, _)| level).ok_or_else(|| self.empty_catalog())
    }

    /// Percentage (0-100) of the catalog that `user` has studied.
    pub fn progress_for(&self, user: &User) -> Result<f64> {
        Ok(self.progress_detail(user)?.percentage)
    }

    /// Studied/total counts and percentage for `user`.
    ///
    /// Enrollment is checked before the catalog, so a user outside an empty
    /// track gets `NotEnrolled`.
    pub fn progress_detail(&self, user: &User) -> Result<TrackProgress> {
        if !self.is_enrolled(user) {
            return Err(TrackError::NotEnrolled {
                user: user.name().to_string(),
                track: self.name.clone(),
            });
        }
        self.ensure_catalog()?;

        let total_items = self.contents.items.len();
        let studied_items = self.contents.items.iter().filter(|c| user.has_studied(c)).count();
        let percentage = (studied_items as f64 / total_items as f64) * 100.0;

        Ok(TrackProgress {
            studied_items,
            total_items,
            percentage,
        })
    }

    /// Collect the derived metrics in one value.
    pub fn summary(&self) -> Result<TrackSummary> {
        Ok(TrackSummary {
            name: self.name.clone(),
            total_items: self.contents.items.len(),
            total_duration: self.total_duration()?,
            dominant_level: self.dominant_level()?,
            enrolled_users: self.enrolled.len(),
        })
    }

    fn ensure_catalog(&self) -> Result<()> {
        if self.contents.items.is_empty() {
            return Err(self.empty_catalog());
        }
        Ok(())
    }

    fn empty_catalog(&self) -> TrackError {
        TrackError::EmptyCatalog {
            track: self.name.clone(),
        }
    }
}
