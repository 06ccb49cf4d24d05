//! Completion time estimation.

use chrono::{DateTime, Duration, Utc};
use trackman_core::{Result, Track, User};

/// Completion time estimator.
pub struct CompletionEstimator {
    /// Minutes of study per day
    pub daily_minutes: u32,
}

impl CompletionEstimator {
    /// Create an estimator for a given daily study budget.
    pub fn new(daily_minutes: u32) -> Self {
        Self { daily_minutes }
    }

    /// Minutes of catalog content `user` has not studied yet.
    pub fn remaining_minutes(&self, track: &Track, user: &User) -> Result<u64> {
        // Same guards as progress
        track.progress_detail(user)?;

        Ok(track
            .contents()
            .iter()
            .filter(|c| !user.has_studied(c))
            .map(|c| u64::from(c.duration()))
            .sum())
    }

    /// Estimate when `user` finishes the track, starting from `from`.
    ///
    /// Returns `None` when the daily budget is zero and work remains, or when
    /// the finish date falls outside the representable date range.
    pub fn estimate_from(
        &self,
        track: &Track,
        user: &User,
        from: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>> {
        let remaining = self.remaining_minutes(track, user)?;
        if remaining == 0 {
            return Ok(Some(from));
        }
        if self.daily_minutes == 0 {
            return Ok(None);
        }

        let days = remaining.div_ceil(u64::from(self.daily_minutes));
        Ok(i64::try_from(days)
            .ok()
            .and_then(Duration::try_days)
            .and_then(|d| from.checked_add_signed(d)))
    }

    /// Estimate when `user` finishes the track, starting now.
    pub fn estimate(&self, track: &Track, user: &User) -> Result<Option<DateTime<Utc>>> {
        self.estimate_from(track, user, Utc::now())
    }
}

impl Default for CompletionEstimator {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use trackman_core::{ContentItem, Level, TrackError};

    fn setup() -> (Track, User, ContentItem) {
        let intro = ContentItem::new("Intro", Level::Basic, 60);
        let mut track = Track::new("Kotlin");
        track.add_content([
            intro.clone(),
            ContentItem::new("Functions", Level::Basic, 120),
            ContentItem::new("Exceptions", Level::Intermediate, 120),
        ]);
        let user = User::new("Hebert");
        track.enroll([&user]);
        (track, user, intro)
    }

    #[test]
    fn test_remaining_minutes() {
        let (track, mut user, intro) = setup();
        let estimator = CompletionEstimator::default();
        assert_eq!(estimator.remaining_minutes(&track, &user).unwrap(), 300);

        user.mark_studied(intro);
        assert_eq!(estimator.remaining_minutes(&track, &user).unwrap(), 240);
    }

    #[test]
    fn test_estimate_rounds_up_days() {
        let (track, user, _) = setup();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();

        let estimate = CompletionEstimator::new(90)
            .estimate_from(&track, &user, start)
            .unwrap();
        assert_eq!(estimate, Some(start + Duration::days(4)));
    }

    #[test]
    fn test_estimate_when_finished_or_no_budget() {
        let (track, mut user, _) = setup();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let idle = CompletionEstimator::new(0);
        assert_eq!(idle.estimate_from(&track, &user, start).unwrap(), None);

        for item in track.contents() {
            user.mark_studied(item.clone());
        }
        assert_eq!(idle.estimate_from(&track, &user, start).unwrap(), Some(start));
    }

    #[test]
    fn test_estimate_out_of_range() {
        let mut track = Track::new("endless");
        track.add_content([ContentItem::new("huge", Level::Basic, u32::MAX)]);
        let user = User::new("Hebert");
        track.enroll([&user]);

        let estimator = CompletionEstimator::new(1);
        assert_eq!(estimator.estimate(&track, &user).unwrap(), None);
        assert_eq!(
            estimator.remaining_minutes(&track, &user).unwrap(),
            u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_estimate_on_empty_catalog() {
        let mut track = Track::new("f2");
        let user = User::new("Joao");
        track.enroll([&user]);

        let estimator = CompletionEstimator::default();
        assert!(matches!(
            estimator.remaining_minutes(&track, &user),
            Err(TrackError::EmptyCatalog { .. })
        ));
        assert!(matches!(
            estimator.estimate_from(&track, &user, Utc::now()),
            Err(TrackError::EmptyCatalog { .. })
        ));
    }

    #[test]
    fn test_estimate_requires_enrollment() {
        let (track, _, _) = setup();
        let stranger = User::new("stranger");
        assert!(matches!(
            CompletionEstimator::default().remaining_minutes(&track, &stranger),
            Err(TrackError::NotEnrolled { .. })
        ));
    }
}
