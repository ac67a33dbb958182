//! Cache freshness rules.

use chrono::{DateTime, Days, Utc};

/// Decides whether a cached snapshot may still be served.
pub struct MovieCachePolicy;

impl MovieCachePolicy {
    /// Days a snapshot stays fresh after capture.
    pub const MAX_CACHE_AGE_DAYS: u64 = 7;

    /// Returns true when `timestamp` plus the max age is strictly after `now`.
    ///
    /// Date arithmetic overflow counts as stale.
    #[must_use]
    pub fn validate(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        timestamp
            .checked_add_days(Days::new(Self::MAX_CACHE_AGE_DAYS))
            .is_some_and(|expiration| expiration > now)
    }
}
