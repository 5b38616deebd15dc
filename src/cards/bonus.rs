//! Bonus-time bookkeeping for a single card.
//!
//! A card earns a bonus if it is matched before it has spent `limit` time
//! face up. Face-up time accumulates across intervals: each time the card is
//! revealed an interval opens, and hiding or matching the card folds the
//! elapsed interval into `past`.
//!
//! ```text
//!            open(t0)              close(t1)
//!   closed ───────────▶ open ─────────────▶ closed
//!                        │                  past += t1 - t0
//!                        └─ face_up_time(now) = past + (now - t0)
//! ```
//!
//! Reads never mutate: `remaining(now)` can be polled every frame.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::clock::Timestamp;

/// Accumulated face-up time against a fixed bonus limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BonusTimer {
    limit: Duration,
    past: Duration,
    opened_at: Option<Timestamp>,
}

impl BonusTimer {
    /// Create a closed timer with nothing consumed.
    #[must_use]
    pub const fn new(limit: Duration) -> Self {
        Self {
            limit,
            past: Duration::ZERO,
            opened_at: None,
        }
    }

    /// The fixed bonus limit.
    #[must_use]
    pub const fn limit(&self) -> Duration {
        self.limit
    }

    /// Face-up time from closed intervals only.
    #[must_use]
    pub const fn past_face_up_time(&self) -> Duration {
        self.past
    }

    /// Start of the open interval, if any.
    #[must_use]
    pub const fn opened_at(&self) -> Option<Timestamp> {
        self.opened_at
    }

    /// Is an interval currently open?
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.opened_at.is_some()
    }

    /// Total face-up time as of `now`, including the open interval.
    #[must_use]
    pub fn face_up_time(&self, now: Timestamp) -> Duration {
        match self.opened_at {
            Some(start) => self.past + now.since(start),
            None => self.past,
        }
    }

    /// Bonus time left as of `now`, never negative.
    #[must_use]
    pub fn remaining(&self, now: Timestamp) -> Duration {
        self.limit.saturating_sub(self.face_up_time(now))
    }

    /// Share of the bonus still available, in `[0, 1]`.
    ///
    /// Zero when the limit is zero or the time is used up.
    #[must_use]
    pub fn remaining_fraction(&self, now: Timestamp) -> f64 {
        let remaining = self.remaining(now);
        if self.limit.is_zero() || remaining.is_zero() {
            return 0.0;
        }
        remaining.as_secs_f64() / self.limit.as_secs_f64()
    }

    /// Open an interval at `now`. No-op if one is already open.
    pub fn open(&mut self, now: Timestamp) {
        if self.opened_at.is_none() {
            self.opened_at = Some(now);
        }
    }

    /// Fold the open interval into past time. No-op if closed.
    pub fn close(&mut self, now: Timestamp) {
        if let Some(start) = self.opened_at.take() {
            self.past += now.since(start);
        }
    }
}

impl Default for BonusTimer {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_BONUS_TIME_LIMIT)
    }
}
