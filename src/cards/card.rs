//! The card entity and its face-up / matched state machine.
//!
//! ```text
//!                 reveal                    mark_matched
//!   FaceDown ──────────────▶ FaceUp ───────────────────────▶ FaceUp+Matched
//!      ▲                       │
//!      └───────── hide ────────┘
//! ```
//!
//! Every transition takes the current time so the card's `BonusTimer` is
//! updated in the same step as the flag. Setting a flag to the value it
//! already holds is a no-op and touches no time bookkeeping.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::bonus::BonusTimer;
use super::view::CardView;
use crate::core::clock::Timestamp;
use crate::core::config::DEFAULT_BONUS_TIME_LIMIT;
use crate::core::id::CardId;

/// A card in a matching-pairs game.
///
/// Two cards form a pair iff their contents are equal. `id` and `content`
/// are fixed at creation; only the flags and the bonus timer change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card<C> {
    id: CardId,
    content: C,
    is_face_up: bool,
    is_matched: bool,
    bonus: BonusTimer,
}

impl<C> Card<C> {
    /// Create a face-down card with the default bonus limit.
    #[must_use]
    pub fn new(id: CardId, content: C) -> Self {
        Self::with_bonus_time_limit(id, content, DEFAULT_BONUS_TIME_LIMIT)
    }

    /// Create a face-down card with an explicit bonus limit.
    ///
    /// A zero limit means no bonus is ever available for this card.
    #[must_use]
    pub fn with_bonus_time_limit(id: CardId, content: C, limit: Duration) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
            bonus: BonusTimer::new(limit),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    /// Matched cards are out of play for good.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    #[must_use]
    pub fn bonus_timer(&self) -> &BonusTimer {
        &self.bonus
    }

    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus.limit()
    }

    /// Face-up time from intervals that have already closed.
    #[must_use]
    pub fn past_face_up_time(&self) -> Duration {
        self.bonus.past_face_up_time()
    }

    /// Start of the current face-up interval, if the card is accruing time.
    #[must_use]
    pub fn last_face_up_timestamp(&self) -> Option<Timestamp> {
        self.bonus.opened_at()
    }

    #[must_use]
    pub fn face_up_time(&self, now: Timestamp) -> Duration {
        self.bonus.face_up_time(now)
    }

    #[must_use]
    pub fn bonus_time_remaining(&self, now: Timestamp) -> Duration {
        self.bonus.remaining(now)
    }

    /// Share of the bonus window left, for a countdown indicator.
    #[must_use]
    pub fn bonus_remaining_fraction(&self, now: Timestamp) -> f64 {
        self.bonus.remaining_fraction(now)
    }

    /// Matched with bonus time to spare.
    #[must_use]
    pub fn has_earned_bonus(&self, now: Timestamp) -> bool {
        self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    /// Face up, unmatched, and the bonus window is still open.
    #[must_use]
    pub fn is_consuming_bonus_time(&self, now: Timestamp) -> bool {
        self.is_face_up && !self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    /// Turn the card face up.
    ///
    /// Opens a bonus interval if the card is now consuming bonus time.
    /// Returns `false` if the card was already face up.
    pub fn reveal(&mut self, now: Timestamp) -> bool {
        if self.is_face_up {
            return false;
        }
        self.is_face_up = true;
        if self.is_consuming_bonus_time(now) {
            self.bonus.open(now);
        }
        true
    }

    /// Turn the card face down, folding any open interval.
    ///
    /// Returns `false` if the card was already face down.
    pub fn hide(&mut self, now: Timestamp) -> bool {
        if !self.is_face_up {
            return false;
        }
        self.is_face_up = false;
        self.bonus.close(now);
        true
    }

    /// Mark the card matched, folding any open interval.
    ///
    /// The face-up flag is left alone. Returns `false` if already matched.
    pub fn mark_matched(&mut self, now: Timestamp) -> bool {
        if self.is_matched {
            return false;
        }
        self.bonus.close(now);
        self.is_matched = true;
        true
    }
}

impl<C: Clone> Card<C> {
    /// Snapshot of this card with derived values evaluated at `now`.
    #[must_use]
    pub fn view(&self, now: Timestamp) -> CardView<C> {
        CardView {
            id: self.id,
            content: self.content.clone(),
            is_face_up: self.is_face_up,
            is_matched: self.is_matched,
            bonus_time_remaining: self.bonus_time_remaining(now),
            bonus_remaining_fraction: self.bonus_remaining_fraction(now),
            has_earned_bonus: self.has_earned_bonus(now),
            is_consuming_bonus_time: self.is_consuming_bonus_time(now),
        }
    }
}
