//! Render-ready card snapshots.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::id::CardId;

/// One card as a renderer sees it at a single instant.
///
/// All derived values are evaluated against the same clock reading, so a
/// frame never mixes times. Views are plain data and detached from the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView<C> {
    pub id: CardId,
    pub content: C,
    pub is_face_up: bool,
    pub is_matched: bool,
    pub bonus_time_remaining: Duration,
    /// Share of the bonus window left, in `[0, 1]`.
    pub bonus_remaining_fraction: f64,
    pub has_earned_bonus: bool,
    pub is_consuming_bonus_time: bool,
}
