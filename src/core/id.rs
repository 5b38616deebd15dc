//! Card identification.
//!
//! Every card in a game has a unique `CardId`, assigned at construction and
//! never changed afterwards.
//!
//! ## ID Layout
//!
//! Ids are derived from the pair a card belongs to:
//! - `2 * pair_index`: first card of the pair
//! - `2 * pair_index + 1`: second card of the pair
//!
//! Only uniqueness within one game matters to the engine; the layout just
//! makes ids predictable for tests and debugging.
//!
//! ```
//! use memorize::core::CardId;
//!
//! let first = CardId::for_pair(3, 0);
//! let second = CardId::for_pair(3, 1);
//!
//! assert_eq!(first, CardId(6));
//! assert_eq!(second, CardId(7));
//! assert_eq!(first.pair_index(), second.pair_index());
//! ```

use serde::{Deserialize, Serialize};

/// Largest pair count whose ids fit in a `CardId`.
pub const MAX_PAIRS: usize = (u32::MAX / 2) as usize;

/// Unique identifier for a card within a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Id of the card in `slot` (0 or 1) of pair `pair_index`.
    ///
    /// Panics if `slot > 1` or the pair index is beyond `MAX_PAIRS`.
    #[must_use]
    pub fn for_pair(pair_index: usize, slot: u8) -> Self {
        assert!(slot <= 1, "A pair has exactly two slots");
        assert!(pair_index < MAX_PAIRS, "Pair index exceeds id space");
        Self(pair_index as u32 * 2 + u32::from(slot))
    }

    /// Index of the pair this card was created for.
    #[must_use]
    pub const fn pair_index(self) -> usize {
        (self.0 / 2) as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
