//! # memorize
//!
//! A matching-pairs card game engine: the model half of a memory game.
//!
//! ## Design Principles
//!
//! 1. **UI-Independent**: The engine deals cards, takes "choose this card"
//!    intents and tracks face-up, matched and bonus-time state. Rendering,
//!    layout and change notification belong to the caller.
//!
//! 2. **No Error Paths in Play**: Choosing an unknown, face-up or matched
//!    card is expected player input and is ignored, not reported.
//!
//! 3. **Injected Time and Randomness**: All clock reads go through a
//!    `Clock` and the one shuffle goes through a `GameRng`, so games are
//!    reproducible in tests.
//!
//! ## Rules
//!
//! - At most one card is face up and unmatched between moves.
//! - Choosing a card whose content equals the face-up card's matches both.
//! - Otherwise the chosen card becomes the only face-up unmatched card.
//! - Each card has a bonus window (6 seconds by default) consumed while it
//!   is face up and unmatched; matching within it earns the bonus.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, clock, configuration, errors
//! - `cards`: Card entity, bonus timer, render views
//! - `game`: The `MemoryGame` engine
//! - `themes`: Theme-driven sessions with reset

pub mod core;
pub mod cards;
pub mod game;
pub mod themes;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameRng,
    Clock, ManualClock, SystemClock, Timestamp,
    GameConfig, MemorizeConfig, Theme, ConfigError,
};

pub use crate::cards::{BonusTimer, Card, CardView};

pub use crate::game::MemoryGame;

pub use crate::themes::ThemedGame;
