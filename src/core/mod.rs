//! Core engine types: card ids, RNG, clock, configuration, errors.
//!
//! This module holds the building blocks the card and game modules share.
//! Nothing here knows about face-up or matched state.

pub mod id;
pub mod rng;
pub mod clock;
pub mod config;
pub mod error;

pub use id::{CardId, MAX_PAIRS};
pub use rng::GameRng;
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::{GameConfig, MemorizeConfig, Theme, DEFAULT_BONUS_TIME_LIMIT};
pub use error::ConfigError;
