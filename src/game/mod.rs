//! The matching-pairs game engine.
//!
//! `MemoryGame` owns a shuffled deck and turns "choose this card" intents
//! into face-up, match and bonus-time updates. It never reports errors:
//! choosing an unknown, face-up or matched card is simply ignored.

pub mod lookup;
mod memory;

pub use memory::MemoryGame;
