//! Themed games: a `MemoryGame` dealt from a `Theme`'s contents.
//!
//! `ThemedGame` is what a front end holds on to. It deals from its theme,
//! forwards card choices, and replaces the whole game on `reset`.

mod game;

pub use game::ThemedGame;
