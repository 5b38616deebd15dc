//! Card system: the card entity and its bonus-time accounting.
//!
//! ## Key Types
//!
//! - `Card`: content, identity, face-up/matched flags, bonus timer
//! - `BonusTimer`: accumulated face-up time against a fixed limit
//! - `CardView`: a card with derived values frozen at one instant

pub mod bonus;
pub mod card;
pub mod view;

pub use bonus::BonusTimer;
pub use card::Card;
pub use view::CardView;
