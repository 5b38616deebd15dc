//! Matching-pairs game state and the choose transition.

use im::Vector;
use smallvec::SmallVec;

use super::lookup;
use crate::cards::{Card, CardView};
use crate::core::clock::{Clock, SystemClock, Timestamp};
use crate::core::config::GameConfig;
use crate::core::id::{CardId, MAX_PAIRS};
use crate::core::rng::GameRng;

/// A game of matching pairs.
///
/// Holds `2 * pair_count` cards in a fixed, shuffled order. Between calls to
/// `choose`, at most one card is face up and unmatched.
///
/// ## Usage
///
/// ```
/// use memorize::{GameConfig, GameRng, ManualClock, MemoryGame};
///
/// let contents = ["A", "B"];
/// let mut game = MemoryGame::with_config(
///     contents.len(),
///     |pair| contents[pair],
///     &GameConfig::default(),
///     ManualClock::new(),
///     &mut GameRng::new(42),
/// );
///
/// let first = game.cards()[0].clone();
/// let partner = game
///     .cards()
///     .iter()
///     .find(|c| c.id() != first.id() && c.content() == first.content())
///     .cloned()
///     .unwrap();
///
/// game.choose(&first);
/// game.choose(&partner);
///
/// assert_eq!(game.matched_pairs(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryGame<C: Clone, K = SystemClock> {
    cards: Vector<Card<C>>,
    clock: K,
}

impl<C: Clone + PartialEq> MemoryGame<C, SystemClock> {
    /// Deal a game on the system clock with default configuration.
    ///
    /// `factory` is called once per pair index, in increasing order.
    pub fn new<F>(pair_count: usize, factory: F) -> Self
    where
        F: FnMut(usize) -> C,
    {
        let config = GameConfig::default();
        let mut rng = config.rng();
        Self::with_config(pair_count, factory, &config, SystemClock::new(), &mut rng)
    }
}

impl<C: Clone + PartialEq, K: Clock> MemoryGame<C, K> {
    /// Deal a game with explicit configuration, clock and RNG.
    ///
    /// Builds two cards per pair sharing the factory's content, then shuffles
    /// the whole deck once. A pair count of zero gives an empty game.
    pub fn with_config<F>(
        pair_count: usize,
        mut factory: F,
        config: &GameConfig,
        clock: K,
        rng: &mut GameRng,
    ) -> Self
    where
        F: FnMut(usize) -> C,
    {
        assert!(pair_count <= MAX_PAIRS, "Pair count exceeds id space");

        let limit = config.bonus_time_limit;
        let mut cards = Vec::with_capacity(pair_count * 2);
        for pair_index in 0..pair_count {
            let content = factory(pair_index);
            cards.push(Card::with_bonus_time_limit(CardId::for_pair(pair_index, 0), content.clone(), limit));
            cards.push(Card::with_bonus_time_limit(CardId::for_pair(pair_index, 1), content, limit));
        }
        rng.shuffle(&mut cards);

        tracing::debug!(pairs = pair_count, seed = rng.seed(), "dealt new game");

        Self {
            cards: cards.into_iter().collect(),
            clock,
        }
    }

    // === Reads ===

    /// The cards in play order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card<C>> {
        &self.cards
    }

    /// Detached copy of the cards; later play does not affect it.
    ///
    /// O(1): the copy shares structure with the game until either changes.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card<C>> {
        self.cards.clone()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        lookup::index_of(&self.cards, id).map(|index| &self.cards[index])
    }

    /// Every card with derived values evaluated at one clock reading.
    #[must_use]
    pub fn views(&self) -> Vec<CardView<C>> {
        let now = self.clock.now();
        self.cards.iter().map(|card| card.view(now)).collect()
    }

    /// Current reading of the game's clock.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    #[must_use]
    pub fn clock(&self) -> &K {
        &self.clock
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    /// All pairs found. An empty game is trivially finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Indices of face-up, unmatched cards.
    #[must_use]
    pub fn face_up_unmatched_indices(&self) -> SmallVec<[usize; 2]> {
        self.face_up_unmatched().collect()
    }

    /// Index of the one face-up, unmatched card.
    ///
    /// `None` if there is no such card or, defensively, more than one.
    #[must_use]
    pub fn find_sole_face_up_unmatched_index(&self) -> Option<usize> {
        lookup::only(self.face_up_unmatched())
    }

    fn face_up_unmatched(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_face_up() && !card.is_matched())
            .map(|(index, _)| index)
    }

    // === Intents ===

    /// Choose `card`. Same as `choose_id(card.id())`.
    pub fn choose(&mut self, card: &Card<C>) {
        self.choose_id(card.id());
    }

    /// Choose the card with `id`.
    ///
    /// Ignored if no such card exists or it is already face up or matched.
    /// Otherwise, if the one face-up card has the same content, both become
    /// matched and the chosen card is revealed; if not, the chosen card
    /// becomes the only face-up unmatched card.
    pub fn choose_id(&mut self, id: CardId) {
        let Some(chosen) = lookup::index_of(&self.cards, id) else {
            tracing::trace!(card = %id, "choose ignored: unknown card");
            return;
        };

        let card = &self.cards[chosen];
        if card.is_face_up() || card.is_matched() {
            tracing::trace!(
                card = %id,
                face_up = card.is_face_up(),
                matched = card.is_matched(),
                "choose ignored: card not selectable"
            );
            return;
        }

        let now = self.clock.now();
        match self.find_sole_face_up_unmatched_index() {
            Some(potential) if self.cards[chosen].content() == self.cards[potential].content() => {
                self.mark_matched(chosen, potential, now);
                self.reveal(chosen, now);
                tracing::debug!(
                    card = %id,
                    partner = %self.cards[potential].id(),
                    matched_pairs = self.matched_pairs(),
                    "pair matched"
                );
            }
            potential => {
                self.set_sole_face_up(chosen, now);
                tracing::trace!(card = %id, previous = ?potential, "card revealed");
            }
        }
    }

    // === Transitions ===
    //
    // Each one changes flags and bonus time together through the card's own
    // transition, so a flag is never written without its time bookkeeping.

    /// Make `index` the only face-up unmatched card.
    ///
    /// Reveals `index` and hides every other unmatched card. Matched cards
    /// are left as they are.
    pub(crate) fn set_sole_face_up(&mut self, index: usize, now: Timestamp) {
        for i in 0..self.cards.len() {
            if self.cards[i].is_matched() {
                continue;
            }
            if i == index {
                self.reveal(i, now);
            } else {
                self.hide(i, now);
            }
        }
    }

    pub(crate) fn reveal(&mut self, index: usize, now: Timestamp) {
        if let Some(card) = self.cards.get_mut(index) {
            card.reveal(now);
        }
    }

    pub(crate) fn hide(&mut self, index: usize, now: Timestamp) {
        if let Some(card) = self.cards.get_mut(index) {
            card.hide(now);
        }
    }

    /// Mark both cards of a pair matched at the same instant.
    pub(crate) fn mark_matched(&mut self, a: usize, b: usize, now: Timestamp) {
        for index in [a, b] {
            if let Some(card) = self.cards.get_mut(index) {
                card.mark_matched(now);
            }
        }
    }
}
