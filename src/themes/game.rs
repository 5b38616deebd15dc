//! Themed game session.

use im::Vector;

use crate::cards::{Card, CardView};
use crate::core::{Clock, ConfigError, GameConfig, GameRng, MemorizeConfig, SystemClock, Theme};
use crate::game::MemoryGame;

/// A game dealt from a theme, replaceable with a fresh deal.
///
/// Each deal shuffles with a fork of the session RNG, so successive games
/// differ but a seeded session replays identically.
#[derive(Clone, Debug)]
pub struct ThemedGame<K = SystemClock> {
    theme: Theme,
    config: GameConfig,
    clock: K,
    rng: GameRng,
    game: MemoryGame<String, K>,
}

impl ThemedGame<SystemClock> {
    /// Deal `theme` on the system clock with default configuration.
    pub fn new(theme: Theme) -> Result<Self, ConfigError> {
        Self::with_config(theme, GameConfig::default(), SystemClock::new())
    }

    /// Deal from a loaded configuration file.
    pub fn from_config(config: MemorizeConfig) -> Result<Self, ConfigError> {
        Self::with_config(config.theme, config.game, SystemClock::new())
    }
}

impl<K: Clock + Clone> ThemedGame<K> {
    /// Deal `theme` with explicit configuration and clock.
    ///
    /// Fails if the theme cannot produce distinct pairs.
    pub fn with_config(theme: Theme, config: GameConfig, clock: K) -> Result<Self, ConfigError> {
        theme.validate()?;
        let mut rng = config.rng();
        let game = deal(&theme, &config, clock.clone(), &mut rng);
        tracing::debug!(theme = %theme.name, seed = rng.seed(), "started themed game");

        Ok(Self {
            theme,
            config,
            clock,
            rng,
            game,
        })
    }

    /// Throw the current game away and deal a new one.
    pub fn reset(&mut self) {
        self.game = deal(&self.theme, &self.config, self.clock.clone(), &mut self.rng);
        tracing::debug!(theme = %self.theme.name, "reset themed game");
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current game.
    #[must_use]
    pub fn game(&self) -> &MemoryGame<String, K> {
        &self.game
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card<String>> {
        self.game.cards()
    }

    #[must_use]
    pub fn views(&self) -> Vec<CardView<String>> {
        self.game.views()
    }

    pub fn choose(&mut self, card: &Card<String>) {
        self.game.choose(card);
    }
}

/// Deal one game from the theme. The theme must already be validated.
fn deal<K: Clock>(theme: &Theme, config: &GameConfig, clock: K, rng: &mut GameRng) -> MemoryGame<String, K> {
    let mut dealer = rng.fork();
    MemoryGame::with_config(
        theme.pair_count(),
        |pair| theme.content(pair).map(str::to_owned).unwrap_or_default(),
        config,
        clock,
        &mut dealer,
    )
}
