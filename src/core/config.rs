//! Game configuration types.
//!
//! - `GameConfig`: engine knobs (bonus time limit, shuffle seed)
//! - `Theme`: the contents a themed game deals from
//! - `MemorizeConfig`: both of the above, as loaded from a TOML file
//!
//! ```
//! use std::time::Duration;
//! use memorize::core::MemorizeConfig;
//!
//! let config = MemorizeConfig::from_toml_str(r#"
//!     [game]
//!     bonus_time_limit_secs = 4.5
//!     seed = 7
//!
//!     [theme]
//!     name = "Fruit"
//!     contents = ["apple", "pear", "plum"]
//!     pairs = 2
//! "#).unwrap();
//!
//! assert_eq!(config.game.bonus_time_limit, Duration::from_millis(4500));
//! assert_eq!(config.theme.pair_count(), 2);
//! ```

use std::path::Path;
use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::rng::GameRng;

/// Bonus window a card gets when no limit is configured.
pub const DEFAULT_BONUS_TIME_LIMIT: Duration = Duration::from_secs(6);

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Face-up time a card may spend before its match bonus is gone.
    ///
    /// Zero disables bonuses entirely.
    #[serde(rename = "bonus_time_limit_secs", with = "secs_f64", default = "default_bonus_time_limit")]
    pub bonus_time_limit: Duration,

    /// Shuffle seed. `None` deals from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_bonus_time_limit() -> Duration {
    DEFAULT_BONUS_TIME_LIMIT
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bonus_time_limit: DEFAULT_BONUS_TIME_LIMIT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-card bonus time limit.
    #[must_use]
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// RNG for dealing: seeded if a seed is configured, entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

/// A named set of card contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Display name.
    pub name: String,

    /// Distinct card faces; pair `i` shows `contents[i]`.
    pub contents: Vec<String>,

    /// Number of pairs to deal. `None` deals one pair per content.
    #[serde(default)]
    pub pairs: Option<usize>,
}

impl Theme {
    /// Create a theme dealing one pair per content.
    pub fn new<I, S>(name: impl Into<String>, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            contents: contents.into_iter().map(Into::into).collect(),
            pairs: None,
        }
    }

    /// The built-in theme.
    #[must_use]
    pub fn halloween() -> Self {
        Self::new("Halloween", ["👻", "🎃", "🕷"])
    }

    /// Deal only the first `pairs` contents.
    #[must_use]
    pub fn with_pairs(mut self, pairs: usize) -> Self {
        self.pairs = Some(pairs);
        self
    }

    /// Number of pairs a game of this theme has.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs.unwrap_or(self.contents.len())
    }

    /// Content for pair `pair_index`.
    #[must_use]
    pub fn content(&self, pair_index: usize) -> Option<&str> {
        self.contents.get(pair_index).map(String::as_str)
    }

    /// Check that every dealt content appears on exactly one pair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contents.is_empty() {
            return Err(ConfigError::EmptyTheme(self.name.clone()));
        }

        let mut seen = FxHashSet::default();
        for content in &self.contents {
            if !seen.insert(content.as_str()) {
                return Err(ConfigError::DuplicateContent {
                    theme: self.name.clone(),
                    content: content.clone(),
                });
            }
        }

        if self.pair_count() > self.contents.len() {
            return Err(ConfigError::TooManyPairs {
                theme: self.name.clone(),
                requested: self.pair_count(),
                available: self.contents.len(),
            });
        }

        Ok(())
    }
}

/// Configuration file contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemorizeConfig {
    #[serde(default)]
    pub game: GameConfig,
    pub theme: Theme,
}

impl MemorizeConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: MemorizeConfig = toml::from_str(s)?;
        config.theme.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            theme = %config.theme.name,
            pairs = config.theme.pair_count(),
            "loaded config"
        );
        Ok(config)
    }
}

mod secs_f64 {
    use std::time::Duration;

    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}
