//! Configuration errors.
//!
//! Gameplay never fails: invalid moves are ignored. Loading a configuration
//! or theme is the one place where bad input is reported back.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("theme `{0}` has no contents")]
    EmptyTheme(String),

    #[error("theme `{theme}` lists `{content}` more than once")]
    DuplicateContent { theme: String, content: String },

    #[error("theme `{theme}` asks for {requested} pairs but has only {available} contents")]
    TooManyPairs {
        theme: String,
        requested: usize,
        available: usize,
    },
}
