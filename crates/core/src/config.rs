//! Session configuration read from `BLOCKFALL_*` environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_WIDTH` | 10 | Board columns |
//! | `BLOCKFALL_HEIGHT` | 22 | Board rows |
//! | `BLOCKFALL_SEED` | 1 | Seed for piece generation |
//! | `BLOCKFALL_GRAVITY_MS` | 500 | Interval between gravity steps |
//! | `BLOCKFALL_RANDOM_FILL` | off | `1`/`true` seeds the bottom half with filler |
//! | `BLOCKFALL_RANDOMIZER` | uniform | `uniform` or `bag` |
//!
//! Missing or unparsable values fall back to the default.

use std::str::FromStr;

use anyhow::{bail, Result};

use crate::board::MIN_WIDTH;
use crate::rng::RandomizerKind;
use crate::types::{DEFAULT_GRAVITY_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH};


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    pub gravity_ms: u32,
    pub random_fill: bool,
    pub randomizer: RandomizerKind,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 1,
            gravity_ms: DEFAULT_GRAVITY_MS,
            random_fill: false,
            randomizer: RandomizerKind::Uniform,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, test fixtures, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            width: parsed(&lookup, "BLOCKFALL_WIDTH").unwrap_or(defaults.width),
            height: parsed(&lookup, "BLOCKFALL_HEIGHT").unwrap_or(defaults.height),
            seed: parsed(&lookup, "BLOCKFALL_SEED").unwrap_or(defaults.seed),
            gravity_ms: parsed(&lookup, "BLOCKFALL_GRAVITY_MS").unwrap_or(defaults.gravity_ms),
            random_fill: lookup("BLOCKFALL_RANDOM_FILL")
                .map(|v| v.trim() == "1" || v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.random_fill),
            randomizer: lookup("BLOCKFALL_RANDOMIZER")
                .and_then(|v| RandomizerKind::from_str(&v))
                .unwrap_or(defaults.randomizer),
        }
    }

    /// Reject settings a game cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH {
            bail!("board width {} is below the minimum of {MIN_WIDTH}", self.width);
        }
        if self.height == 0 {
            bail!("board height must be at least 1");
        }
        if self.gravity_ms == 0 {
            bail!("gravity interval must be at least 1ms");
        }
        Ok(())
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
