//! Simulation configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::grid::{Mark, Side};

/// Parameters for an automated run of both games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Master seed. Every random stream in the run derives from it.
    pub seed: u64,

    /// Number of best-of-five grid matches to play.
    pub grid_matches: u32,

    /// Give up on a grid match after this many rounds.
    /// Ties score nobody, so a match has no fixed length.
    pub max_rounds_per_match: u32,

    /// Mark used by the simulated human.
    pub human_mark: Mark,

    /// Which side opens every grid round.
    pub first_mover: Side,

    /// Number of card rounds to play.
    pub card_rounds: u32,

    /// The simulated player stays once their total reaches this.
    pub stand_on: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_matches: 10,
            max_rounds_per_match: 100,
            human_mark: Mark::X,
            first_mover: Side::Human,
            card_rounds: 100,
            stand_on: 17,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SimConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_matches == 0 && self.card_rounds == 0 {
            return Err(ConfigError::Validation(
                "at least one of grid_matches or card_rounds must be > 0".into(),
            ));
        }
        if self.max_rounds_per_match == 0 {
            return Err(ConfigError::Validation(
                "max_rounds_per_match must be > 0".into(),
            ));
        }
        if !(1..=21).contains(&self.stand_on) {
            return Err(ConfigError::Validation(
                "stand_on must be in [1, 21]".into(),
            ));
        }
        Ok(())
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of grid matches.
    pub fn with_grid_matches(mut self, matches: u32) -> Self {
        self.grid_matches = matches;
        self
    }

    /// Set the number of card rounds.
    pub fn with_card_rounds(mut self, rounds: u32) -> Self {
        self.card_rounds = rounds;
        self
    }

    /// Set the simulated player's stand threshold.
    pub fn with_stand_on(mut self, total: u32) -> Self {
        self.stand_on = total;
        self
    }

    /// Set the simulated human's mark.
    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        self.human_mark = mark;
        self
    }

    /// Set which side opens each grid round.
    pub fn with_first_mover(mut self, side: Side) -> Self {
        self.first_mover = side;
        self
    }
}
