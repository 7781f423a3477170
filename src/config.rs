use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Token;
use crate::error::ConfigError;
use crate::games::rps;
use crate::rules::DEFAULT_MATCH_TARGET;
use crate::session::MatchSettings;

/// Grid match settings (connect four, tic-tac-toe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridMatchConfig {
    /// Round wins needed to take the match. Zero is a parse error.
    pub target_score: NonZeroU32,
    /// Token that moves first in the opening round.
    pub first_to_move: Token,
    /// Swap the first mover after every round.
    pub alternate_first: bool,
}

impl Default for GridMatchConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_MATCH_TARGET,
            first_to_move: Token::First,
            alternate_first: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed RNG seed; fresh entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Consecutive rejected moves before a strategy is declared stuck.
    pub max_illegal_attempts: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_illegal_attempts: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpsConfig {
    pub target_score: NonZeroU32,
}

impl Default for RpsConfig {
    fn default() -> Self {
        Self {
            target_score: rps::DEFAULT_TARGET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwentyOneConfig {
    /// The dealer hits below this total.
    pub dealer_stands_on: u32,
    pub target_score: NonZeroU32,
}

impl Default for TwentyOneConfig {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            target_score: DEFAULT_MATCH_TARGET,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessWhoConfig {
    /// TOML roster of people; the built-in roster when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster: Option<PathBuf>,
}

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub grid_match: GridMatchConfig,
    pub session: SessionConfig,
    pub rps: RpsConfig,
    pub twenty_one: TwentyOneConfig,
    pub guess_who: GuessWhoConfig,
}

impl PlayConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: PlayConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.max_illegal_attempts == 0 {
            return Err(ConfigError::Validation(
                "session.max_illegal_attempts must be > 0".into(),
            ));
        }
        if !(2..=21).contains(&self.twenty_one.dealer_stands_on) {
            return Err(ConfigError::Validation(
                "twenty_one.dealer_stands_on must be in [2, 21]".into(),
            ));
        }

        Ok(())
    }

    /// Settings for a grid match built from the `[grid_match]` and
    /// `[session]` sections.
    #[must_use]
    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings::new(self.grid_match.target_score)
            .with_first_to_move(self.grid_match.first_to_move)
            .with_alternate_first(self.grid_match.alternate_first)
            .with_max_illegal_attempts(self.session.max_illegal_attempts)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&PlayConfig::default())?)
    }
}
