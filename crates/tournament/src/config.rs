//! Match settings, loadable from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shogi_core::{FirstPlayer, GameConfig, GameMode, SearchLimits};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid match config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Beam search depth
    pub depth: u8,
    /// Beam search width
    pub width: usize,
    /// Plies before the game is declared a draw
    pub max_plies: u32,
    /// Clock budget per side, in seconds
    pub max_time_secs: u64,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Value table used by plain `beam` engines. Random when absent.
    pub value_table: Option<PathBuf>,
    /// Log every game result
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        let limits = SearchLimits::default();
        Self {
            games: 10,
            depth: limits.depth,
            width: limits.width,
            max_plies: 256,
            max_time_secs: 600,
            alternate_colors: true,
            value_table: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits::new(self.depth, self.width)
    }

    /// Engine games always start with Black and never consult a human.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            first_player: FirstPlayer::Black,
            max_time_secs: self.max_time_secs,
            mode: GameMode::PlayerVsPlayer,
        }
    }
}
