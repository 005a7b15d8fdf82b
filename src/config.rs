use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;

/// Longest allowed computer pause, in milliseconds.
pub const MAX_THINK_DELAY_MS: u64 = 60_000;

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Computer,
}

/// The three menu choices: human vs computer, human vs human, computer vs
/// computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsComputer,
    HumanVsHuman,
    ComputerVsComputer,
}

impl GameMode {
    /// Map a menu number (1, 2 or 3) to a mode.
    pub fn from_menu(choice: u8) -> Option<GameMode> {
        match choice {
            1 => Some(GameMode::HumanVsComputer),
            2 => Some(GameMode::HumanVsHuman),
            3 => Some(GameMode::ComputerVsComputer),
            _ => None,
        }
    }

    pub fn seats(self) -> PlayersConfig {
        let (first, second) = match self {
            GameMode::HumanVsComputer => (PlayerKind::Human, PlayerKind::Computer),
            GameMode::HumanVsHuman => (PlayerKind::Human, PlayerKind::Human),
            GameMode::ComputerVsComputer => (PlayerKind::Computer, PlayerKind::Computer),
        };
        PlayersConfig { first, second }
    }
}

/// Seat assignment, in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayersConfig {
    pub first: PlayerKind,
    pub second: PlayerKind,
}

impl PlayersConfig {
    pub fn kinds(&self) -> [PlayerKind; 2] {
        [self.first, self.second]
    }
}

/// Computer player settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    /// Pause before each computer move. Display only.
    pub think_delay_ms: u64,
    /// Seed for reproducible games; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        ComputerConfig {
            think_delay_ms: 3000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use the full-screen terminal view instead of plain text.
    pub tui: bool,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seats; when absent the game type is asked for at startup.
    pub players: Option<PlayersConfig>,
    pub computer: ComputerConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.computer.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "computer.think_delay_ms must be <= {MAX_THINK_DELAY_MS}"
            )));
        }
        Ok(())
    }

    /// Render the default configuration as TOML (useful for creating example
    /// config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}
