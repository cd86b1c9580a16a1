use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Deserializing never fails: unknown names become Level Up
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum GameMode {
    #[serde(rename = "levelup")]
    LevelUp,
    Endless,
    Daily,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ScoringType {
    GuessCount,
    HighScore,
    DailyCompletion,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LoadingStrategy {
    LevelBased,
    Random,
    Daily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameModeConfig {
    pub scoring_type: ScoringType,
    // Whether a new puzzle follows immediately after a win
    pub continuous_play: bool,
    pub save_progress: bool,
    pub loading_strategy: LoadingStrategy,
    pub display_name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub requires_auth: bool,
}

const LEVEL_UP: GameModeConfig = GameModeConfig {
    scoring_type: ScoringType::GuessCount,
    continuous_play: false,
    save_progress: true,
    loading_strategy: LoadingStrategy::LevelBased,
    display_name: "Level Up",
    short_name: "Level Up",
    description: "Progress through levels with par scoring",
    requires_auth: true,
};

const ENDLESS: GameModeConfig = GameModeConfig {
    scoring_type: ScoringType::HighScore,
    continuous_play: true,
    save_progress: true,
    loading_strategy: LoadingStrategy::Random,
    display_name: "Endless Run",
    short_name: "Endless",
    description: "See how many puzzles you can solve in a row",
    requires_auth: false,
};

const DAILY: GameModeConfig = GameModeConfig {
    scoring_type: ScoringType::DailyCompletion,
    continuous_play: false,
    save_progress: true,
    loading_strategy: LoadingStrategy::Daily,
    display_name: "Daily Puzzle",
    short_name: "Daily",
    description: "One special puzzle per day",
    requires_auth: false,
};

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Daily, GameMode::LevelUp, GameMode::Endless];

    pub fn config(&self) -> &'static GameModeConfig {
        match self {
            GameMode::LevelUp => &LEVEL_UP,
            GameMode::Endless => &ENDLESS,
            GameMode::Daily => &DAILY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::LevelUp => "levelup",
            GameMode::Endless => "endless",
            GameMode::Daily => "daily",
        }
    }
}

impl From<String> for GameMode {
    fn from(name: String) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown game mode: {}, falling back to levelup", name);
            GameMode::LevelUp
        })
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGameMode(pub String);

impl FromStr for GameMode {
    type Err = UnknownGameMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "levelup" => Ok(GameMode::LevelUp),
            "endless" => Ok(GameMode::Endless),
            "daily" => Ok(GameMode::Daily),
            other => Err(UnknownGameMode(other.to_string())),
        }
    }
}
