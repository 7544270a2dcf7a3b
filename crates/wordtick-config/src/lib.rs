use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::ui::UiConfig;
use self::words::WordsConfig;

pub mod ui;
pub mod words;

fn default_delta_time() -> u64 {
    100
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub words: WordsConfig,
    pub ui: UiConfig,

    /// Host loop delta time in milliseconds
    #[serde(default = "default_delta_time")]
    pub delta_time: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to open config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(delta_time) = env_parse("WORDTICK_DELTA_TIME_MS") {
            self.delta_time = delta_time;
        }

        if let Some(interval) = env_parse("WORDTICK_SWITCH_INTERVAL_SEC") {
            self.words.switch_interval_sec = interval;
        }

        if let Some(enabled) = env_parse("WORDTICK_DISPLAY_ENABLED") {
            self.words.display_enabled = enabled;
        }

        if let Ok(path) = env::var("WORDTICK_WORDS_PATH") {
            self.words.source_path = Some(path);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: WordsConfig::default(),
            ui: UiConfig::default(),
            delta_time: default_delta_time(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let value = env::var(key).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("Ignoring {key}={value}: not a valid value");
            None
        }
    }
}
