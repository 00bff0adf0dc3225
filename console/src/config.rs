use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use common::games::tictactoe::Difficulty;

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.yaml";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Skips the difficulty prompt when set.
    pub difficulty: Option<u8>,
    pub clear_screen: bool,
    pub log_file: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            clear_screen: true,
            log_file: None,
        }
    }
}

impl ConsoleConfig {
    pub fn difficulty(&self) -> Result<Option<Difficulty>, String> {
        self.difficulty.map(Difficulty::try_from).transpose()
    }
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        self.difficulty()?;
        if let Some(ref log_file) = self.log_file {
            if log_file.trim().is_empty() {
                return Err("Log file path must not be empty".to_string());
            }
        }
        Ok(())
    }
}

pub fn serialize(config: &ConsoleConfig) -> Result<String, String> {
    serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

pub fn deserialize(content: &str) -> Result<ConsoleConfig, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
}

/// Reads and validates the config file. A missing file yields the defaults.
pub fn load_config(file_path: &str) -> Result<ConsoleConfig, String> {
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(err) => match err.kind() {
            ErrorKind::NotFound => return Ok(ConsoleConfig::default()),
            _ => return Err(format!("Failed to read config file: {}", err)),
        },
    };

    let config = deserialize(&content)?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

pub fn save_config(file_path: &str, config: &ConsoleConfig) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serialize(config)?;
    std::fs::write(file_path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
