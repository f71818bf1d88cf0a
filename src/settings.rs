use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WarehouseError};

const LOG_FILE_NAME: &str = "app.log";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Defaults to `app.log` beside the data file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

fn default_data_file() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("warehouse")
        .join("inventory.json")
        .to_string_lossy()
        .to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_file: None,
        }
    }
}

/// Files a single command works against.
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    pub data_file: PathBuf,
    pub log_file: PathBuf,
}

impl Settings {
    /// Resolve the data and log files, with `file_override` taking the
    /// place of the configured data file.
    pub fn paths(&self, file_override: Option<&Path>) -> Paths {
        match file_override {
            Some(file) => Paths {
                data_file: file.to_path_buf(),
                log_file: log_beside(file),
            },
            None => {
                let data_file = PathBuf::from(&self.data_file);
                let log_file = match &self.log_file {
                    Some(log) => PathBuf::from(log),
                    None => log_beside(&data_file),
                };
                Paths {
                    data_file,
                    log_file,
                }
            }
        }
    }
}

fn log_beside(data_file: &Path) -> PathBuf {
    data_file
        .parent()
        .map(|dir| dir.join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("warehouse")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn parse_settings(content: &str) -> Settings {
    serde_json::from_str(content).unwrap_or_default()
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        parse_settings(&content)
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| WarehouseError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::path::absolute(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}
