use crate::error::InputError;
use crate::global;
use anyhow::{Context, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when a command is run without --format
    pub format: OutputFormat,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Fixed offset from UTC, in minutes, used when rendering meeting times
    pub utc_offset_minutes: i32,
}

impl ScheduleConfig {
    pub fn offset(&self) -> Result<FixedOffset, InputError> {
        offset_from_minutes(self.utc_offset_minutes)
    }
}

pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, InputError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(InputError::InvalidOffset(minutes))
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `config_path`, writing the defaults there if it is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let content =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.schedule.utc_offset_minutes, 0);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(path.exists());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[schedule]\nutc_offset_minutes = -300\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.schedule.utc_offset_minutes, -300);
        assert_eq!(
            config.schedule.offset().unwrap(),
            FixedOffset::west_opt(5 * 3600).unwrap()
        );
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_offset() {
        assert!(matches!(
            offset_from_minutes(24 * 60),
            Err(InputError::InvalidOffset(1440))
        ));
    }
}
