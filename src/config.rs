//! Settings loaded from `config.toml`

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::timer::DEFAULT_POLL_INTERVAL;

const APP_DIR: &str = "cadence";
const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub poll_interval_ms: u64,
    pub volume: f32,
    pub show_full_path: bool,
    pub short_skip_secs: u64,
    pub long_skip_secs: u64,
    pub volume_step: f32,
    pub media_controls: bool,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            volume: 1.0,
            show_full_path: false,
            short_skip_secs: 10,
            long_skip_secs: 30,
            volume_step: 0.05,
            media_controls: true,
            log_dir: PathBuf::from(".logs"),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads `path`, or the default location when `None`. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.volume = config.volume.clamp(0.0, 1.0);
        config.volume_step = config.volume_step.clamp(0.0, 1.0);
        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::parse("show_full_path = true\n").unwrap();
        assert!(config.show_full_path);
        assert_eq!(config.poll_interval_ms, 250);
        assert_eq!(config.long_skip_secs, 30);
    }

    #[test]
    fn volume_is_clamped() {
        let config = Config::parse("volume = 3.5").unwrap();
        assert_eq!(config.volume, 1.0);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Config::parse("poll_interval_ms = \"fast\"").is_err());
    }

    #[test]
    fn absent_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }
}
