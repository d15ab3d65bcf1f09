use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use crate::constants::base_path;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub frame_delay_ms: Option<u64>,
    #[serde(default)]
    pub step_limit: Option<usize>,
    #[serde(default)]
    pub color: Option<bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_path() -> Option<PathBuf> {
        base_path().map(|p| p.join("settings.ron"))
    }

    pub fn set_log_level(mut self, value: log::LevelFilter) -> Self {
        self.log_level = Some(value.to_string().to_lowercase());
        self
    }

    pub fn get_log_level(&self) -> Result<log::LevelFilter, SettingsError> {
        match &self.log_level {
            Some(level) => level
                .parse()
                .map_err(|_| SettingsError::LogLevel(level.clone())),
            None => Ok(log::LevelFilter::Warn),
        }
    }

    pub fn set_frame_delay(mut self, value: Duration) -> Self {
        self.frame_delay_ms = Some(value.as_millis() as u64);
        self
    }

    pub fn get_frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms.unwrap_or(50))
    }

    pub fn set_step_limit(mut self, value: Option<usize>) -> Self {
        self.step_limit = value;
        self
    }

    pub fn get_step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    pub fn set_color(mut self, value: bool) -> Self {
        self.color = Some(value);
        self
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(text)?)
    }

    /// Reads settings from `path`, a missing file just means defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_ron(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}
