use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::dispatch::priority;
use crate::error::{AppError, AppResult};
use crate::input::KeymapPreset;

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub dispatch: DispatchConfig,
    pub search: SearchConfig,
    pub keymap: KeymapConfig,
    pub log: LogConfig,
}

/// Dispatch priority of each input context, lowest first.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DispatchConfig {
    pub global: i32,
    pub editor: i32,
    pub navigation: i32,
    pub search_results: i32,
    pub search_input: i32,
    pub title_input: i32,
    pub prompt: i32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            global: priority::GLOBAL,
            editor: priority::EDITOR,
            navigation: priority::NAVIGATION,
            search_results: priority::SEARCH_RESULTS,
            search_input: priority::SEARCH_INPUT,
            title_input: priority::TITLE_INPUT,
            prompt: priority::PROMPT,
        }
    }
}

impl DispatchConfig {
    fn sanitized(mut self) -> Self {
        let mut floor = self.global;
        for value in [
            &mut self.editor,
            &mut self.navigation,
            &mut self.search_results,
            &mut self.search_input,
            &mut self.title_input,
            &mut self.prompt,
        ] {
            if *value <= floor {
                *value = floor.saturating_add(1);
            }
            floor = *value;
        }
        self
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1500,
            max_results: 50,
        }
    }
}

impl SearchConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

impl KeymapConfig {
    pub fn preset(&self) -> KeymapPreset {
        KeymapPreset::parse(&self.preset)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::config(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.dispatch = self.dispatch.sanitized();
        self.search.debounce_ms = self.search.debounce_ms.max(1);
        self.search.max_results = self.search.max_results.max(1);
        if self.log.filter.trim().is_empty() {
            self.log.filter = LogConfig::default().filter;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("CUED_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("cued").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("cued")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("cued").join("config.toml"));
    }
    None
}
