use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Environment variable that takes precedence over the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_CITIES_URL: &str = "https://public.opendatasoft.com/api/records/1.0/search/";
pub const DEFAULT_DATASET: &str = "geonames-all-cities-with-a-population-1000";
pub const DEFAULT_ROWS: u32 = 10;
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// rows = 10
/// timeout_secs = 10
/// ```
///
/// Every field is optional in the file; missing ones fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenWeather access key.
    pub api_key: Option<String>,

    /// Cities directory search endpoint.
    pub cities_url: String,

    /// Directory dataset to query.
    pub dataset: String,

    /// Number of city records requested.
    pub rows: u32,

    /// Current weather endpoint.
    pub weather_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            cities_url: DEFAULT_CITIES_URL.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            rows: DEFAULT_ROWS,
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from an explicit path, or defaults if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform config dir.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Store a new API key, replacing any previous one.
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// API key to use for weather lookups. `OPENWEATHER_API_KEY` wins over the file.
    pub fn api_key(&self) -> Result<String> {
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn resolve_api_key(env: Option<String>, stored: Option<&str>) -> Result<String> {
    if let Some(key) = env.filter(|k| !is_blank(k)) {
        return Ok(key);
    }

    stored.filter(|k| !is_blank(k)).map(str::to_owned).ok_or_else(|| {
        anyhow!(
            "No OpenWeather API key configured.\n\
             Hint: run `cityweather configure` or set {API_KEY_ENV}."
        )
    })
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
