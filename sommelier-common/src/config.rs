//! Configuration loading for sommelier services
//!
//! Settings are resolved in this priority order:
//! 1. Command-line arguments (applied by the binary)
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Compiled defaults
//!
//! Every section is optional. A missing justification API key is a supported
//! configuration: the service then uses templated justifications only.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name searched in the working directory when no path is given
pub const LOCAL_CONFIG_FILE: &str = "sommelier.toml";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub justification: JustificationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub cors: CorsConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Default: 5730
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Locations of the two catalog tables
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_dishes_path")]
    pub dishes_path: PathBuf,

    #[serde(default = "default_wines_path")]
    pub wines_path: PathBuf,
}

/// External text-generation endpoint used for pairing justifications
#[derive(Debug, Clone, Deserialize)]
pub struct JustificationConfig {
    /// Base URL up to (not including) `/models/...`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Credential for the endpoint. `None` selects the template provider.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Upper bound on a single justification request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "default_top_p")]
    pub top_p: f32,

    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Cross-origin settings for browser front ends
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5730
}

fn default_dishes_path() -> PathBuf {
    PathBuf::from("data/dishes.csv")
}

fn default_wines_path() -> PathBuf {
    PathBuf::from("data/wines.csv")
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    200
}

fn default_top_p() -> f32 {
    0.8
}

fn default_top_k() -> u32 {
    40
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dishes_path: default_dishes_path(),
            wines_path: default_wines_path(),
        }
    }
}

impl Default for JustificationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            top_p: default_top_p(),
            top_k: default_top_k(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl JustificationConfig {
    /// Configured API key, if present and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| is_valid_key(key))
    }
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override file values with process environment variables
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Override file values from an arbitrary variable lookup
    ///
    /// `SOMMELIER_*` names win over the legacy `LLM_*` names.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |names: &[&str]| {
            names
                .iter()
                .copied()
                .find_map(|name| lookup(name).filter(|v| !v.trim().is_empty()))
        };

        if let Some(key) = first_set(&["SOMMELIER_LLM_API_KEY", "LLM_API_KEY"]) {
            debug!("Justification API key taken from environment");
            self.justification.api_key = Some(key);
        }
        if let Some(model) = first_set(&["SOMMELIER_LLM_MODEL", "LLM_MODEL"]) {
            self.justification.model = model;
        }
        if let Some(url) = first_set(&["SOMMELIER_LLM_BASE_URL"]) {
            self.justification.base_url = url;
        }
        if let Some(path) = first_set(&["SOMMELIER_DISHES_PATH"]) {
            self.catalog.dishes_path = PathBuf::from(path);
        }
        if let Some(path) = first_set(&["SOMMELIER_WINES_PATH"]) {
            self.catalog.wines_path = PathBuf::from(path);
        }
    }
}

/// Load configuration from an explicit path or the default search locations
///
/// An explicit path must be readable. Without one, the first existing file
/// from [`find_config_file`] is used, and compiled defaults otherwise.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match find_config_file() {
            Some(path) => path,
            None => {
                info!("No config file found, using built-in defaults");
                return Ok(TomlConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    let config = TomlConfig::from_toml_str(&content)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Search the working directory, then the platform config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    let user_config = dirs::config_dir().map(|d| d.join("sommelier").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/sommelier/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}
