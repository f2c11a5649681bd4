//! Configuration file loading with precedence handling.
//!
//! Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest).

use crate::model::Theme;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TERMFOLIO_CONFIG";

/// Environment variable overriding the theme.
pub const THEME_ENV_VAR: &str = "TERMFOLIO_THEME";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permissions, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value '{value}' in ${var}: {reason}")]
    InvalidEnvValue {
        /// Variable name.
        var: &'static str,
        /// Rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - anything left out keeps its default.
/// Lives at `~/.config/termfolio/config.toml` unless overridden.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Starting theme, `dark` or `light`.
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Use the inertial scroll engine for navigation.
    #[serde(default)]
    pub smooth_scroll: Option<bool>,

    /// Duration of navigation scroll animations.
    #[serde(default)]
    pub scroll_duration_ms: Option<u64>,

    /// Quiet window before the active section is recomputed.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Height of the "top of viewport" priority band, in rows.
    #[serde(default)]
    pub priority_band_rows: Option<u16>,

    /// Draw the magnetic cursor indicator.
    #[serde(default)]
    pub magnetic_cursor: Option<bool>,

    /// Make the contact form's simulated submission fail.
    #[serde(default)]
    pub simulate_send_failure: Option<bool>,

    /// Replacement portfolio content (`.toml` or `.json`).
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Theme at startup.
    pub theme: Theme,
    /// Animate programmatic scrolls; off means instant jumps.
    pub smooth_scroll: bool,
    /// Length of an animated scroll.
    pub scroll_duration_ms: u64,
    /// Quiet period before the active section is recomputed.
    pub debounce_ms: u64,
    /// Height of the band under the nav bar that wins active-section ties.
    pub priority_band_rows: u16,
    /// Draw the magnetic cursor indicator.
    pub magnetic_cursor: bool,
    /// Make every contact form submission fail.
    pub simulate_send_failure: bool,
    /// `None` uses the built-in content.
    pub content_path: Option<PathBuf>,
    /// Destination of tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            smooth_scroll: true,
            scroll_duration_ms: 1500,
            debounce_ms: 100,
            priority_band_rows: 8,
            magnetic_cursor: true,
            simulate_send_failure: false,
            content_path: None,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// [`Self::scroll_duration_ms`] as a [`Duration`].
    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }

    /// [`Self::debounce_ms`] as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Overrides taken from command-line flags. `None`/`false` leave the
/// config untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--theme`.
    pub theme: Option<Theme>,
    /// `--content`.
    pub content_path: Option<PathBuf>,
    /// `--no-smooth-scroll`.
    pub no_smooth_scroll: bool,
    /// `--no-cursor`.
    pub no_cursor: bool,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/termfolio/termfolio.log` on Linux, the platform
/// equivalent elsewhere, or `termfolio.log` in the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("termfolio").join("termfolio.log"),
        None => PathBuf::from("termfolio.log"),
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("termfolio").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Path precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TERMFOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/termfolio/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) if !env_path.is_empty() => return load_config_file(PathBuf::from(env_path)),
        Ok(_) => {}
        Err(std::env::VarError::NotPresent) => {}
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        theme: config.theme.unwrap_or(defaults.theme),
        smooth_scroll: config.smooth_scroll.unwrap_or(defaults.smooth_scroll),
        scroll_duration_ms: config
            .scroll_duration_ms
            .unwrap_or(defaults.scroll_duration_ms),
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        priority_band_rows: config
            .priority_band_rows
            .unwrap_or(defaults.priority_band_rows),
        magnetic_cursor: config.magnetic_cursor.unwrap_or(defaults.magnetic_cursor),
        simulate_send_failure: config
            .simulate_send_failure
            .unwrap_or(defaults.simulate_send_failure),
        content_path: config.content_path.or(defaults.content_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `TERMFOLIO_THEME`.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(value) = std::env::var(THEME_ENV_VAR) {
        config.theme = value
            .parse()
            .map_err(|e: crate::model::theme::UnknownTheme| ConfigError::InvalidEnvValue {
                var: THEME_ENV_VAR,
                value: value.clone(),
                reason: e.to_string(),
            })?;
    }
    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(path) = cli.content_path {
        config.content_path = Some(path);
    }
    if cli.no_smooth_scroll {
        config.smooth_scroll = false;
    }
    if cli.no_cursor {
        config.magnetic_cursor = false;
    }
    config
}

/// Run the whole chain: file (by path precedence) → env → CLI.
pub fn resolve(
    config_path: Option<PathBuf>,
    cli: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let config = apply_env_overrides(merge_config(file))?;
    Ok(apply_cli_overrides(config, cli))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
