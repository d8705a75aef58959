//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quran-reader/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::loader::MissingSourcePolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReaderConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DataConfig {
    pub path: Option<String>,
    pub on_missing: Option<MissingSourcePolicy>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_english: Option<bool>,
    pub show_urdu: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_PATH: &str = "quran.json";
pub const DEFAULT_LOG_FILE: &str = "quran-reader.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub data_path: PathBuf,
    pub on_missing: MissingSourcePolicy,
    pub show_english: bool,
    pub show_urdu: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_path: Option<PathBuf>,
    pub on_missing: Option<MissingSourcePolicy>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid {setting}: {message}")]
    Invalid {
        setting: &'static str,
        message: String,
    },
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quran-reader/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quran-reader").join("config.toml"))
}

/// Where the config came from. Config is read before the logger exists, so
/// `main` reports this once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Read from an existing file
    File(PathBuf),
    /// No file existed; a commented default was written
    Generated(PathBuf),
    /// No file existed and writing the default failed
    GenerateFailed { path: PathBuf, reason: String },
    /// No home directory, built-in defaults only
    NoHomeDir,
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => info!("Loaded config from {}", path.display()),
            ConfigOrigin::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigOrigin::GenerateFailed { path, reason } => {
                warn!("Failed to write default config to {}: {}", path.display(), reason)
            }
            ConfigOrigin::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: ReaderConfig,
    pub origin: ConfigOrigin,
}

/// Load config from `~/.quran-reader/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ReaderConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LoadedConfig {
            config: ReaderConfig::default(),
            origin: ConfigOrigin::NoHomeDir,
        }),
    }
}

pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        let origin = match generate_default_config(path) {
            Ok(()) => ConfigOrigin::Generated(path.to_path_buf()),
            Err(e) => ConfigOrigin::GenerateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        };
        return Ok(LoadedConfig {
            config: ReaderConfig::default(),
            origin,
        });
    }

    let contents = fs::read_to_string(path)?;
    let config: ReaderConfig = toml::from_str(&contents)?;
    Ok(LoadedConfig {
        config,
        origin: ConfigOrigin::File(path.to_path_buf()),
    })
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Quran Reader Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [data]
# path = "quran.json"          # Or set QURAN_DATA_PATH
# on_missing = "fallback"      # "fallback" (built-in sample) or "fatal"

# [display]
# show_english = true
# show_urdu = true

# [logging]
# level = "info"               # "off", "error", "warn", "info", "debug", "trace"
# file = "quran-reader.log"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ReaderConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |var| std::env::var(var).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &ReaderConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Data path: CLI → env → config → default
    let data_path = cli
        .data_path
        .clone()
        .or_else(|| env("QURAN_DATA_PATH").map(PathBuf::from))
        .or_else(|| config.data.path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    // Missing-source policy: CLI → env → config → default
    let env_policy = env("QURAN_ON_MISSING")
        .map(|s| s.parse::<MissingSourcePolicy>())
        .transpose()
        .map_err(|message| ConfigError::Invalid {
            setting: "QURAN_ON_MISSING",
            message,
        })?;
    let on_missing = cli
        .on_missing
        .or(env_policy)
        .or(config.data.on_missing)
        .unwrap_or_default();

    // Log level: env → config → default
    let level_str = env("QURAN_LOG_LEVEL").or_else(|| config.logging.level.clone());
    let log_level = match level_str {
        Some(s) => s.parse::<LevelFilter>().map_err(|_| ConfigError::Invalid {
            setting: "log level",
            message: format!("unknown level: {s}"),
        })?,
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    Ok(ResolvedConfig {
        data_path,
        on_missing,
        show_english: config.display.show_english.unwrap_or(true),
        show_urdu: config.display.show_urdu.unwrap_or(true),
        log_level,
        log_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved =
            resolve_with_env(&ReaderConfig::default(), &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(resolved.on_missing, MissingSourcePolicy::Fallback);
        assert!(resolved.show_english);
        assert!(resolved.show_urdu);
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ReaderConfig {
            data: DataConfig {
                path: Some("/srv/quran.json".to_string()),
                on_missing: Some(MissingSourcePolicy::Fatal),
            },
            display: DisplayConfig {
                show_english: Some(false),
                show_urdu: None,
            },
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                file: None,
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.data_path, PathBuf::from("/srv/quran.json"));
        assert_eq!(resolved.on_missing, MissingSourcePolicy::Fatal);
        assert!(!resolved.show_english);
        assert!(resolved.show_urdu);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = ReaderConfig {
            data: DataConfig {
                path: Some("from-config.json".to_string()),
                on_missing: Some(MissingSourcePolicy::Fallback),
            },
            ..Default::default()
        };
        let env = |var: &str| match var {
            "QURAN_DATA_PATH" => Some("from-env.json".to_string()),
            "QURAN_ON_MISSING" => Some("fatal".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env).unwrap();
        assert_eq!(resolved.data_path, PathBuf::from("from-env.json"));
        assert_eq!(resolved.on_missing, MissingSourcePolicy::Fatal);

        let cli = CliOverrides {
            data_path: Some(PathBuf::from("from-cli.json")),
            on_missing: Some(MissingSourcePolicy::Fallback),
            log_file: None,
        };
        let resolved = resolve_with_env(&config, &cli, env).unwrap();
        assert_eq!(resolved.data_path, PathBuf::from("from-cli.json"));
        assert_eq!(resolved.on_missing, MissingSourcePolicy::Fallback);
    }

    #[test]
    fn test_invalid_env_policy_is_an_error() {
        let env = |var: &str| (var == "QURAN_ON_MISSING").then(|| "halt".to_string());
        let err = resolve_with_env(&ReaderConfig::default(), &CliOverrides::default(), env)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                setting: "QURAN_ON_MISSING",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_log_level_is_an_error() {
        let config = ReaderConfig {
            logging: LoggingConfig {
                level: Some("loud".to_string()),
                file: None,
            },
            ..Default::default()
        };
        assert!(resolve_with_env(&config, &CliOverrides::default(), no_env).is_err());
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[data]
path = "data/quran.json"
on_missing = "fatal"

[display]
show_urdu = false

[logging]
level = "warn"
file = "/tmp/reader.log"
"#;
        let config: ReaderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data.path.as_deref(), Some("data/quran.json"));
        assert_eq!(config.data.on_missing, Some(MissingSourcePolicy::Fatal));
        assert_eq!(config.display.show_urdu, Some(false));
        assert!(config.display.show_english.is_none());
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/reader.log"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let config: ReaderConfig = toml::from_str("[display]\nshow_english = false\n").unwrap();
        assert_eq!(config.display.show_english, Some(false));
        assert!(config.data.path.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_unknown_policy_in_toml_fails() {
        assert!(toml::from_str::<ReaderConfig>("[data]\non_missing = \"halt\"\n").is_err());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.config.data.path.is_none());
        assert_eq!(loaded.origin, ConfigOrigin::Generated(path.clone()));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Quran Reader Configuration"));
        // The generated file is all comments, so it parses to defaults
        let reparsed: ReaderConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.display.show_urdu.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[data\npath = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_existing_file_reports_file_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display]\nshow_urdu = false\n").unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.config.display.show_urdu, Some(false));
        assert_eq!(loaded.origin, ConfigOrigin::File(path));
    }

    #[test]
    fn test_unwritable_default_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // Parent "directory" is a regular file, so create_dir_all fails
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.config.logging.file.is_none());
        assert!(matches!(
            loaded.origin,
            ConfigOrigin::GenerateFailed { path: p, .. } if p == path
        ));
    }
}
