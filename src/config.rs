use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Hint printed after every rejection
pub const DEFAULT_BYPASS_HINT: &str =
    "Or, rerun with '--no-verify' to skip version checking (not recommended)";

/// Log level used when neither RUST_LOG nor the config file sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const APP_DIR: &str = "version-gate";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Gate configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GateConfig {
    pub bypass_hint: String,
    pub log: LogConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            bypass_hint: DEFAULT_BYPASS_HINT.to_string(),
            log: LogConfig::default(),
        }
    }
}

/// Logging-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "version_gate=debug"
    pub level: String,
    /// Write logs to [`log_path`] instead of stderr
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
        }
    }
}

impl GateConfig {
    /// Load configuration from an explicit path, or from [`config_path`] if it exists.
    ///
    /// A missing explicit file is an error; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Directory holding the log file: `$XDG_DATA_HOME/version-gate`.
///
/// An unset or empty XDG_DATA_HOME falls back to
/// `~/.local/share/version-gate`, then to `./version-gate` without a home.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Directory holding `config.json`: `$XDG_CONFIG_HOME/version-gate`, with
/// the same fallbacks as [`data_dir`] but rooted at `~/.config`.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-gate.log")
}

fn dir_with_env(xdg_dir: Option<String>, home_dir: Option<PathBuf>, home_relative: &str) -> PathBuf {
    let base = xdg_dir
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_relative)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn gate_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<GateConfig>(json!({
            "log": {
                "level": "debug"
            }
        }))
        .unwrap();

        assert_eq!(result.bypass_hint, DEFAULT_BYPASS_HINT);
        assert_eq!(
            result.log,
            LogConfig {
                level: "debug".to_string(),
                file: false,
            }
        );
    }

    #[test]
    fn gate_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<GateConfig>(json!({
            "bypassHint": "Use git commit --no-verify",
            "log": {
                "level": "info",
                "file": true
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            GateConfig {
                bypass_hint: "Use git commit --no-verify".to_string(),
                log: LogConfig {
                    level: "info".to_string(),
                    file: true,
                },
            }
        );
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"bypassHint": "skip it"}}"#).unwrap();

        let config = GateConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.bypass_hint, "skip it");
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn load_fails_when_explicit_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let result = GateConfig::load(Some(&missing));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn from_file_reports_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = GateConfig::from_file(file.path());

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn dir_with_env_uses_xdg_dir_when_set() {
        let path = dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
            ".local/share",
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/version-gate"));
    }

    #[test]
    fn dir_with_env_ignores_empty_xdg_dir() {
        let path = dir_with_env(
            Some(String::new()),
            Some(PathBuf::from("/home/user")),
            ".config",
        );

        assert_eq!(path, PathBuf::from("/home/user/.config/version-gate"));
    }

    #[test]
    fn dir_with_env_falls_back_to_home_relative_dir() {
        let path = dir_with_env(None, Some(PathBuf::from("/home/user")), ".local/share");

        assert_eq!(path, PathBuf::from("/home/user/.local/share/version-gate"));
    }

    #[test]
    fn dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = dir_with_env(None, None, ".config");

        assert_eq!(path, PathBuf::from("./version-gate"));
    }
}
