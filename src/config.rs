// file: src/config.rs
// version: 1.0.0
// guid: 9e1c7f3b-2a85-4d60-9b4e-8f0a3c6d2e1f

use crate::error::{Result, WrapperError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Application configuration
///
/// The CLI surface is pure pass-through, so configuration only ever comes
/// from files and environment variables, never from flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub delegate: DelegateConfig,
    pub logging: LoggingConfig,
}

/// Which executable to delegate to and how to run it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegateConfig {
    pub program: String,
    pub working_directory: Option<PathBuf>,
    pub timeout_seconds: Option<u64>,
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            program: "pros".to_string(),
            working_directory: None,
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // "warn" keeps a normal run silent apart from the delegate's output
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from multiple sources
    pub async fn load() -> Result<Self> {
        let mut config = Self::default();

        // Try to load from user config directory
        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                debug!("Loading user configuration from: {}", user_config.display());
                config = Self::load_from_file(&user_config).await?;
            }
        }

        // Try to load from project config
        let project_config = Path::new(".pros-sketchy.toml");
        if project_config.exists() {
            debug!(
                "Loading project configuration from: {}",
                project_config.display()
            );
            config = Self::load_from_file(project_config).await?;
        }

        // Override with environment variables
        config = Self::apply_env_overrides(config);

        Ok(config)
    }

    /// Get the user configuration file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pros-sketchy").join("config.toml"))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            WrapperError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            WrapperError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Self) -> Self {
        if let Ok(program) = std::env::var("PROS_SKETCHY_DELEGATE") {
            if !program.is_empty() {
                config.delegate.program = program;
            }
        }

        if let Ok(timeout) = std::env::var("PROS_SKETCHY_TIMEOUT") {
            // 0 disables the deadline
            config.delegate.timeout_seconds = timeout.parse::<u64>().ok().filter(|s| *s > 0);
        }

        if let Ok(level) = std::env::var("PROS_SKETCHY_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.delegate.program, "pros");
        assert!(config.delegate.working_directory.is_none());
        assert!(config.delegate.timeout_seconds.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[delegate]
program = "/opt/pros/bin/pros"
"#,
        )
        .unwrap();

        assert_eq!(config.delegate.program, "/opt/pros/bin/pros");
        assert!(config.delegate.timeout_seconds.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_full_file_parses() {
        let config: Config = toml::from_str(
            r#"
[delegate]
program = "pros"
working_directory = "/home/team/robot"
timeout_seconds = 600

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(
            config.delegate.working_directory,
            Some(PathBuf::from("/home/team/robot"))
        );
        assert_eq!(config.delegate.timeout_seconds, Some(600));
        assert_eq!(config.logging.level, "debug");
    }

    // Single test for all env overrides; parallel tests mutating the same
    // variables would race.
    #[test]
    fn test_env_overrides() {
        std::env::set_var("PROS_SKETCHY_DELEGATE", "pros-beta");
        std::env::set_var("PROS_SKETCHY_TIMEOUT", "45");
        std::env::set_var("PROS_SKETCHY_LOG_LEVEL", "trace");

        let config = Config::apply_env_overrides(Config::default());

        assert_eq!(config.delegate.program, "pros-beta");
        assert_eq!(config.delegate.timeout_seconds, Some(45));
        assert_eq!(config.logging.level, "trace");

        // 0 disables the deadline
        std::env::set_var("PROS_SKETCHY_TIMEOUT", "0");
        let config = Config::apply_env_overrides(Config::default());
        assert!(config.delegate.timeout_seconds.is_none());

        std::env::remove_var("PROS_SKETCHY_DELEGATE");
        std::env::remove_var("PROS_SKETCHY_TIMEOUT");
        std::env::remove_var("PROS_SKETCHY_LOG_LEVEL");
    }
}
