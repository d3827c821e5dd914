//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/mirabilis/config.toml)
//! 3. Environment variables (MIRABILIS_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::store::ResetPolicy;

/// Environment variable prefix
const ENV_PREFIX: &str = "MIRABILIS";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory for data storage (the quote database)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding the four content resource files; `None` means the
    /// resources bundled into the binary are used
    #[serde(default)]
    pub content_dir: Option<PathBuf>,

    /// Opt in to discarding the quote store when its schema version doesn't
    /// match the expected one
    #[serde(default)]
    pub allow_schema_reset: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            content_dir: None,
            allow_schema_reset: false,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (MIRABILIS_DATA_DIR, MIRABILIS_CONTENT_DIR,
    ///    MIRABILIS_ALLOW_SCHEMA_RESET)
    /// 2. Config file (~/.config/mirabilis/config.toml or MIRABILIS_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.ensure_data_dir()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // MIRABILIS_DATA_DIR
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // MIRABILIS_CONTENT_DIR
        if let Ok(val) = std::env::var(format!("{}_CONTENT_DIR", ENV_PREFIX)) {
            self.content_dir = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }

        // MIRABILIS_ALLOW_SCHEMA_RESET
        if let Ok(val) = std::env::var(format!("{}_ALLOW_SCHEMA_RESET", ENV_PREFIX)) {
            self.allow_schema_reset = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }

    /// Ensure data directory exists
    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with MIRABILIS_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mirabilis")
            .join("config.toml")
    }

    /// Get the path to the quote database
    pub fn quotes_db_path(&self) -> PathBuf {
        self.data_dir.join("quotes.db")
    }

    /// The reset policy the `allow_schema_reset` flag opts into
    pub fn reset_policy(&self) -> ResetPolicy {
        if self.allow_schema_reset {
            ResetPolicy::Recreate
        } else {
            ResetPolicy::Refuse
        }
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mirabilis")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to serialize tests that touch environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Guard that locks env access and saves/restores env vars
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
        saved: Vec<(String, Option<String>)>,
    }

    impl<'a> EnvGuard<'a> {
        fn new(vars: &[&str]) -> Self {
            let lock = ENV_MUTEX.lock().unwrap();
            let saved = vars
                .iter()
                .map(|&name| (name.to_string(), env::var(name).ok()))
                .collect();
            // Clear all the vars
            for name in vars {
                env::remove_var(name);
            }
            Self { _lock: lock, saved }
        }
    }

    impl Drop for EnvGuard<'_> {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    const ENV_VARS: &[&str] = &[
        "MIRABILIS_DATA_DIR",
        "MIRABILIS_CONTENT_DIR",
        "MIRABILIS_ALLOW_SCHEMA_RESET",
    ];

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.content_dir.is_none());
        assert!(!config.allow_schema_reset);
        assert!(config.data_dir.ends_with("mirabilis"));
        assert_eq!(config.reset_policy(), ResetPolicy::Refuse);
    }

    #[test]
    fn test_quotes_db_path() {
        let config = Config::default();
        assert!(config.quotes_db_path().ends_with("quotes.db"));
    }

    #[test]
    fn test_env_override_data_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("MIRABILIS_DATA_DIR", "/tmp/mirabilis-test");
        config.apply_env_overrides();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/mirabilis-test"));
    }

    #[test]
    fn test_env_override_content_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        assert!(config.content_dir.is_none());

        env::set_var("MIRABILIS_CONTENT_DIR", "/srv/content");
        config.apply_env_overrides();
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/content")));

        // Empty string clears it
        env::set_var("MIRABILIS_CONTENT_DIR", "");
        config.apply_env_overrides();
        assert!(config.content_dir.is_none());
    }

    #[test]
    fn test_env_override_allow_schema_reset() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        assert!(!config.allow_schema_reset);

        env::set_var("MIRABILIS_ALLOW_SCHEMA_RESET", "true");
        config.apply_env_overrides();
        assert!(config.allow_schema_reset);
        assert_eq!(config.reset_policy(), ResetPolicy::Recreate);

        env::set_var("MIRABILIS_ALLOW_SCHEMA_RESET", "false");
        config.apply_env_overrides();
        assert!(!config.allow_schema_reset);
    }

    #[test]
    fn test_serialization() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config {
            data_dir: PathBuf::from("/data/mirabilis"),
            content_dir: Some(PathBuf::from("/srv/content")),
            allow_schema_reset: true,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("data_dir"));
        assert!(toml_str.contains("content_dir"));
        assert!(toml_str.contains("allow_schema_reset"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.data_dir, config.data_dir);
        assert_eq!(parsed.content_dir, config.content_dir);
        assert_eq!(parsed.allow_schema_reset, config.allow_schema_reset);
    }

    #[test]
    fn test_load_from_str() {
        let _guard = EnvGuard::new(ENV_VARS);

        let toml = r#"
            data_dir = "/custom/data"
            content_dir = "/custom/content"
            allow_schema_reset = true
        "#;

        let config = Config::load_from_str(toml).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/custom/data"));
        assert_eq!(config.content_dir, Some(PathBuf::from("/custom/content")));
        assert!(config.allow_schema_reset);
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let _guard = EnvGuard::new(ENV_VARS);
        let tmp = tempfile::TempDir::new().unwrap();
        env::set_var("MIRABILIS_DATA_DIR", tmp.path().join("data").to_str().unwrap());

        let path = PathBuf::from("/nonexistent/config.toml");
        let config = Config::load_from_path(&path).unwrap();
        // Should return defaults (plus env overrides) when file doesn't exist
        assert!(config.content_dir.is_none());
        assert!(!config.allow_schema_reset);
    }
}
