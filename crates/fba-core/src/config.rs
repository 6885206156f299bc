//! Configuration file loading.
//!
//! Every key is optional; anything left out falls back to the built-in
//! defaults. Command-line flags are applied on top by the CLI.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{FbaError, FbaResult};
use crate::strength::{TeamTierNames, TeamTiers};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "fba.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub teams: TeamTierNames,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Pause before answering an analysis request. Zero disables it.
    #[serde(default = "default_think_delay_ms")]
    pub think_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            think_delay_ms: default_think_delay_ms(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_think_delay_ms() -> u64 {
    1500
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> FbaResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load the config.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is read from `dir` if present and the
    /// defaults are used otherwise.
    pub fn load(path: Option<&Path>, dir: &Path) -> FbaResult<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (dir.join(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(FbaError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)?;
        let config = Self::from_toml(&text)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Build the reference team table from the `[teams]` section.
    pub fn team_tiers(&self) -> TeamTiers {
        TeamTiers::new(self.teams.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::Tier;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.think_delay_ms, 1500);
        assert_eq!(config.teams.top.len(), 6);
        assert_eq!(config.teams.good.len(), 8);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 8080
            think_delay_ms = 0

            [teams]
            top = ["Inter Milan"]
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.think_delay_ms, 0);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.teams.good.len(), 8);

        let tiers = config.team_tiers();
        assert_eq!(tiers.classify("Inter"), Tier::Top);
        assert_eq!(tiers.classify("Liverpool"), Tier::Default);
        assert_eq!(tiers.classify("Newcastle United"), Tier::Good);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("[server]\nport = \"eighty\"").unwrap_err();
        assert!(matches!(err, FbaError::Toml(_)));
    }

    #[test]
    fn test_missing_default_file_is_fine() {
        let dir = std::env::temp_dir().join("fba-config-test-missing");
        let config = Config::load(None, &dir).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let dir = std::env::temp_dir();
        let err = Config::load(Some(Path::new("/nonexistent/fba.toml")), &dir).unwrap_err();
        assert!(matches!(err, FbaError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("fba-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(DEFAULT_CONFIG_FILE), "[server]\nport = 4040\n").unwrap();

        let config = Config::load(None, &dir).unwrap();
        assert_eq!(config.server.port, 4040);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
