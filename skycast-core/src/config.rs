use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// City looked up when neither the command line nor the config names one.
pub const DEFAULT_CITY: &str = "London";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Belgorod"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com API key.
    pub api_key: Option<String>,

    /// City shown on startup when none is passed on the command line.
    pub default_city: Option<String>,
}

impl Config {
    /// Return the configured API key.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `skycast configure` and paste your WeatherAPI.com key."
            )
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Startup city: the configured default, or the built-in one.
    pub fn city(&self) -> &str {
        self.default_city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Store the default city; an empty or blank name clears it.
    pub fn set_default_city(&mut self, city: String) {
        let city = city.trim();
        self.default_city = if city.is_empty() {
            None
        } else {
            Some(city.to_string())
        };
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(!cfg.has_api_key());
    }

    #[test]
    fn set_api_key_and_read_it_back() {
        let mut cfg = Config::default();

        cfg.set_api_key("SECRET_KEY".into());

        assert_eq!(cfg.api_key().expect("key must exist"), "SECRET_KEY");
        assert!(cfg.has_api_key());
    }

    #[test]
    fn city_falls_back_to_the_builtin_default() {
        let cfg = Config::default();

        assert_eq!(cfg.city(), DEFAULT_CITY);
    }

    #[test]
    fn set_default_city_trims_whitespace() {
        let mut cfg = Config::default();

        cfg.set_default_city("  Tokyo  ".into());

        assert_eq!(cfg.city(), "Tokyo");
    }

    #[test]
    fn blank_default_city_clears_the_override() {
        let mut cfg = Config::default();

        cfg.set_default_city("Tokyo".into());
        cfg.set_default_city("   ".into());

        assert_eq!(cfg.city(), DEFAULT_CITY);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("SECRET_KEY".into());
        cfg.set_default_city("Belgorod".into());

        let toml = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&toml).expect("config must parse");

        assert_eq!(parsed.api_key().expect("key must exist"), "SECRET_KEY");
        assert_eq!(parsed.city(), "Belgorod");
    }
}
