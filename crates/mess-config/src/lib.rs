//! # mess-config
//!
//! Layered configuration loading for the mess manager using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MESS_*` prefix, `__` as separator)
//! 2. Project-level `.mess/config.toml`
//! 3. User-level `~/.config/mess/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MESS_POLLS__TOTAL_ELIGIBLE` -> `polls.total_eligible`,
//! `MESS_PAYMENTS__MONTHLY_FEE` -> `payments.monthly_fee`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mess_config::MessConfig;
//!
//! let config = MessConfig::load_with_dotenv().expect("config");
//! println!("eligible voters: {}", config.polls.total_eligible);
//! ```

mod error;
mod general;
mod payments;
mod polls;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use payments::PaymentConfig;
pub use polls::PollConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the project root.
pub const PROJECT_CONFIG: &str = ".mess/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MessConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub polls: PollConfig,
    #[serde(default)]
    pub payments: PaymentConfig,
}

impl MessConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain for a given project root.
    ///
    /// Public so tests can point at a temporary project directory or add
    /// providers on top.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("MESS_").split("__"))
    }

    /// Reject values that would break poll or payment invariants.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit == 0 {
            return Err(invalid("general.default_limit", "must be at least 1"));
        }
        if self.polls.total_eligible == 0 {
            return Err(invalid("polls.total_eligible", "must be at least 1"));
        }
        if self.payments.monthly_fee == 0 {
            return Err(invalid("payments.monthly_fee", "must be greater than zero"));
        }
        if self.payments.currency.trim().is_empty() {
            return Err(invalid("payments.currency", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mess").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MessConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.polls.total_eligible, 248);
        assert_eq!(config.payments.monthly_fee, 2500);
    }

    #[test]
    fn figment_builds_without_files() {
        Jail::expect_with(|_jail| {
            let config: MessConfig = MessConfig::figment().extract()?;
            assert_eq!(config.general.default_limit, 20);
            assert!(config.general.seed_sample_data);
            Ok(())
        });
    }

    #[test]
    fn project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            std::fs::create_dir_all(jail.directory().join(".mess")).map_err(|e| e.to_string())?;
            jail.create_file(
                PROJECT_CONFIG,
                r#"
                    [polls]
                    total_eligible = 120

                    [payments]
                    monthly_fee = 3000
                "#,
            )?;
            let config = MessConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.polls.total_eligible, 120);
            assert_eq!(config.payments.monthly_fee, 3000);
            assert_eq!(config.payments.currency, "INR");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_project_file() {
        Jail::expect_with(|jail| {
            std::fs::create_dir_all(jail.directory().join(".mess")).map_err(|e| e.to_string())?;
            jail.create_file(PROJECT_CONFIG, "[polls]\ntotal_eligible = 120\n")?;
            jail.set_env("MESS_POLLS__TOTAL_ELIGIBLE", "300");
            jail.set_env("MESS_GENERAL__SEED_SAMPLE_DATA", "false");
            let config = MessConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.polls.total_eligible, 300);
            assert!(!config.general.seed_sample_data);
            Ok(())
        });
    }

    #[test]
    fn zero_headcount_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("MESS_POLLS__TOTAL_ELIGIBLE", "0");
            let err = MessConfig::load().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref field, .. } if field == "polls.total_eligible"
            ));
            Ok(())
        });
    }
}
