//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Proration configuration.
    #[serde(default)]
    pub proration: ProrationConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "prorata=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

/// Proration configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProrationConfig {
    /// Decimal places kept when truncating per-day amounts.
    ///
    /// `0` truncates to whole currency units.
    #[serde(default)]
    pub per_day_scale: u32,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("PRORATA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.logging.filter, "prorata=info");
        assert!(!config.logging.json);
        assert_eq!(config.proration.per_day_scale, 0);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "PRORATA__LOGGING__FILTER",
                "PRORATA__LOGGING__JSON",
                "PRORATA__PRORATION__PER_DAY_SCALE",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.logging.filter, "prorata=info");
                assert_eq!(config.proration.per_day_scale, 0);
            },
        );
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("PRORATA__LOGGING__FILTER", Some("prorata=debug")),
                ("PRORATA__LOGGING__JSON", Some("true")),
                ("PRORATA__PRORATION__PER_DAY_SCALE", Some("2")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.logging.filter, "prorata=debug");
                assert!(config.logging.json);
                assert_eq!(config.proration.per_day_scale, 2);
            },
        );
    }
}
