//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. The file
//! is optional: every table has defaults matching the standard game rules.
//!
//! # Example
//!
//! ```no_run
//! use squadforge::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("squadforge.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::logging::LoggingConfig;
use super::rules::RulesConfig;
use super::solver::SolverConfig;
use crate::domain::SquadRules;
use crate::error::{ConfigError, Result};
use crate::port::outbound::solver::SearchLimits;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "squadforge.toml";

/// The `[catalog]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Drop players scoring at or below this value before selection.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub min_score: Option<Decimal>,
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Budget, quotas, team cap and formations.
    #[serde(default)]
    pub rules: RulesConfig,

    /// Time budget and worker count.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Pool pre-filtering.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if given, otherwise [`DEFAULT_CONFIG_FILE`] when it
    /// exists, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a chosen file cannot be read or is invalid.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Re-run validation, for use after command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    #[allow(clippy::result_large_err)]
    pub fn revalidate(&self) -> Result<()> {
        self.validate()
    }

    /// Rules value passed into every component.
    #[must_use]
    pub fn squad_rules(&self) -> SquadRules {
        self.rules.to_rules()
    }

    /// Search limits for one request.
    #[must_use]
    pub fn search_limits(&self) -> SearchLimits {
        self.solver.to_limits()
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.squad_rules().validate()?;

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got \"{}\"", self.logging.format),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.squad_rules(), SquadRules::default());
    }

    #[test]
    fn parses_every_table() {
        let config = Config::parse_toml(
            r#"
            [rules]
            budget = 95.0

            [solver]
            time_budget_ms = 1500
            workers = 2

            [catalog]
            min_score = 0.0

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.rules.budget, dec!(95));
        assert_eq!(config.search_limits().workers, 2);
        assert_eq!(config.catalog.min_score, Some(dec!(0)));
        assert!(config.logging.is_json());
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn rejects_bad_rules() {
        let result = Config::parse_toml("[rules]\nteam_cap = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "team_cap", .. }))
        ));
    }
}
