//! Handler for the `check` command.

use std::fs;

use serde_json::json;

use crate::adapter::inbound::cli::command::CheckArgs;
use crate::adapter::inbound::cli::diagnostic::ConfigDiagnostic;
use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Validate a configuration file without running a search.
///
/// Invalid files are reported with a source-annotated diagnostic on stderr
/// before the error is returned.
#[allow(clippy::result_large_err)]
pub fn execute(args: &CheckArgs) -> Result<()> {
    let path = &args.config;
    let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

    let config = match Config::parse_toml(&content) {
        Ok(config) => config,
        Err(Error::Config(error)) => {
            if !output::is_json() {
                let diagnostic = ConfigDiagnostic::from_config_error(&error, &content);
                eprintln!("{:?}", miette::Report::new(diagnostic));
            }
            return Err(Error::Config(error));
        }
        Err(other) => return Err(other),
    };

    let rules = config.squad_rules();
    let limits = config.search_limits();
    let formations: Vec<String> = rules.formations.iter().map(ToString::to_string).collect();

    if output::is_json() {
        output::json_output(&json!({
            "command": "check",
            "config": path.display().to_string(),
            "valid": true,
            "rules": rules,
            "workers": limits.workers,
            "time_budget_ms": config.solver.time_budget_ms,
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Budget", format!("{:.1}", rules.budget));
    output::field(
        "Quotas",
        format!(
            "GK {} / DEF {} / MID {} / FWD {}",
            rules.quotas.gk, rules.quotas.def, rules.quotas.mid, rules.quotas.fwd
        ),
    );
    output::field("Team cap", rules.team_cap);
    output::field("Formations", formations.join(", "));
    output::field("Workers", limits.workers);
    match limits.time_budget {
        Some(budget) => output::field("Time budget", format!("{} ms", budget.as_millis())),
        None => output::field("Time budget", "none (search runs to optimality)"),
    }
    if let Some(min_score) = config.catalog.min_score {
        output::field("Min score", min_score);
    }

    Ok(())
}
