//! Team planner factory.

use crate::application::orchestrator::TeamPlanner;
use crate::infrastructure::config::settings::Config;

use super::solver::build_squad_solver;

/// Build a team planner wired from configuration.
#[must_use]
pub fn build_team_planner(config: &Config) -> TeamPlanner {
    TeamPlanner::new(build_squad_solver()).with_min_score(config.catalog.min_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn planner_uses_branch_and_bound() {
        let mut config = Config::default();
        config.catalog.min_score = Some(dec!(0));
        let planner = build_team_planner(&config);
        assert_eq!(planner.solver().name(), "branch_and_bound");
    }
}
