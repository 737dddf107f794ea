//! Handler for the `build` command.

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::BuildArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::json_source::JsonPlayerFile;
use crate::domain::{CaptaincyAssignment, Player};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::planner::build_team_planner;
use crate::port::inbound::planner::{PlanTeam, TeamReport};
use crate::port::outbound::solver::SolutionStatus;
use crate::port::outbound::source::PlayerSource;

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "Pos")]
    position: &'static str,
    #[tabled(rename = "Id")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "")]
    role: &'static str,
}

impl PlayerRow {
    fn new(player: &Player, captaincy: &CaptaincyAssignment) -> Self {
        let role = if captaincy.captain().is_some_and(|c| c.id() == player.id()) {
            "C"
        } else if captaincy.vice_captain().is_some_and(|v| v.id() == player.id()) {
            "V"
        } else {
            ""
        };
        Self {
            position: player.position().code(),
            id: player.id().value(),
            name: player.name().to_string(),
            team: player.team().to_string(),
            price: format!("{:.1}", player.price()),
            score: player.score().round_dp(2).to_string(),
            role,
        }
    }
}

/// Apply command-line overrides on top of the loaded configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if an override makes the
/// configuration invalid.
#[allow(clippy::result_large_err)]
pub fn apply_overrides(config: &mut Config, args: &BuildArgs, log_level: Option<&str>) -> Result<()> {
    if let Some(budget) = args.budget {
        config.rules.budget = budget;
    }
    if let Some(ms) = args.time_budget_ms {
        config.solver.time_budget_ms = ms;
    }
    if let Some(workers) = args.workers {
        config.solver.workers = workers;
    }
    if let Some(level) = args.log_level.as_deref().or(log_level) {
        config.logging.level = level.to_string();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    config.revalidate()
}

/// Execute the build command.
#[allow(clippy::result_large_err)]
pub fn execute(args: &BuildArgs, log_level: Option<&str>) -> Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    apply_overrides(&mut config, args, log_level)?;
    config.init_logging();

    let source = JsonPlayerFile::new(&args.players);
    let records = source.load()?;
    let planner = build_team_planner(&config);
    let rules = config.squad_rules();
    let limits = config.search_limits();

    let pb = output::spinner(&format!("Selecting squad from {} players", records.len()));
    let report = match planner.plan(records, &rules, &limits) {
        Ok(report) => {
            output::spinner_success(&pb, "Squad selected");
            report
        }
        Err(e) => {
            output::spinner_fail(&pb, "Selection failed");
            return Err(e);
        }
    };

    if output::is_json() {
        output::json_output(&json!({
            "command": "build",
            "report": serde_json::to_value(&report)?,
        }));
        return Ok(());
    }

    render(&report);
    Ok(())
}

fn render(report: &TeamReport) {
    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Team");
    output::field("Formation", output::highlight(report.lineup.formation()));
    output::field(
        "Captain",
        report
            .captaincy
            .captain()
            .map_or_else(|| output::muted("none"), |p| p.name().to_string()),
    );
    output::field(
        "Vice-captain",
        report
            .captaincy
            .vice_captain()
            .map_or_else(|| output::muted("none"), |p| p.name().to_string()),
    );
    output::field("Squad cost", format!("{:.1}", report.total_cost));
    output::field("Starting points", report.starting_points.round_dp(2));
    output::field("Bench points", report.bench_points.round_dp(2));
    output::field("Status", report.status.as_str());

    output::section("Starting XI");
    print_table(report.lineup.starters(), &report.captaincy);

    output::section("Bench");
    print_table(report.lineup.bench(), &report.captaincy);

    output::section("Search");
    output::field("Nodes explored", report.stats.nodes_explored);
    output::field("Nodes pruned", report.stats.nodes_pruned);
    output::field("Elapsed", format!("{} ms", report.stats.elapsed_ms));

    if report.status == SolutionStatus::TimeLimited {
        output::warning("Time budget reached; this squad may not be optimal");
        output::hint("raise --time-budget-ms or set it to 0 for a certified optimum");
    }
}

fn print_table(players: &[Player], captaincy: &CaptaincyAssignment) {
    let rows: Vec<PlayerRow> = players.iter().map(|p| PlayerRow::new(p, captaincy)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output::lines(&table.to_string());
}
