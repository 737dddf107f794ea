//! Handler for the `top` command.

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::TopArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::json_source::JsonPlayerFile;
use crate::application::catalog::PlayerCatalog;
use crate::domain::Player;
use crate::error::Result;
use crate::port::outbound::source::PlayerSource;

#[derive(Tabled)]
struct RankRow {
    #[tabled(rename = "#")]
    rank: usize,
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
}

impl RankRow {
    fn new(rank: usize, player: &Player) -> Self {
        Self {
            rank,
            id: player.id().value(),
            name: player.name().to_string(),
            team: player.team().to_string(),
            price: format!("{:.1}", player.price()),
            score: player.score().round_dp(2).to_string(),
        }
    }
}

/// Execute the top command.
#[allow(clippy::result_large_err)]
pub fn execute(args: &TopArgs) -> Result<()> {
    let records = JsonPlayerFile::new(&args.players).load()?;
    let catalog = PlayerCatalog::from_records(records)?;
    let groups = catalog.top_by_position(args.count, args.position)?;

    if output::is_json() {
        let positions: serde_json::Map<String, serde_json::Value> = groups
            .iter()
            .map(|(position, players)| {
                Ok((position.code().to_string(), serde_json::to_value(players)?))
            })
            .collect::<Result<_>>()?;
        output::json_output(&json!({
            "command": "top",
            "count": args.count,
            "positions": positions,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    for (position, players) in &groups {
        output::section(&format!("Top {} {position}", args.count));
        if players.is_empty() {
            output::hint("no players at this position");
            continue;
        }
        let rows: Vec<RankRow> = players
            .iter()
            .enumerate()
            .map(|(i, p)| RankRow::new(i + 1, p))
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        output::lines(&table.to_string());
    }

    Ok(())
}
