use clap::Parser;

use squadforge::adapter::inbound::cli::command::{Cli, ColorChoice, Commands};
use squadforge::adapter::inbound::cli::exit::exit_code;
use squadforge::adapter::inbound::cli::output::{self, OutputConfig};
use squadforge::adapter::inbound::cli::{build, check, top};
use squadforge::infrastructure::config::logging::LoggingConfig;

fn main() {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    let output_config = OutputConfig::new(cli.json, cli.quiet, cli.verbose);
    output::configure(output_config);

    let result = match &cli.command {
        Commands::Build(args) => build::execute(args, output_config.log_level()),
        Commands::Top(args) => {
            init_quiet_logging(output_config.log_level());
            top::execute(args)
        }
        Commands::Check(args) => {
            init_quiet_logging(output_config.log_level());
            check::execute(args)
        }
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(exit_code(&e));
    }
}

/// Commands without a config file only log warnings unless `-v` is given.
fn init_quiet_logging(level: Option<&str>) {
    LoggingConfig {
        level: level.unwrap_or("warn").to_string(),
        ..LoggingConfig::default()
    }
    .init();
}
