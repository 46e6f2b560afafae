use anyhow::Result;

use melee_season_stats::cli::Command;
use melee_season_stats::{handle_events, handle_serve, handle_summary, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Summary { year, tag } => handle_summary(*year, tag),
        Command::Events { year } => handle_events(*year),
    }
}
