use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Melee season statistics from start.gg")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print one player's season summary as JSON
    Summary {
        /// Season year
        #[arg(short, long)]
        year: i32,
        /// Player gamer tag (case-insensitive)
        #[arg(short, long)]
        tag: String,
    },
    /// Resolve and print the events of a season
    Events {
        /// Season year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
}
