//! CLI commands and argument parsing

use crate::types::Direction;
use clap::{Parser, Subcommand};

/// pagelink CLI
#[derive(Parser, Debug)]
#[command(name = "pagelink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a link header string and print the structured result as JSON
    Parse {
        /// Raw link header value
        header: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Fetch a page and follow its link header
    Fetch {
        /// Page URL
        url: String,

        /// Link-header hops to follow after the first page
        #[arg(long, default_value = "0")]
        follow: u32,

        /// Direction to follow
        #[arg(long, value_enum, default_value = "next")]
        direction: DirectionArg,

        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },
}

/// Pagination direction argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DirectionArg {
    /// Toward earlier results
    Previous,
    /// Toward later results
    Next,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Previous => Direction::Previous,
            DirectionArg::Next => Direction::Next,
        }
    }
}
