use clap::{Parser, Subcommand};

use crate::database::models::PlayerId;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// Path to the SQLite database (overrides DATABASE_PATH)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the tournament tables if they are missing
    Init,
    /// Drop and recreate the tournament tables
    Reset,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: PlayerId,
        /// Id of the player who lost
        loser: PlayerId,
    },
    /// Print the number of registered players
    Count,
    /// Print players ordered by wins, lowest first
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Print pairings for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// Print every reported match
    Matches {
        #[arg(long)]
        json: bool,
    },
    /// Remove all match records (win/match counters are kept)
    DeleteMatches,
    /// Remove all players and their matches
    DeletePlayers,
    /// Start the HTTP API
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
