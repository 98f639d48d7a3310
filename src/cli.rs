//! Command-line surface.

use clap::{Parser, Subcommand};

use crate::inspect::DEFAULT_DATABASE;
use crate::render::ExtendedJsonMode;

/// Read-only MongoDB inspection: list collections or dump the game
/// collections of a database.
#[derive(Debug, Parser)]
#[command(name = "mongopeek", version, about)]
pub struct Cli {
    /// MongoDB connection string
    #[arg(
        long,
        default_value = "mongodb://localhost:27017",
        env = "MONGOPEEK_URI",
        global = true
    )]
    pub uri: String,

    /// Database to inspect
    #[arg(long = "db", default_value = DEFAULT_DATABASE, global = true)]
    pub database: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every collection name in the database
    Collections,
    /// Dump the TEAM, PLAYER, LOBBY, GAME and USER collections
    Dump {
        /// Cap each collection at this many documents (default: no cap)
        #[arg(long)]
        limit: Option<i64>,

        /// Pretty-print documents over multiple lines
        #[arg(long)]
        pretty: bool,

        /// Extended JSON flavor for document output
        #[arg(long, value_enum, default_value = "relaxed")]
        mode: ExtendedJsonMode,
    },
}
