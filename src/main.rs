use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;

use mongopeek::cli::{Cli, Command};
use mongopeek::connection::ConnectionManager;
use mongopeek::inspect;
use mongopeek::render::RenderOptions;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let manager = ConnectionManager::new();
    let client = manager.connect(&cli.uri).context("Failed to connect to MongoDB")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Collections => {
            inspect::write_collection_listing(&manager, &client, &cli.database, &mut out)?;
        }
        Command::Dump { limit, pretty, mode } => {
            let options = inspect::DumpOptions { limit, render: RenderOptions { mode, pretty } };
            inspect::write_database_dump(&manager, &client, &cli.database, options, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
