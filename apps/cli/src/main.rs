//! jobposting CLI: render job records as schema.org structured data.
//!
//! Loads a job record exported by the hosting content system and prints the
//! JSON-LD block to embed in the job's detail page.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
