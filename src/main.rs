use anyhow::Result;
use clap::Parser;

use groupcheck::cli::Cli;
use groupcheck::provider::TomlProvider;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let provider = TomlProvider::load(cli.config.as_deref())?;
    let report = groupcheck::report::render(&provider)?;
    print!("{report}");

    Ok(())
}
