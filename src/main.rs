mod cli;
mod error;
mod input;
mod output;
mod perspective;
mod terraform;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::ChtcfgError;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = input::read_source(cli.state_file.as_deref()).map_err(ChtcfgError::from)?;
    let config = output::reconstruct_config(&raw)?;
    print!("{config}");

    Ok(())
}
