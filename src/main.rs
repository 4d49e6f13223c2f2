mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use numguess::games::rand_num;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with prompts.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let options = cli::Cli::parse().into_options();
    rand_num::run_game(options)?;
    Ok(())
}
