use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use streak_tournament::{Cli, TournamentConfig};

fn main() -> Result<()> {
    // logs go to stderr so stdout only carries boards and results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = TournamentConfig::from_cli(&cli)?;
    info!(?config, "starting tournament");

    let mut tournament = config.build();
    let tally = tournament.play()?;
    println!(
        "{}",
        tally.report(&config.player1_name, &config.player2_name)
    );

    Ok(())
}
