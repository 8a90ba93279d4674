use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use fauske_feeds::app::{self, RunSummary};
use fauske_feeds::{logging, FeedConfig};

#[derive(Parser)]
#[command(name = "fauske_feeds")]
#[command(about = "Builds app-ready JSON feeds from scraped Fauske news and cinema data")]
#[command(version = "0.1.0")]
struct Cli {
    /// Step to run; defaults to building the combined news feed
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Merge kommune and næringsforum news into aktuelt_combined.json
    Aktuelt,
    /// Simplify the raw cinema program
    KinoProgram,
    /// Build film details from the raw cinema program
    KinoFilmer,
    /// Group the raw culture program into events
    Kultur,
    /// Run every step in order
    All,
}

fn run_step(command: Commands, config: &FeedConfig) -> Result<()> {
    let summary: RunSummary = match command {
        Commands::Aktuelt => app::build_aktuelt_combined(config)?,
        Commands::KinoProgram => app::build_kino_program(config)?,
        Commands::KinoFilmer => app::build_kino_films(config)?,
        Commands::Kultur => app::build_kultur_program(config)?,
        Commands::All => {
            for step in [Commands::Aktuelt, Commands::KinoProgram, Commands::KinoFilmer, Commands::Kultur] {
                run_step(step, config)?;
            }
            return Ok(());
        }
    };
    println!("{}", summary);
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = FeedConfig::load()?;
    logging::init_logging(&config.log_dir);
    info!(data_dir = %config.data_dir.display(), "Starting");

    run_step(cli.command.unwrap_or(Commands::Aktuelt), &config)
}
