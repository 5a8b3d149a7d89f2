mod history;
mod prompt;
mod report;
mod session;
mod tips;

use std::io;

use anyhow::Result;
use clap::Parser;
use greencity_core::{HistoryService, ImpactCalculator, InMemoryHistoryRepository, Settings};

use crate::session::Session;

#[derive(Parser)]
#[command(name = "greencity")]
#[command(about = "Estimate landfill reduction and environmental savings from better recycling", long_about = None)]
struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Start the interactive calculator (default)
    Run,
    /// Print waste reduction tips and exit
    Tips,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // stderr keeps diagnostics out of the report on stdout
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Tips) => {
            tips::render_tips(&mut io::stdout().lock())?;
        }
        Some(Commands::Run) | None => {
            let history = HistoryService::new(InMemoryHistoryRepository::new());
            let calculator = ImpactCalculator::new(Settings::default());
            let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), calculator, history);
            session.run()?;
        }
    }
    Ok(())
}
