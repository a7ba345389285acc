//! `score-monitor`: watches a GCG game log and republishes running scores and the unseen-tile
//! bag. Independent of the tournament simulation/pairing core.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use tourney_pairing::config::Configuration;
use tourney_pairing::logging::init_logger;
use tourney_pairing::score_monitor::watch;

#[derive(Parser)]
#[command(author, version, about = "Watches a GCG log and republishes scores and unseen tiles")]
struct Cli {
    /// The GCG file to monitor.
    #[arg(long)]
    gcg: PathBuf,

    /// Output file for the running scores string.
    #[arg(long)]
    score: PathBuf,

    /// Output file for the unseen-tiles string.
    #[arg(long)]
    unseen: PathBuf,

    /// Output file for the tile/vowel/consonant counts summary.
    #[arg(long)]
    count: PathBuf,

    /// Poll interval, in milliseconds.
    #[arg(long, default_value_t = 500)]
    poll_millis: u64,

    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Configuration::from_env().with_verbose(cli.verbose);
    init_logger(&config);

    info!(gcg = %cli.gcg.display(), "watching GCG log");
    match watch(
        &cli.gcg,
        &cli.score,
        &cli.unseen,
        &cli.count,
        Duration::from_millis(cli.poll_millis),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
