//! `tourney-pairing` CLI: `{sim, pair}` over a tournament history file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use tourney_pairing::config::Configuration;
use tourney_pairing::fetch::fetch_to_file;
use tourney_pairing::forced_win::forced_win_probabilities;
use tourney_pairing::history;
use tourney_pairing::logging::init_logger;
use tourney_pairing::pairing::next_round_pairing;
use tourney_pairing::report::{format_forced_win, format_pairing, format_standings, format_tally};
use tourney_pairing::simulator::simulate;
use tourney_pairing::standings::Standings;

#[derive(Parser)]
#[command(author, version, about = "Tournament simulation and pairing engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Read history from a local `.t` file.
    #[arg(long, global = true)]
    tfile: Option<PathBuf>,

    /// Download the history `.t` file from this URL before reading it.
    #[arg(long, global = true)]
    url: Option<String>,

    /// The current (completed) round.
    #[arg(long, global = true, default_value_t = 0)]
    start: usize,

    /// The last round of the tournament.
    #[arg(long, global = true)]
    r#final: usize,

    /// Number of Monte Carlo trials.
    #[arg(long = "sim", global = true, default_value_t = 100_000)]
    sim_trials: usize,

    /// Lowest rank considered "in the money" (0-based).
    #[arg(long, global = true, default_value_t = 0)]
    payout: usize,

    /// Hopefulness threshold override, applied to every remaining-round count.
    #[arg(long, global = true)]
    hope: Option<f64>,

    /// RNG seed; omitted means nondeterministic.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate the remainder of the tournament and print the place-distribution matrix.
    Sim,
    /// Emit the next round's pairing.
    Pair,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = Configuration::from_env()
        .with_verbose(cli.verbose)
        .with_simulation_trials(cli.sim_trials)
        .with_payout(Some(cli.payout));
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(hope) = cli.hope {
        config = config.with_constant_hopefulness(hope);
    }

    init_logger(&config);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Configuration) -> anyhow::Result<()> {
    if cli.tfile.is_some() == cli.url.is_some() {
        anyhow::bail!("required: exactly one of --tfile, --url");
    }

    let history_path = match (&cli.tfile, &cli.url) {
        (Some(path), None) => path.clone(),
        (None, Some(url)) => {
            let destination = PathBuf::from("a.t");
            info!(url, "downloading history file");
            fetch_to_file(url, &destination)?
        }
        _ => unreachable!("validated above"),
    };

    let records = history::read_file(&history_path, cli.start)?;
    let (mut standings, repeats) = Standings::from_records(&records)?;
    info!(players = standings.len(), "loaded tournament history");

    println!("Initial Standings:");
    print!("{}", format_standings(&standings));

    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Command::Sim => {
            let trials = config.simulation_trials();
            let tally = simulate(&mut standings, cli.start, cli.r#final, trials, &mut rng);
            standings.sort();
            info!(trials, "simulation complete");
            println!("\nSimulation Results:");
            print!("{}", format_tally(&tally, &standings));

            let forced_win = forced_win_probabilities(
                &standings,
                cli.start,
                cli.r#final,
                trials.min(10_000),
                &mut rng,
            );
            if !forced_win.is_empty() {
                println!("\nForced-Win Probabilities:");
                print!("{}", format_forced_win(&forced_win));
            }
        }
        Command::Pair => {
            let decisions = next_round_pairing(
                &standings,
                &repeats,
                cli.start,
                cli.r#final,
                Some(cli.payout),
                config,
                &mut rng,
            );
            info!(pairs = decisions.len(), "pairing emitted");
            println!("\nNext Round Pairing:");
            print!("{}", format_pairing(&decisions, &standings));
        }
    }

    Ok(())
}
