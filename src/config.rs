//! Configuration for the simulation/pairing engine.
//!
//! Layers, in increasing priority: compiled-in defaults, environment variables
//! ([`Configuration::from_env`]), then CLI flags applied on top via the `with_*` builders.
//!
//! # Environment Variables
//!
//! - `TOURNEY_VERBOSE` — enable debug-level logging (default: `false`)
//! - `TOURNEY_SEED` — RNG seed, parsed as `u64` (default: unset, nondeterministic)
//! - `TOURNEY_SIM_TRIALS` — number of Monte Carlo trials, parsed as `usize` (default: `100000`)
//! - `TOURNEY_PAYOUT` — lowest rank considered in the money, parsed as `usize` (default: `0`)

use std::path::PathBuf;

/// Default number of Monte Carlo trials run by the simulator when not overridden.
pub const DEFAULT_SIMULATION_TRIALS: usize = 100_000;

/// Default hopefulness threshold schedule, indexed by remaining-round count.
pub const DEFAULT_HOPEFULNESS_SCHEDULE: [f64; 6] = [0.0, 0.0, 0.10, 0.05, 0.01, 0.0025];

/// Engine-wide configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub(crate) verbose: bool,
    pub(crate) seed: Option<u64>,
    pub(crate) simulation_trials: usize,
    pub(crate) lowest_ranked_payout: Option<usize>,
    pub(crate) hopefulness_schedule: Vec<f64>,
    pub(crate) log_dir: Option<PathBuf>,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - Verbose (debug-level) logging is disabled.
    /// - The RNG is seeded nondeterministically.
    /// - 100,000 simulation trials are run.
    /// - No payout gate is applied (see [`Configuration::with_payout`]).
    /// - The built-in hopefulness schedule is used.
    pub fn new() -> Self {
        Self {
            verbose: false,
            seed: None,
            simulation_trials: DEFAULT_SIMULATION_TRIALS,
            lowest_ranked_payout: None,
            hopefulness_schedule: DEFAULT_HOPEFULNESS_SCHEDULE.to_vec(),
            log_dir: None,
        }
    }

    /// Create configuration from environment variables, falling back to defaults.
    ///
    /// See the module documentation for the recognized variable names.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        let seed = std::env::var("TOURNEY_SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());

        let simulation_trials = std::env::var("TOURNEY_SIM_TRIALS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_SIMULATION_TRIALS);

        let lowest_ranked_payout = std::env::var("TOURNEY_PAYOUT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());

        Self {
            verbose: get_env_flag("TOURNEY_VERBOSE", false),
            seed,
            simulation_trials,
            lowest_ranked_payout,
            hopefulness_schedule: DEFAULT_HOPEFULNESS_SCHEDULE.to_vec(),
            log_dir: None,
        }
    }

    /// Enable or disable debug-level logging.
    pub fn with_verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Set the RNG seed. Omitting this leaves the RNG nondeterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of Monte Carlo trials the simulator runs per call.
    pub fn with_simulation_trials(mut self, trials: usize) -> Self {
        self.simulation_trials = trials;
        self
    }

    /// Set the lowest rank still considered "in the money".
    ///
    /// `None` disables the pairing optimizer's payout-gate term entirely.
    pub fn with_payout(mut self, rank: Option<usize>) -> Self {
        self.lowest_ranked_payout = rank;
        self
    }

    /// Override the hopefulness schedule used by the contender analyzer.
    pub fn with_hopefulness_schedule(mut self, schedule: Vec<f64>) -> Self {
        self.hopefulness_schedule = schedule;
        self
    }

    /// Replace the whole schedule with a single constant threshold, matching the `--hope`
    /// flag's historical semantics of one scalar applied regardless of remaining rounds.
    pub fn with_constant_hopefulness(mut self, threshold: f64) -> Self {
        self.hopefulness_schedule = vec![threshold; DEFAULT_HOPEFULNESS_SCHEDULE.len()];
        self
    }

    /// Enable logging to the given directory; falls back to stderr when unset.
    pub fn with_log_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.log_dir = Some(path.into());
        self
    }

    /// Hopefulness threshold for a given remaining-round count.
    ///
    /// Out-of-range remaining-round counts use `h = 0.0`, matching the original schedule's
    /// "any nonzero count qualifies" fallback.
    pub fn hopefulness(&self, remaining_rounds: usize) -> f64 {
        self.hopefulness_schedule
            .get(remaining_rounds)
            .copied()
            .unwrap_or(0.0)
    }

    pub(crate) fn is_logging_enabled(&self) -> bool {
        self.log_dir.is_some()
    }

    /// The configured RNG seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The configured number of Monte Carlo trials.
    pub fn simulation_trials(&self) -> usize {
        self.simulation_trials
    }

    /// The configured payout gate, if any.
    pub fn lowest_ranked_payout(&self) -> Option<usize> {
        self.lowest_ranked_payout
    }

    /// Whether verbose (debug-level) logging is enabled.
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
