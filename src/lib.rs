//! # tourney-pairing
//!
//! A decision-support engine for a round-based head-to-head game tournament (Scrabble-style:
//! two-win games, points-spread tiebreak, optional bye). Given the results through some round
//! of a tournament, it simulates the remainder of the schedule a large number of times to
//! produce an empirical place-distribution matrix, and computes the pairing for the next round
//! that balances competitive integrity against rematch avoidance and payout-relevant
//! contention.
//!
//! The core engine — [`standings`], [`round`], [`factor_pair`], [`simulator`], [`contenders`],
//! [`forced_win`], [`matching`], and [`pairing`] — is tightly coupled around one shared data
//! model: the player [`standings::Standings`]. [`history`] and [`fetch`] load that model from a
//! tournament result file; [`report`] renders it back out for a human. [`score_monitor`] is an
//! unrelated game-annotation-log watcher bundled as a separate binary.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tourney_pairing::history::PlayerRecord;
//! use tourney_pairing::simulator::simulate;
//! use tourney_pairing::standings::Standings;
//!
//! let records = vec![
//!     PlayerRecord { name: "John Doe".into(), opponent_indexes: vec![1], scores: vec![400] },
//!     PlayerRecord { name: "Jane Roe".into(), opponent_indexes: vec![0], scores: vec![350] },
//! ];
//! let (mut standings, _repeats) = Standings::from_records(&records).unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//! let tally = simulate(&mut standings, 1, 2, 1000, &mut rng);
//! assert_eq!(tally.get(0, 0) + tally.get(1, 0), 1000);
//! ```

pub mod config;
pub mod contenders;
pub mod factor_pair;
pub mod fetch;
pub mod forced_win;
pub mod history;
pub mod logging;
pub mod matching;
pub mod pairing;
pub mod report;
pub mod round;
pub mod score_monitor;
pub mod simulator;
pub mod standings;
pub mod tally;

pub use anyhow;

/// Commonly used types for quick access.
///
/// ```
/// use tourney_pairing::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Configuration;
    pub use crate::contenders::lowest_ranked_contenders;
    pub use crate::factor_pair::factor_pair;
    pub use crate::forced_win::forced_win_probabilities;
    pub use crate::history::PlayerRecord;
    pub use crate::pairing::next_round_pairing;
    pub use crate::round::play_round;
    pub use crate::simulator::simulate;
    pub use crate::standings::Standings;
    pub use crate::tally::Tally;
}
