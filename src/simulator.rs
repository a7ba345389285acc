//! Simulator: runs N independent continuations of the tournament to produce a results tally.

use rand::Rng;

use crate::factor_pair::factor_pair_with_bye;
use crate::round::play_round;
use crate::standings::Standings;
use crate::tally::Tally;

/// Run `trials` independent continuations of the tournament from `start_round` through
/// `final_round` (exclusive), each starting from the same checkpointed standings, and
/// record where every player finishes in each trial.
///
/// Each trial plays the deterministic [`factor_pair_with_bye`] schedule round by round, records
/// the final standings into the tally, then resets the standings back to their checkpoint
/// before the next trial. The RNG stream is shared across all trials; standings are left reset
/// (but unsorted relative to the checkpoint's sort) when this returns.
pub fn simulate<R: Rng + ?Sized>(
    standings: &mut Standings,
    start_round: usize,
    final_round: usize,
    trials: usize,
    rng: &mut R,
) -> Tally {
    let mut tally = Tally::new(standings.len());

    for _ in 0..trials {
        for round in start_round..final_round {
            let nrl = final_round - round;
            let pairings = factor_pair_with_bye(standings.len(), nrl);
            play_round(&pairings, standings, None, rng);
        }
        tally.record(standings);
        standings.reset_all();
        standings.sort();
    }

    tally
}
