//! Forced-Win Simulator: P(player X finishes first) under "X always plays the leader and
//! always wins."

use rand::Rng;

use crate::factor_pair::factor_pair_with_bye;
use crate::round::{play_round, Pairing};
use crate::standings::Standings;

/// One contender's empirical forced-win probability.
#[derive(Debug, Clone, PartialEq)]
pub struct ForcedWinResult {
    pub player_index: usize,
    pub name: String,
    /// The contender's current rank at the time of analysis.
    pub rank: usize,
    pub win_probability: f64,
}

/// Build the pairing for one forced-win round: the leader always plays `x_rank`, and the
/// remainder of the field (every other rank) is factor-paired among themselves.
///
/// `leader_rank` and `x_rank` are expressed in the current (pre-removal) standings' rank
/// indices; the remainder is mapped back to those same indices after being factor-paired in
/// its own compact index space, so no actual removal/reinsertion of standings entries is
/// needed — the two singled-out ranks are simply excluded from the remainder before pairing.
fn factor_pair_minus_player(player_count: usize, leader_rank: usize, x_rank: usize, nrl: usize) -> Vec<Pairing> {
    let remainder_ranks: Vec<usize> = (0..player_count)
        .filter(|&rank| rank != leader_rank && rank != x_rank)
        .collect();

    let mut pairings = vec![(leader_rank, Some(x_rank))];
    for (a, b) in factor_pair_with_bye(remainder_ranks.len(), nrl) {
        pairings.push((remainder_ranks[a], b.map(|b| remainder_ranks[b])));
    }
    pairings
}

/// Estimate, for every contender below the current leader, the probability that they finish
/// rank 0 if every remaining round they are paired with the (re-sorted) leader and coerced to
/// win.
///
/// Contenders are processed from rank 1 downward. A contender is mathematically eliminated,
/// and the scan stops (no result is reported for them or anyone ranked below), once
/// `(leader.wins - contender.wins) / 2 > remaining_rounds + 1` — even winning every remaining
/// game against the leader cannot close the gap.
pub fn forced_win_probabilities<R: Rng + ?Sized>(
    standings: &Standings,
    start_round: usize,
    final_round: usize,
    trials: usize,
    rng: &mut R,
) -> Vec<ForcedWinResult> {
    let remaining_rounds = final_round.saturating_sub(start_round);
    let leader_wins = standings[0].wins;

    let mut results = Vec::new();
    for rank in 1..standings.len() {
        let candidate = &standings[rank];
        if (leader_wins - candidate.wins) / 2 > remaining_rounds as i64 + 1 {
            break;
        }
        let player_index = candidate.index;
        let name = candidate.name.clone();

        let mut trial_wins = 0usize;
        for _ in 0..trials {
            if run_forced_win_trial(standings, player_index, remaining_rounds, rng) {
                trial_wins += 1;
            }
        }

        results.push(ForcedWinResult {
            player_index,
            name,
            rank,
            win_probability: if trials == 0 {
                0.0
            } else {
                trial_wins as f64 / trials as f64
            },
        });
    }
    results
}

fn run_forced_win_trial<R: Rng + ?Sized>(
    standings: &Standings,
    player_index: usize,
    remaining_rounds: usize,
    rng: &mut R,
) -> bool {
    let mut trial = standings.clone();
    for round_offset in 0..remaining_rounds {
        let x_rank = trial
            .iter()
            .position(|s| s.index == player_index)
            .expect("forced-win contender must remain present across a trial's own standings");
        if x_rank == 0 {
            return true;
        }
        let nrl = remaining_rounds - round_offset;
        let pairings = factor_pair_minus_player(trial.len(), 0, x_rank, nrl);
        play_round(&pairings, &mut trial, Some(x_rank), rng);
        if trial[0].index == player_index {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::PlayerRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn standings_with_wins(wins_and_spread: &[(i64, i64)]) -> Standings {
        let records: Vec<PlayerRecord> = wins_and_spread
            .iter()
            .enumerate()
            .map(|(i, _)| PlayerRecord {
                name: format!("P{i}"),
                opponent_indexes: vec![],
                scores: vec![],
            })
            .collect();
        let (mut standings, _) = Standings::from_records(&records).unwrap();
        for (standing, &(wins, spread)) in standings.iter_mut().zip(wins_and_spread) {
            standing.wins = wins;
            standing.spread = spread;
        }
        standings.sort();
        standings
    }

    #[test]
    fn elimination_matches_scenario_s3() {
        // Leader at 10 wins, candidate at 4 wins, 2 remaining rounds: (10-4)/2 = 3, not > 3.
        let standings = standings_with_wins(&[(10, 0), (4, 0)]);
        let mut rng = StdRng::seed_from_u64(1);
        let results = forced_win_probabilities(&standings, 3, 5, 10, &mut rng);
        assert_eq!(results.len(), 1);

        // Leader at 10, candidate at 2: (10-2)/2 = 4 > 3, eliminated, no result.
        let standings = standings_with_wins(&[(10, 0), (2, 0)]);
        let results = forced_win_probabilities(&standings, 3, 5, 10, &mut rng);
        assert!(results.is_empty());
    }

    #[test]
    fn elimination_stops_lower_ranks_too() {
        let standings = standings_with_wins(&[(10, 0), (4, 0), (2, 0), (0, 0)]);
        let mut rng = StdRng::seed_from_u64(2);
        let results = forced_win_probabilities(&standings, 3, 5, 10, &mut rng);
        // Rank 1 (4 wins) qualifies; ranks 2 and 3 are eliminated and stop the scan.
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rank, 1);
    }

    #[test]
    fn two_player_forced_win_always_eventually_wins_with_enough_rounds() {
        let standings = standings_with_wins(&[(4, 0), (0, 0)]);
        let mut rng = StdRng::seed_from_u64(3);
        let results = forced_win_probabilities(&standings, 0, 4, 200, &mut rng);
        assert_eq!(results.len(), 1);
        // Forced to win every round by at least one point, X must eventually overtake on
        // wins alone within a few rounds.
        assert!(results[0].win_probability > 0.9);
    }

    #[test]
    fn factor_pair_minus_player_excludes_both_singled_out_ranks() {
        let pairings = factor_pair_minus_player(6, 0, 3, 2);
        assert_eq!(pairings[0], (0, Some(3)));
        let mut covered: Vec<usize> = pairings
            .iter()
            .flat_map(|&(a, b)| std::iter::once(a).chain(b))
            .collect();
        covered.sort();
        assert_eq!(covered, vec![0, 1, 2, 3, 4, 5]);
    }
}
