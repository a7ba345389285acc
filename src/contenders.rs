//! Contender Analyzer: the lowest current rank that still has a plausible shot at each place.

use crate::tally::Tally;

/// Built-in hopefulness schedule, indexed by remaining-round count (`final_round -
/// start_round`). A rank is "hopeful" for a place when its simulated frequency of finishing
/// there exceeds this threshold; out-of-range remaining-round counts fall back to `0.0`, so
/// any nonzero simulated count qualifies.
pub const DEFAULT_HOPEFULNESS_SCHEDULE: [f64; 6] = [0.0, 0.0, 0.10, 0.05, 0.01, 0.0025];

/// For each finishing place, the largest current-rank index whose simulated frequency of
/// finishing there exceeds the hopefulness threshold for `remaining_rounds`.
///
/// `schedule` is indexed by `remaining_rounds`; an out-of-range index uses `h = 0.0`. The
/// result has length `tally.player_count()`. Computed directly as a maximum over ranks rather
/// than relying on ascending iteration order to produce that maximum as a side effect.
pub fn lowest_ranked_contenders(
    tally: &Tally,
    standings: &crate::standings::Standings,
    remaining_rounds: usize,
    schedule: &[f64],
) -> Vec<usize> {
    let player_count = tally.player_count();
    let trials = tally.total_trials() as f64;
    let threshold = schedule.get(remaining_rounds).copied().unwrap_or(0.0);

    (0..player_count)
        .map(|place| {
            (0..player_count)
                .filter(|&rank| {
                    let player = standings[rank].index;
                    let frac = tally.get(player, place) as f64 / trials;
                    frac > threshold
                })
                .max()
                .unwrap_or(0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::PlayerRecord;
    use crate::standings::Standings;

    fn flat_standings(n: usize) -> Standings {
        let records: Vec<PlayerRecord> = (0..n)
            .map(|i| PlayerRecord {
                name: format!("P{i}"),
                opponent_indexes: vec![],
                scores: vec![],
            })
            .collect();
        Standings::from_records(&records).unwrap().0
    }

    #[test]
    fn zero_threshold_admits_any_nonzero_finisher() {
        let standings = flat_standings(4);
        let mut tally = Tally::new(4);
        // Only ranks 0..=2 ever finish in place 3 across the recorded trials.
        for _ in 0..10 {
            tally.record(&standings);
        }
        let lowest = lowest_ranked_contenders(&tally, &standings, 0, &DEFAULT_HOPEFULNESS_SCHEDULE);
        // Every rank always finishes at its own place in this fixture (standings never
        // change between records), so the lowest contender for place k is rank k itself.
        assert_eq!(lowest, vec![0, 1, 2, 3]);
    }

    #[test]
    fn out_of_range_remaining_rounds_falls_back_to_zero_threshold() {
        let standings = flat_standings(2);
        let mut tally = Tally::new(2);
        tally.record(&standings);
        let lowest =
            lowest_ranked_contenders(&tally, &standings, 99, &DEFAULT_HOPEFULNESS_SCHEDULE);
        assert_eq!(lowest, vec![0, 1]);
    }
}
