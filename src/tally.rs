//! Results tally: a flat P×P matrix counting simulated finishing places per player.

use crate::standings::Standings;

/// Counts, across simulation trials, how often each player finished at each place.
///
/// `tally.get(player, place)` is the number of trials in which the player at the given
/// (original, not current-rank) index finished at `place`.
#[derive(Debug, Clone)]
pub struct Tally {
    player_count: usize,
    counts: Vec<u64>,
}

impl Tally {
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            counts: vec![0; player_count * player_count],
        }
    }

    fn cell(&self, player: usize, place: usize) -> usize {
        player * self.player_count + place
    }

    /// Record one trial's outcome: for every rank `k` in the sorted standings, increment the
    /// count for that player finishing at place `k`.
    pub fn record(&mut self, standings: &Standings) {
        for (place, standing) in standings.iter().enumerate() {
            let cell = self.cell(standing.index, place);
            self.counts[cell] += 1;
        }
    }

    /// Number of trials recording `player` finishing at `place`.
    pub fn get(&self, player: usize, place: usize) -> u64 {
        self.counts[self.cell(player, place)]
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Total trials recorded, computed from the first player's row (all rows sum equally).
    pub fn total_trials(&self) -> u64 {
        (0..self.player_count).map(|place| self.get(0, place)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings_from_ranks(names: &[&str]) -> Standings {
        let records: Vec<crate::history::PlayerRecord> = names
            .iter()
            .map(|n| crate::history::PlayerRecord {
                name: (*n).to_string(),
                opponent_indexes: vec![],
                scores: vec![],
            })
            .collect();
        let (standings, _) = Standings::from_records(&records).unwrap();
        standings
    }

    #[test]
    fn records_rank_order_per_trial() {
        let mut tally = Tally::new(2);
        let standings = standings_from_ranks(&["A", "B"]);
        tally.record(&standings);
        assert_eq!(tally.get(0, 0), 1);
        assert_eq!(tally.get(1, 1), 1);
        assert_eq!(tally.get(0, 1), 0);
    }

    #[test]
    fn row_and_column_sums_match_trial_count() {
        let mut tally = Tally::new(3);
        let standings = standings_from_ranks(&["A", "B", "C"]);
        for _ in 0..5 {
            tally.record(&standings);
        }
        for player in 0..3 {
            let row_sum: u64 = (0..3).map(|place| tally.get(player, place)).sum();
            assert_eq!(row_sum, 5);
        }
        for place in 0..3 {
            let col_sum: u64 = (0..3).map(|player| tally.get(player, place)).sum();
            assert_eq!(col_sum, 5);
        }
    }
}
